use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::font::{apply_metadata, classify, resolve, EditableFont, FontLoader, GENERATE_FLAGS};
use crate::models::{Config, MetadataRecord, SynthesizedNames};
use crate::utils::{dir_name, ensure_directory_exists, output_file_name, synthesize, Logger};

/// One source font with everything needed to write it, worked out before the
/// font itself is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontJob {
    pub source: PathBuf,
    pub record: MetadataRecord,
    pub names: SynthesizedNames,
    /// Where the patched font goes, `<output>/<family>/<file name>`
    pub output_path: PathBuf,
}

/// Derive the metadata, names and output path for one font file
pub fn plan_font_file(
    path: &Path,
    family_name: &str,
    style_folder: Option<&str>,
    config: &Config,
    logger: &dyn Logger,
) -> FontJob {
    let style = classify(&dir_name(path), style_folder);
    let record = resolve(family_name, &style, &config.options, logger);
    let names = synthesize(&record.family_name, &record.style, record.lowercase);

    let file_name = output_file_name(&names, path, config.extension.as_deref());
    let output_path = config.output_dir.join(family_name).join(file_name);

    FontJob {
        source: path.to_path_buf(),
        record,
        names,
        output_path,
    }
}

/// Patch one planned font and write it to its output path.
///
/// Failures are logged here and handed back to the family loop.
pub fn process_font_file<L: FontLoader>(loader: &L, job: &FontJob, logger: &dyn Logger) -> Result<PathBuf> {
    logger.info(&format!("Processing: {}", job.source.display()));

    match patch_font(loader, job, logger) {
        Ok(()) => {
            logger.info(&format!("Successfully generated: {}", job.output_path.display()));
            Ok(job.output_path.clone())
        }
        Err(e) => {
            logger.error(&format!("Error processing {}: {}", job.source.display(), e));
            Err(e)
        }
    }
}

fn patch_font<L: FontLoader>(loader: &L, job: &FontJob, logger: &dyn Logger) -> Result<()> {
    let mut font = loader.open(&job.source)?;

    apply_metadata(&mut font, &job.record, &job.names, logger);

    if let Some(family_output_dir) = job.output_path.parent() {
        ensure_directory_exists(family_output_dir, logger)?;
    }

    logger.info(&format!("Generating: {}", job.output_path.display()));
    font.save(&job.output_path, &GENERATE_FLAGS)
}
