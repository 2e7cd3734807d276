use crate::error::{Error, Result};
use crate::font::FontLoader;
use crate::models::Config;
use crate::utils::{dir_name, ensure_directory_exists, is_output_extension, list_subdirectories, Logger};
use super::family::process_family_directory;

/// Outcome of a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Family folders visited
    pub families: usize,
    /// Families skipped after an error
    pub failed_families: Vec<String>,
    /// Fonts written to the output directory
    pub fonts_written: usize,
}

/// Patch every family under the source directory.
///
/// A missing source directory, an extension override naming a format that
/// can't be written, or an empty family set is fatal. A failing
/// family is logged and skipped, unless debug mode is on, in which case the
/// error aborts the batch.
pub fn run_batch<L: FontLoader>(loader: &L, config: &Config, logger: &dyn Logger) -> Result<BatchReport> {
    if !config.src_dir.is_dir() {
        logger.error(&format!(
            "Source directory does not exist: {}",
            config.src_dir.display()
        ));
        return Err(Error::InvalidPath(config.src_dir.clone()));
    }

    if let Some(extension) = &config.extension {
        if !is_output_extension(extension) {
            logger.error(&format!("Cannot write fonts with extension: {}", extension));
            return Err(Error::Config(format!(
                "unsupported output extension {:?}, expected ttf or otf",
                extension
            )));
        }
    }

    ensure_directory_exists(&config.output_dir, logger)?;

    logger.info("Font Metadata Patcher starting...");
    logger.info(&format!("Source: {}", config.src_dir.display()));
    logger.info(&format!("Output: {}", config.output_dir.display()));

    let mut report = BatchReport::default();

    if let Some(family) = &config.family {
        let family_dir = config.src_dir.join(family);
        if !family_dir.is_dir() {
            logger.error(&format!(
                "Family directory does not exist: {}",
                family_dir.display()
            ));
            return Err(Error::InvalidPath(family_dir));
        }

        report.families = 1;
        report.fonts_written = process_family_directory(loader, &family_dir, config, logger)?;
    } else {
        let family_dirs = list_subdirectories(&config.src_dir)?;
        if family_dirs.is_empty() {
            logger.error(&format!(
                "No family directories found in: {}",
                config.src_dir.display()
            ));
            return Err(Error::Config(format!(
                "no family directories in {}",
                config.src_dir.display()
            )));
        }

        for family_dir in family_dirs {
            let family_name = dir_name(&family_dir);
            report.families += 1;

            match process_family_directory(loader, &family_dir, config, logger) {
                Ok(written) => report.fonts_written += written,
                Err(e) => {
                    logger.error(&format!("Error processing family {}: {}", family_name, e));
                    if config.debug_mode {
                        return Err(Error::Batch(format!("family {}: {}", family_name, e)));
                    }
                    report.failed_families.push(family_name);
                }
            }
        }
    }

    logger.info("Font Metadata Patcher completed!");
    Ok(report)
}
