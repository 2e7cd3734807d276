use std::collections::HashMap;
use std::path::{Path, PathBuf};
use rayon::prelude::*;
use crate::error::Result;
use crate::font::FontLoader;
use crate::models::Config;
use crate::utils::{dir_name, find_font_files, list_subdirectories, Logger};
use super::processor::{plan_font_file, process_font_file, FontJob};

/// Patch every font of one family folder.
///
/// Style subfolders take precedence: when a family has any, their names
/// become the display style of the fonts inside and loose files next to them
/// are ignored. Returns how many distinct fonts were written.
pub fn process_family_directory<L: FontLoader>(
    loader: &L,
    family_dir: &Path,
    config: &Config,
    logger: &dyn Logger,
) -> Result<usize> {
    let family_name = dir_name(family_dir);
    logger.info(&format!("Processing family: {}", family_name));

    let style_dirs = list_subdirectories(family_dir)?;
    let mut jobs = Vec::new();

    if style_dirs.is_empty() {
        let font_files = find_font_files(family_dir)?;
        if font_files.is_empty() {
            logger.warn(&format!(
                "No font files found in family directory: {}",
                family_dir.display()
            ));
        }
        jobs.extend(plan_files(&font_files, &family_name, None, config, logger));
    }

    for style_dir in style_dirs {
        let style_name = dir_name(&style_dir);
        let font_files = find_font_files(&style_dir)?;

        if font_files.is_empty() {
            logger.warn(&format!(
                "No font files found in style directory: {}",
                style_dir.display()
            ));
            continue;
        }

        logger.info(&format!("Processing style: {}", style_name));
        jobs.extend(plan_files(
            &font_files,
            &family_name,
            Some(style_name.as_str()),
            config,
            logger,
        ));
    }

    run_jobs(loader, group_by_output(jobs, logger), logger)
}

fn plan_files(
    font_files: &[PathBuf],
    family_name: &str,
    style_folder: Option<&str>,
    config: &Config,
    logger: &dyn Logger,
) -> Vec<FontJob> {
    font_files
        .iter()
        .map(|path| plan_font_file(path, family_name, style_folder, config, logger))
        .collect()
}

/// Bucket jobs by output path, keeping discovery order inside each bucket.
///
/// Sources sharing an output are written one after another, so the last one
/// discovered wins.
fn group_by_output(jobs: Vec<FontJob>, logger: &dyn Logger) -> Vec<Vec<FontJob>> {
    let mut groups: Vec<Vec<FontJob>> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    for job in jobs {
        match index.get(&job.output_path) {
            Some(&slot) => {
                let group = &mut groups[slot];
                if let Some(previous) = group.last() {
                    logger.warn(&format!(
                        "{} and {} both generate {}, keeping the latter",
                        previous.source.display(),
                        job.source.display(),
                        job.output_path.display()
                    ));
                }
                group.push(job);
            }
            None => {
                index.insert(job.output_path.clone(), groups.len());
                groups.push(vec![job]);
            }
        }
    }
    groups
}

/// Distinct outputs run on the rayon pool; each returns its path once
fn run_jobs<L: FontLoader>(loader: &L, groups: Vec<Vec<FontJob>>, logger: &dyn Logger) -> Result<usize> {
    let outputs = groups
        .par_iter()
        .map(|group| {
            let mut output = PathBuf::new();
            for job in group {
                output = process_font_file(loader, job, logger)?;
            }
            Ok(output)
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    Ok(outputs.len())
}
