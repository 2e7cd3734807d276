use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::utils::logging::Logger;

/// Extensions picked up as font files, compared case-insensitively
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

/// Extensions patched fonts can be written as; both are plain SFNT
pub const OUTPUT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Create a directory if it doesn't exist.
///
/// Safe to race: concurrent callers creating the same directory all succeed.
pub fn ensure_directory_exists(dir: &Path, logger: &dyn Logger) -> Result<()> {
    if !dir.is_dir() {
        logger.debug(&format!("Directory {} does not exist. Creating it now.", dir.display()));
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Whether an extension override, with or without its leading dot, names a
/// format fonts can be written as
pub fn is_output_extension(extension: &str) -> bool {
    let extension = extension.trim_start_matches('.').to_lowercase();
    OUTPUT_EXTENSIONS.contains(&extension.as_str())
}

/// Whether a path carries one of the font extensions
pub fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Find the font files directly inside a directory, sorted by path
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_font_extension(&path) {
            fonts.push(path);
        }
    }
    fonts.sort();
    Ok(fonts)
}

/// List the subdirectories of a directory, sorted by path
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Final path component as an owned string
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
