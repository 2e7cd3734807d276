use std::path::Path;
use crate::models::{StyleInfo, SynthesizedNames};

/// Capitalize the first letter of each word in a string
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Derive the PostScript, full and file names for a family and style.
///
/// Case folding already happened upstream when `lowercase` is set; here it
/// only decides whether the SubFamily string gets title-cased.
pub fn synthesize(family_name: &str, style: &StyleInfo, lowercase: bool) -> SynthesizedNames {
    let compact_style = style.display_style.replace(' ', "");
    let postscript_name = format!("{}-{}", family_name, compact_style);
    let full_name = format!("{} {}", family_name, style.display_style);

    let output_file_base_name = if lowercase {
        postscript_name.to_lowercase()
    } else {
        postscript_name.clone()
    };

    let subfamily = if lowercase {
        style.display_style.clone()
    } else {
        capitalize_words(&style.display_style)
    };

    SynthesizedNames {
        unique_id: format!("{}-{}", family_name, compact_style),
        postscript_name,
        full_name,
        output_file_base_name,
        subfamily,
    }
}

/// File name for the patched font: the explicit extension if one was asked
/// for, otherwise the source file's extension unchanged
pub fn output_file_name(names: &SynthesizedNames, source: &Path, extension: Option<&str>) -> String {
    let extension = match extension {
        Some(ext) => Some(ext.trim_start_matches('.').to_string()),
        None => source
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned()),
    };

    match extension {
        Some(ext) if !ext.is_empty() => format!("{}.{}", names.output_file_base_name, ext),
        _ => names.output_file_base_name.clone(),
    }
}
