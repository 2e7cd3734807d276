use std::ffi::OsString;
use std::path::PathBuf;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use crate::models::{Config, FamilyClass, PatchOptions, Width};

/// Font Metadata Patcher - Sets proper metadata for font families and styles
#[derive(Parser, Debug, Clone)]
#[command(name = "fontpatch", disable_version_flag = true)]
pub struct Args {
    /// Source directory containing font families
    #[arg(short = 's', long = "src", default_value = "src")]
    pub src: PathBuf,

    /// Output directory for processed fonts
    #[arg(short = 'o', long = "output", default_value = "build")]
    pub output: PathBuf,

    /// Set font version (e.g. "1.000")
    #[arg(short = 'v', long = "version")]
    pub version: Option<String>,

    /// Set OS/2 width class
    #[arg(long, value_enum, default_value_t = Width::Normal)]
    pub width: Width,

    /// Set PFM family type
    #[arg(long = "type", value_parser = PossibleValuesParser::new(FamilyClass::KEYWORDS))]
    pub family_type: Option<String>,

    /// Output file extension (e.g. ttf, otf)
    #[arg(short = 'e', long = "extension", visible_alias = "ext")]
    pub extension: Option<String>,

    /// Convert all font names to lowercase
    #[arg(long)]
    pub lowercase: bool,

    /// Enable debug logging and stop at the first failing family
    #[arg(long)]
    pub debug: bool,

    /// Process only a specific font family
    #[arg(long)]
    pub family: Option<String>,

    /// Set designer URL (e.g. https://example.com)
    #[arg(long = "designerurl")]
    pub designer_url: Option<String>,

    /// Set license URL (e.g. https://example.com/license)
    #[arg(long = "licenseurl")]
    pub license_url: Option<String>,

    /// Set license/copyright text (e.g. "(c) Example 2025")
    #[arg(long)]
    pub license: Option<String>,
}

/// Rewrite the single-dash `-ext` spelling to `--ext`, which clap would
/// otherwise read as three short flags
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ext" {
                OsString::from("--ext")
            } else {
                arg
            }
        })
        .collect()
}

/// Parse the process arguments
pub fn parse_args() -> Args {
    Args::parse_from(normalize_legacy_flags(std::env::args_os()))
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            src_dir: args.src,
            output_dir: args.output,
            family: args.family,
            extension: args.extension,
            debug_mode: args.debug,
            options: PatchOptions {
                version: args.version,
                width: args.width,
                family_type: args.family_type,
                lowercase: args.lowercase,
                designer_url: args.designer_url,
                license_url: args.license_url,
                license: args.license,
            },
        }
    }
}
