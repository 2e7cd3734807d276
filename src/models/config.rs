use std::fmt;
use std::path::PathBuf;
use clap::ValueEnum;

/// Configuration for a patching run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one folder per family
    pub src_dir: PathBuf,
    /// Directory the patched families are written to
    pub output_dir: PathBuf,
    /// Only process this family folder
    pub family: Option<String>,
    /// Output extension replacing the source file's one
    pub extension: Option<String>,
    /// Enable debug output and stop at the first failing family
    pub debug_mode: bool,
    /// Metadata applied to every font
    pub options: PatchOptions,
}

impl Config {
    /// Create a configuration with default settings
    pub fn new(src_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            output_dir: output_dir.into(),
            family: None,
            extension: None,
            debug_mode: false,
            options: PatchOptions::default(),
        }
    }
}

/// User supplied metadata overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Font version, e.g. "1.000"
    pub version: Option<String>,
    pub width: Width,
    /// PFM family keyword; unknown keywords are tolerated
    pub family_type: Option<String>,
    /// Fold every derived name to lower case
    pub lowercase: bool,
    pub designer_url: Option<String>,
    pub license_url: Option<String>,
    /// License or copyright notice
    pub license: Option<String>,
}

/// OS/2 width keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Width {
    #[value(name = "ultracondensed")]
    UltraCondensed,
    #[value(name = "extracondensed")]
    ExtraCondensed,
    #[value(name = "condensed")]
    Condensed,
    #[value(name = "semicondensed")]
    SemiCondensed,
    #[default]
    #[value(name = "normal")]
    Normal,
    #[value(name = "medium")]
    Medium,
    #[value(name = "semiexpanded")]
    SemiExpanded,
    #[value(name = "expanded")]
    Expanded,
    #[value(name = "extraexpanded")]
    ExtraExpanded,
    #[value(name = "ultraexpanded")]
    UltraExpanded,
}

impl Width {
    /// OS/2 usWidthClass
    pub fn class(&self) -> u16 {
        match self {
            Width::UltraCondensed => 1,
            Width::ExtraCondensed => 2,
            Width::Condensed => 3,
            Width::SemiCondensed => 4,
            Width::Normal | Width::Medium => 5,
            Width::SemiExpanded => 6,
            Width::Expanded => 7,
            Width::ExtraExpanded => 8,
            Width::UltraExpanded => 9,
        }
    }
}

/// PFM family types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyClass {
    Serif,
    Sans,
    Monospace,
    Script,
    Decorative,
}

impl FamilyClass {
    /// Keywords accepted on the command line
    pub const KEYWORDS: [&'static str; 5] = ["serif", "sans", "monospace", "script", "decorative"];

    /// Look up a keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "serif" => Some(FamilyClass::Serif),
            "sans" => Some(FamilyClass::Sans),
            "monospace" => Some(FamilyClass::Monospace),
            "script" => Some(FamilyClass::Script),
            "decorative" => Some(FamilyClass::Decorative),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            FamilyClass::Serif => 1,
            FamilyClass::Sans => 2,
            FamilyClass::Monospace => 3,
            FamilyClass::Script => 4,
            FamilyClass::Decorative => 5,
        }
    }

    /// (class << 8) + subclass, with subclass 0
    pub fn encoded(&self) -> i16 {
        ((self.value() as i16) << 8) + 0
    }
}

impl fmt::Display for FamilyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            FamilyClass::Serif => "serif",
            FamilyClass::Sans => "sans",
            FamilyClass::Monospace => "monospace",
            FamilyClass::Script => "script",
            FamilyClass::Decorative => "decorative",
        };
        f.write_str(keyword)
    }
}
