//! The capability surface the patcher needs from a font library.

use std::path::Path;
use crate::error::Result;

/// Locale a naming record is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    /// English (US)
    EnglishUs,
}

impl Locale {
    /// (platform, encoding, language) triple on the Windows platform
    pub fn windows_ids(&self) -> (u16, u16, u16) {
        match self {
            Locale::EnglishUs => (3, 1, 0x0409),
        }
    }
}

/// Naming table entries the patcher writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameKind {
    Copyright,
    Family,
    SubFamily,
    UniqueId,
    Fullname,
    Version,
    PostScriptName,
    DesignerUrl,
    LicenseUrl,
    PreferredFamily,
    PreferredStyles,
    CompatibleFull,
}

impl NameKind {
    /// SFNT name ID
    pub fn name_id(&self) -> u16 {
        match self {
            NameKind::Copyright => 0,
            NameKind::Family => 1,
            NameKind::SubFamily => 2,
            NameKind::UniqueId => 3,
            NameKind::Fullname => 4,
            NameKind::Version => 5,
            NameKind::PostScriptName => 6,
            NameKind::DesignerUrl => 12,
            NameKind::LicenseUrl => 14,
            NameKind::PreferredFamily => 16,
            NameKind::PreferredStyles => 17,
            NameKind::CompatibleFull => 18,
        }
    }

    /// Key used for this entry by font editors
    pub fn label(&self) -> &'static str {
        match self {
            NameKind::Copyright => "Copyright",
            NameKind::Family => "Family",
            NameKind::SubFamily => "SubFamily",
            NameKind::UniqueId => "UniqueID",
            NameKind::Fullname => "Fullname",
            NameKind::Version => "Version",
            NameKind::PostScriptName => "PostScriptName",
            NameKind::DesignerUrl => "Designer URL",
            NameKind::LicenseUrl => "License URL",
            NameKind::PreferredFamily => "Preferred Family",
            NameKind::PreferredStyles => "Preferred Styles",
            NameKind::CompatibleFull => "Compatible Full",
        }
    }
}

/// Options controlling how a font is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateFlag {
    OpenType,
    PfEdComments,
    NoFftmTable,
}

/// Flags every patched font is generated with
pub const GENERATE_FLAGS: [GenerateFlag; 3] = [
    GenerateFlag::OpenType,
    GenerateFlag::PfEdComments,
    GenerateFlag::NoFftmTable,
];

/// Numeric font revision for a version string, if it is one
pub fn font_revision(version: &str) -> Option<f64> {
    version.trim().parse::<f64>().ok().filter(|revision| revision.is_finite())
}

/// A loaded font whose metadata can be edited and saved
pub trait EditableFont {
    fn set_font_name(&mut self, value: &str);
    fn set_family_name(&mut self, value: &str);
    fn set_full_name(&mut self, value: &str);
    fn set_version(&mut self, value: &str);
    /// Current version, either set earlier or read from the font
    fn version(&self) -> Option<String>;
    fn set_os2_weight(&mut self, value: u16);
    fn set_os2_width(&mut self, value: u16);
    fn set_os2_family_class(&mut self, value: i16);
    /// Style-map bits: 1 italic, 32 bold
    fn set_os2_stylemap(&mut self, flags: u16);
    fn set_copyright(&mut self, value: &str);
    /// Drop every naming record the font carries
    fn clear_names(&mut self);
    /// Add a naming record, replacing one with the same locale and kind
    fn append_name(&mut self, locale: Locale, kind: NameKind, value: &str);
    fn save(&mut self, path: &Path, flags: &[GenerateFlag]) -> Result<()>;
}

/// Opens fonts from disk. Shared across worker threads.
pub trait FontLoader: Sync {
    type Font: EditableFont;

    fn open(&self, path: &Path) -> Result<Self::Font>;
}
