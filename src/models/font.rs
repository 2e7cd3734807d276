use std::fmt;
use super::config::FamilyClass;

/// Weight vocabulary recognised in file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleToken {
    Thin,
    ExtraLight,
    UltraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    DemiBold,
    Bold,
    ExtraBold,
    UltraBold,
    Black,
    Heavy,
}

impl StyleToken {
    /// Lower-case keyword as it appears in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::Thin => "thin",
            StyleToken::ExtraLight => "extralight",
            StyleToken::UltraLight => "ultralight",
            StyleToken::Light => "light",
            StyleToken::Regular => "regular",
            StyleToken::Medium => "medium",
            StyleToken::SemiBold => "semibold",
            StyleToken::DemiBold => "demibold",
            StyleToken::Bold => "bold",
            StyleToken::ExtraBold => "extrabold",
            StyleToken::UltraBold => "ultrabold",
            StyleToken::Black => "black",
            StyleToken::Heavy => "heavy",
        }
    }

    /// OS/2 usWeightClass for this token
    pub fn weight_class(&self) -> u16 {
        match self {
            StyleToken::Thin => 100,
            StyleToken::ExtraLight | StyleToken::UltraLight => 200,
            StyleToken::Light => 300,
            StyleToken::Regular => 400,
            StyleToken::Medium => 500,
            StyleToken::SemiBold | StyleToken::DemiBold => 600,
            StyleToken::Bold => 700,
            StyleToken::ExtraBold | StyleToken::UltraBold => 800,
            StyleToken::Black | StyleToken::Heavy => 900,
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style attributes inferred for a single font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleInfo {
    /// Human-facing style, e.g. "Bold Italic" or a style folder's name
    pub display_style: String,
    /// Weight keyword found in the file name
    pub weight: StyleToken,
    /// Legacy bold style-map bit
    pub is_bold: bool,
    /// Whether the font is italic
    pub is_italic: bool,
}

/// Everything needed to patch one font, after options have been folded in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub family_name: String,
    pub style: StyleInfo,
    pub version: Option<String>,
    /// OS/2 usWidthClass, 1 to 9
    pub width_class: u16,
    pub pfm_class: Option<FamilyClass>,
    pub lowercase: bool,
    pub designer_url: Option<String>,
    pub license_url: Option<String>,
    pub license: Option<String>,
}

impl MetadataRecord {
    pub fn weight_class(&self) -> u16 {
        self.style.weight.weight_class()
    }

    /// OS/2 sFamilyClass: class in the high byte, subclass 0
    pub fn encoded_family_class(&self) -> Option<i16> {
        self.pfm_class.map(|class| class.encoded())
    }

    /// Style-map bits: 1 for italic, 32 for bold
    pub fn style_map_flags(&self) -> u16 {
        let mut flags = 0;
        if self.style.is_italic {
            flags |= 1;
        }
        if self.style.is_bold {
            flags |= 32;
        }
        flags
    }
}

/// Names derived from a family name and a resolved style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedNames {
    pub postscript_name: String,
    pub full_name: String,
    /// Same text as the PostScript name; written to the UniqueID record
    pub unique_id: String,
    pub output_file_base_name: String,
    /// Style string for the SubFamily and Preferred Styles records
    pub subfamily: String,
}
