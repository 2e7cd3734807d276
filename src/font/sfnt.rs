//! Font accessor over OpenType/TrueType binaries, backed by write-fonts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use ttf_parser::Face;
use write_fonts::{
    from_obj::ToOwnedTable,
    read::{FontRef, TableProvider},
    tables::{
        head::Head,
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
    },
    types::{Fixed, NameId, Tag},
    FontBuilder,
};
use crate::error::{Error, Result};
use super::engine::{font_revision, EditableFont, FontLoader, GenerateFlag, Locale, NameKind};

const FFTM: Tag = Tag::new(b"FFTM");

const ITALIC_BIT: u16 = 1;
const BOLD_BIT: u16 = 1 << 5;
const REGULAR_BIT: u16 = 1 << 6;

/// Position of a naming record; the ordering matches the table's sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
}

impl NameKey {
    fn new(locale: Locale, name_id: u16) -> Self {
        let (platform_id, encoding_id, language_id) = locale.windows_ids();
        Self {
            platform_id,
            encoding_id,
            language_id,
            name_id,
        }
    }
}

/// Opens `.ttf`/`.otf` files as [`SfntFont`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct SfntLoader;

impl FontLoader for SfntLoader {
    type Font = SfntFont;

    fn open(&self, path: &Path) -> Result<SfntFont> {
        let data = fs::read(path)?;
        SfntFont::from_bytes(data, path)
    }
}

/// A font held in memory with its metadata edits staged until [`save`](EditableFont::save)
pub struct SfntFont {
    data: Vec<u8>,
    source: PathBuf,
    names: BTreeMap<NameKey, String>,
    /// Values for fontname/familyname/fullname/copyright, keyed by name ID
    fields: BTreeMap<u16, String>,
    version: Option<String>,
    weight: Option<u16>,
    width: Option<u16>,
    family_class: Option<i16>,
    stylemap: Option<u16>,
}

impl SfntFont {
    /// Parse font bytes, rejecting anything that isn't a plain SFNT
    pub fn from_bytes(data: Vec<u8>, source: &Path) -> Result<Self> {
        if data.starts_with(b"wOFF") || data.starts_with(b"wOF2") {
            return Err(Error::Font(format!(
                "WOFF containers are not supported: {}",
                source.display()
            )));
        }

        Face::parse(&data, 0).map_err(|e| {
            Error::Font(format!("Failed to load font {}: {}", source.display(), e))
        })?;

        let names = read_names(&data, source)?;

        Ok(Self {
            data,
            source: source.to_path_buf(),
            names,
            fields: BTreeMap::new(),
            version: None,
            weight: None,
            width: None,
            family_class: None,
            stylemap: None,
        })
    }

    fn build_name_table(&self) -> Name {
        let mut names = self.names.clone();
        for (name_id, value) in &self.fields {
            let has_record = names.keys().any(|key| key.name_id == *name_id);
            if !has_record {
                names.insert(NameKey::new(Locale::EnglishUs, *name_id), value.clone());
            }
        }

        let records: Vec<NameRecord> = names
            .into_iter()
            .map(|(key, value)| {
                NameRecord::new(
                    key.platform_id,
                    key.encoding_id,
                    key.language_id,
                    NameId::new(key.name_id),
                    value.into(),
                )
            })
            .collect();
        Name::new(records.into_iter().collect())
    }

    fn font_error(&self, context: &str, detail: impl std::fmt::Display) -> Error {
        Error::Font(format!("{} {}: {}", context, self.source.display(), detail))
    }
}

fn read_names(data: &[u8], source: &Path) -> Result<BTreeMap<NameKey, String>> {
    let font = FontRef::new(data)
        .map_err(|e| Error::Font(format!("Failed to read {}: {}", source.display(), e)))?;

    let mut names = BTreeMap::new();
    let Ok(name) = font.name() else {
        return Ok(names);
    };
    let strings = name.string_data();
    for record in name.name_record() {
        if let Ok(value) = record.string(strings) {
            let key = NameKey {
                platform_id: record.platform_id(),
                encoding_id: record.encoding_id(),
                language_id: record.language_id(),
                name_id: record.name_id().to_u16(),
            };
            names.insert(key, value.chars().collect());
        }
    }
    Ok(names)
}

impl EditableFont for SfntFont {
    fn set_font_name(&mut self, value: &str) {
        self.fields.insert(NameKind::PostScriptName.name_id(), value.to_string());
    }

    fn set_family_name(&mut self, value: &str) {
        self.fields.insert(NameKind::Family.name_id(), value.to_string());
    }

    fn set_full_name(&mut self, value: &str) {
        self.fields.insert(NameKind::Fullname.name_id(), value.to_string());
    }

    fn set_version(&mut self, value: &str) {
        self.version = Some(value.to_string());
    }

    fn version(&self) -> Option<String> {
        if let Some(version) = &self.version {
            return Some(version.clone());
        }
        let font = FontRef::new(&self.data).ok()?;
        let head = font.head().ok()?;
        Some(format!("{:.3}", head.font_revision().to_f64()))
    }

    fn set_os2_weight(&mut self, value: u16) {
        self.weight = Some(value);
    }

    fn set_os2_width(&mut self, value: u16) {
        self.width = Some(value);
    }

    fn set_os2_family_class(&mut self, value: i16) {
        self.family_class = Some(value);
    }

    fn set_os2_stylemap(&mut self, flags: u16) {
        self.stylemap = Some(flags);
    }

    fn set_copyright(&mut self, value: &str) {
        self.fields.insert(NameKind::Copyright.name_id(), value.to_string());
    }

    fn clear_names(&mut self) {
        self.names.clear();
    }

    fn append_name(&mut self, locale: Locale, kind: NameKind, value: &str) {
        self.names.insert(NameKey::new(locale, kind.name_id()), value.to_string());
    }

    /// Rebuild the font with the staged edits and write it as SFNT.
    ///
    /// Only [`GenerateFlag::NoFftmTable`] changes the output; the other flags
    /// describe what this writer always does. A staged version that isn't a
    /// number leaves `head.fontRevision` as it was.
    fn save(&mut self, path: &Path, flags: &[GenerateFlag]) -> Result<()> {
        let font = FontRef::new(&self.data).map_err(|e| self.font_error("Failed to read", e))?;
        let skip_fftm = flags.contains(&GenerateFlag::NoFftmTable);

        let mut builder = FontBuilder::new();
        for record in font.table_directory.table_records() {
            let tag = record.tag();
            if skip_fftm && tag == FFTM {
                continue;
            }
            if let Some(data) = font.table_data(tag) {
                builder.add_raw(tag, data.as_bytes());
            }
        }

        let mut head: Head = font
            .head()
            .map_err(|e| self.font_error("Missing head table in", e))?
            .to_owned_table();
        if let Some(revision) = self.version.as_deref().and_then(font_revision) {
            head.font_revision = Fixed::from_f64(revision);
        }
        builder
            .add_table(&head)
            .map_err(|e| self.font_error("Failed to write head table for", format!("{:?}", e)))?;

        if let Ok(os2) = font.os2() {
            let mut os2: Os2 = os2.to_owned_table();
            if let Some(weight) = self.weight {
                os2.us_weight_class = weight;
            }
            if let Some(width) = self.width {
                os2.us_width_class = width;
            }
            if let Some(class) = self.family_class {
                os2.s_family_class = class;
            }
            if let Some(stylemap) = self.stylemap {
                let kept = os2.fs_selection.bits() & !(ITALIC_BIT | BOLD_BIT | REGULAR_BIT);
                let mut style = stylemap & (ITALIC_BIT | BOLD_BIT);
                if style == 0 {
                    style = REGULAR_BIT;
                }
                os2.fs_selection = SelectionFlags::from_bits_truncate(kept | style);
            }
            builder
                .add_table(&os2)
                .map_err(|e| self.font_error("Failed to write OS/2 table for", format!("{:?}", e)))?;
        }

        builder
            .add_table(&self.build_name_table())
            .map_err(|e| self.font_error("Failed to write name table for", format!("{:?}", e)))?;

        let bytes = builder.build();
        fs::write(path, bytes)?;
        Ok(())
    }
}
