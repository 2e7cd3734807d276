use crate::models::{FamilyClass, MetadataRecord, PatchOptions, StyleInfo, SynthesizedNames};
use crate::utils::Logger;
use super::engine::{font_revision, EditableFont, Locale, NameKind};

/// Fold the user's options into a style, producing the record to patch with.
///
/// Never fails: an unknown family type only logs a warning and leaves the
/// PFM class out.
pub fn resolve(
    family_name: &str,
    style: &StyleInfo,
    options: &PatchOptions,
    logger: &dyn Logger,
) -> MetadataRecord {
    let mut family_name = family_name.to_string();
    let mut style = style.clone();

    if options.lowercase {
        family_name = family_name.to_lowercase();
        style.display_style = style.display_style.to_lowercase();
    }

    let pfm_class = options.family_type.as_deref().and_then(|keyword| {
        match FamilyClass::from_keyword(keyword) {
            Some(class) => {
                logger.debug(&format!(
                    "PFM family type: {} -> class {} -> encoded: {}",
                    keyword,
                    class.value(),
                    class.encoded()
                ));
                Some(class)
            }
            None => {
                logger.warn(&format!("Unknown font type: {}", keyword));
                None
            }
        }
    });

    MetadataRecord {
        family_name,
        style,
        version: options.version.clone(),
        width_class: options.width.class(),
        pfm_class,
        lowercase: options.lowercase,
        designer_url: options.designer_url.clone(),
        license_url: options.license_url.clone(),
        license: options.license.clone(),
    }
}

/// Push a resolved record and its derived names into a font
pub fn apply_metadata<F: EditableFont + ?Sized>(
    font: &mut F,
    record: &MetadataRecord,
    names: &SynthesizedNames,
    logger: &dyn Logger,
) {
    logger.info(&format!("Setting metadata for {}", names.postscript_name));

    font.set_font_name(&names.postscript_name);
    font.set_family_name(&record.family_name);
    font.set_full_name(&names.full_name);

    if let Some(version) = &record.version {
        if font_revision(version).is_none() {
            logger.warn(&format!(
                "Version {} is not numeric, font revision left unchanged",
                version
            ));
        }
        font.set_version(version);
    }

    font.set_os2_weight(record.weight_class());
    font.set_os2_width(record.width_class);
    if let Some(class) = record.encoded_family_class() {
        font.set_os2_family_class(class);
    }
    font.set_os2_stylemap(record.style_map_flags());

    font.clear_names();

    let locale = Locale::EnglishUs;
    font.append_name(locale, NameKind::Family, &record.family_name);
    font.append_name(locale, NameKind::SubFamily, &names.subfamily);
    font.append_name(locale, NameKind::Fullname, &names.full_name);
    font.append_name(locale, NameKind::PostScriptName, &names.postscript_name);
    font.append_name(locale, NameKind::PreferredFamily, &record.family_name);
    font.append_name(locale, NameKind::PreferredStyles, &names.subfamily);
    font.append_name(locale, NameKind::UniqueId, &names.unique_id);

    let version_string = match font.version() {
        Some(version) => format!("Version {}", version),
        None => "Version 1.000".to_string(),
    };
    font.append_name(locale, NameKind::Version, &version_string);

    font.append_name(locale, NameKind::CompatibleFull, &names.full_name);

    let optional = [
        (NameKind::DesignerUrl, &record.designer_url),
        (NameKind::LicenseUrl, &record.license_url),
        (NameKind::Copyright, &record.license),
    ];
    for (kind, value) in optional {
        let Some(value) = value else { continue };
        font.append_name(locale, kind, value);
        if kind == NameKind::Copyright {
            font.set_copyright(value);
        }
        logger.debug(&format!("{} set: {}", kind.label(), value));
    }

    logger.debug(&format!(
        "Font metadata set: {} ({})",
        names.postscript_name, names.full_name
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::error::Result;
    use crate::font::engine::GenerateFlag;
    use crate::font::style::classify;
    use crate::models::{StyleToken, Width};
    use crate::utils::logging::{Level, MemoryLogger};
    use crate::utils::synthesize;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingFont {
        font_name: Option<String>,
        family_name: Option<String>,
        full_name: Option<String>,
        version: Option<String>,
        weight: Option<u16>,
        width: Option<u16>,
        family_class: Option<i16>,
        stylemap: Option<u16>,
        copyright: Option<String>,
        names: Vec<(NameKind, String)>,
        cleared: bool,
    }

    impl EditableFont for RecordingFont {
        fn set_font_name(&mut self, value: &str) {
            self.font_name = Some(value.to_string());
        }
        fn set_family_name(&mut self, value: &str) {
            self.family_name = Some(value.to_string());
        }
        fn set_full_name(&mut self, value: &str) {
            self.full_name = Some(value.to_string());
        }
        fn set_version(&mut self, value: &str) {
            self.version = Some(value.to_string());
        }
        fn version(&self) -> Option<String> {
            self.version.clone()
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
            self.copyright = Some(value.to_string());
        }
        fn clear_names(&mut self) {
            self.names.clear();
            self.cleared = true;
        }
        fn append_name(&mut self, _locale: Locale, kind: NameKind, value: &str) {
            self.names.push((kind, value.to_string()));
        }
        fn save(&mut self, _path: &Path, _flags: &[GenerateFlag]) -> Result<()> {
            Ok(())
        }
    }

    fn options() -> PatchOptions {
        PatchOptions {
            width: Width::Condensed,
            family_type: Some("sans".to_string()),
            ..PatchOptions::default()
        }
    }

    #[test]
    fn resolves_the_acme_bold_italic_scenario() {
        let logger = MemoryLogger::new();
        let style = classify("acme-bolditalic.otf", None);
        let record = resolve("Acme", &style, &options(), &logger);
        let names = synthesize(&record.family_name, &record.style, record.lowercase);

        assert_eq!(record.style.weight, StyleToken::Bold);
        assert!(record.style.is_bold);
        assert!(record.style.is_italic);
        assert_eq!(record.style.display_style, "Bold Italic");
        assert_eq!(record.width_class, 3);
        assert_eq!(record.encoded_family_class(), Some(512));
        assert_eq!(names.postscript_name, "Acme-BoldItalic");
        assert_eq!(names.full_name, "Acme Bold Italic");
    }

    #[test]
    fn serif_and_monospace_encode_bit_exact() {
        let logger = MemoryLogger::new();
        let style = classify("Foo-Regular.ttf", None);

        let mut opts = PatchOptions::default();
        opts.family_type = Some("serif".to_string());
        assert_eq!(resolve("Foo", &style, &opts, &logger).encoded_family_class(), Some(256));

        opts.family_type = Some("monospace".to_string());
        assert_eq!(resolve("Foo", &style, &opts, &logger).encoded_family_class(), Some(768));
    }

    #[test]
    fn unknown_type_warns_and_omits_class() {
        let logger = MemoryLogger::new();
        let style = classify("Foo-Regular.ttf", None);
        let opts = PatchOptions {
            family_type: Some("blackletter".to_string()),
            ..PatchOptions::default()
        };

        let record = resolve("Foo", &style, &opts, &logger);
        assert_eq!(record.pfm_class, None);
        assert_eq!(record.encoded_family_class(), None);
        assert_eq!(logger.messages(Level::Warn), vec!["Unknown font type: blackletter".to_string()]);
    }

    #[test]
    fn lowercase_folds_family_and_style_once() {
        let logger = MemoryLogger::new();
        let style = classify("Acme-SemiBoldItalic.ttf", Some("Semi_Bold-Italic"));
        let opts = PatchOptions {
            lowercase: true,
            ..PatchOptions::default()
        };

        let record = resolve("Acme Sans", &style, &opts, &logger);
        assert_eq!(record.family_name, "acme sans");
        assert_eq!(record.style.display_style, "semi bold italic");

        let names = synthesize(&record.family_name, &record.style, record.lowercase);
        assert_eq!(names.postscript_name, "acme sans-semibolditalic");
        assert_eq!(names.full_name, "acme sans semi bold italic");
        assert_eq!(names.subfamily, "semi bold italic");
    }

    #[test]
    fn width_defaults_to_normal() {
        let logger = MemoryLogger::new();
        let record = resolve("Foo", &classify("Foo.ttf", None), &PatchOptions::default(), &logger);
        assert_eq!(record.width_class, 5);
        assert_eq!(record.weight_class(), 400);
        assert_eq!(record.style_map_flags(), 0);
    }

    #[test]
    fn apply_writes_fields_and_naming_records_in_order() {
        let logger = MemoryLogger::new();
        let style = classify("acme-bolditalic.otf", None);
        let opts = PatchOptions {
            version: Some("2.100".to_string()),
            designer_url: Some("https://acme.example".to_string()),
            license_url: Some("https://acme.example/license".to_string()),
            license: Some("(c) Acme 2025".to_string()),
            ..options()
        };
        let record = resolve("Acme", &style, &opts, &logger);
        let names = synthesize(&record.family_name, &record.style, record.lowercase);

        let mut font = RecordingFont::default();
        font.names.push((NameKind::Family, "stale".to_string()));
        apply_metadata(&mut font, &record, &names, &logger);

        assert!(font.cleared);
        assert_eq!(font.font_name.as_deref(), Some("Acme-BoldItalic"));
        assert_eq!(font.family_name.as_deref(), Some("Acme"));
        assert_eq!(font.full_name.as_deref(), Some("Acme Bold Italic"));
        assert_eq!(font.version.as_deref(), Some("2.100"));
        assert_eq!(font.weight, Some(700));
        assert_eq!(font.width, Some(3));
        assert_eq!(font.family_class, Some(512));
        assert_eq!(font.stylemap, Some(33));
        assert_eq!(font.copyright.as_deref(), Some("(c) Acme 2025"));

        let expected: Vec<(NameKind, String)> = vec![
            (NameKind::Family, "Acme"),
            (NameKind::SubFamily, "Bold Italic"),
            (NameKind::Fullname, "Acme Bold Italic"),
            (NameKind::PostScriptName, "Acme-BoldItalic"),
            (NameKind::PreferredFamily, "Acme"),
            (NameKind::PreferredStyles, "Bold Italic"),
            (NameKind::UniqueId, "Acme-BoldItalic"),
            (NameKind::Version, "Version 2.100"),
            (NameKind::CompatibleFull, "Acme Bold Italic"),
            (NameKind::DesignerUrl, "https://acme.example"),
            (NameKind::LicenseUrl, "https://acme.example/license"),
            (NameKind::Copyright, "(c) Acme 2025"),
        ]
        .into_iter()
        .map(|(kind, value)| (kind, value.to_string()))
        .collect();
        assert_eq!(font.names, expected);

        let debug = logger.messages(Level::Debug);
        assert!(debug.contains(&"Designer URL set: https://acme.example".to_string()));
        assert!(debug.contains(&"License URL set: https://acme.example/license".to_string()));
        assert!(debug.contains(&"Copyright set: (c) Acme 2025".to_string()));
    }

    #[test]
    fn non_numeric_version_is_written_verbatim_with_a_warning() {
        let logger = MemoryLogger::new();
        let opts = PatchOptions {
            version: Some("1.0-beta".to_string()),
            ..options()
        };
        let record = resolve("Acme", &classify("Acme-Bold.ttf", None), &opts, &logger);
        let names = synthesize(&record.family_name, &record.style, record.lowercase);

        let mut font = RecordingFont::default();
        apply_metadata(&mut font, &record, &names, &logger);

        assert_eq!(font.version.as_deref(), Some("1.0-beta"));
        assert!(font
            .names
            .contains(&(NameKind::Version, "Version 1.0-beta".to_string())));
        assert_eq!(
            logger.messages(Level::Warn),
            vec!["Version 1.0-beta is not numeric, font revision left unchanged".to_string()]
        );
    }

    #[test]
    fn apply_defaults_version_and_skips_optional_records() {
        let logger = MemoryLogger::new();
        let record = resolve("Foo", &classify("Foo-Light.ttf", None), &PatchOptions::default(), &logger);
        let names = synthesize(&record.family_name, &record.style, record.lowercase);

        let mut font = RecordingFont::default();
        apply_metadata(&mut font, &record, &names, &logger);

        assert_eq!(font.family_class, None);
        assert_eq!(font.copyright, None);
        assert_eq!(font.weight, Some(300));
        let kinds: Vec<NameKind> = font.names.iter().map(|(kind, _)| *kind).collect();
        assert!(!kinds.contains(&NameKind::DesignerUrl));
        assert!(!kinds.contains(&NameKind::Copyright));
        assert!(font
            .names
            .contains(&(NameKind::Version, "Version 1.000".to_string())));
    }
}
