use std::path::Path;
use regex::Regex;
use lazy_static::lazy_static;
use crate::models::{StyleInfo, StyleToken};
use crate::utils::capitalize_words;

lazy_static! {
    static ref FOLDER_SEPARATORS: Regex = Regex::new(r"[_-]").unwrap();
}

/// Weight tokens in match priority. The first one contained in the name wins,
/// so this stays an ordered list rather than a map.
const WEIGHT_PRIORITY: [(StyleToken, &str); 12] = [
    (StyleToken::Thin, "thin"),
    (StyleToken::ExtraLight, "extralight"),
    (StyleToken::UltraLight, "ultralight"),
    (StyleToken::Light, "light"),
    (StyleToken::Medium, "medium"),
    (StyleToken::SemiBold, "semibold"),
    (StyleToken::DemiBold, "demibold"),
    (StyleToken::Bold, "bold"),
    (StyleToken::ExtraBold, "extrabold"),
    (StyleToken::UltraBold, "ultrabold"),
    (StyleToken::Black, "black"),
    (StyleToken::Heavy, "heavy"),
];

const BOLD_INDICATORS: [&str; 5] = ["bold", "black", "heavy", "extrabold", "ultrabold"];

/// Weights that contain "bold" without setting the bold style-map bit
const NON_BOLD_WEIGHTS: [&str; 2] = ["semibold", "demibold"];

const ITALIC_INDICATORS: [&str; 2] = ["italic", "oblique"];

/// Infer style attributes for a font file.
///
/// Weight, bold and italic always come from `file_name`. When `style_folder`
/// is given it only replaces the display style; a folder called "Bold"
/// holding `Foo-Light.ttf` still yields a light, non-bold font displayed as
/// "Bold".
pub fn classify(file_name: &str, style_folder: Option<&str>) -> StyleInfo {
    let name = strip_extension(file_name).to_lowercase();

    let weight = determine_weight(&name);
    let is_bold = is_bold_name(&name);
    let is_italic = is_italic_font(&name);

    let display_style = match style_folder {
        Some(folder) => folder_display_style(folder),
        None => synthesize_display_style(weight, is_italic),
    };

    StyleInfo {
        display_style,
        weight,
        is_bold,
        is_italic,
    }
}

/// Determine the weight token from a lower-cased name
pub fn determine_weight(name: &str) -> StyleToken {
    WEIGHT_PRIORITY
        .iter()
        .find(|(_, keyword)| name.contains(keyword))
        .map(|(token, _)| *token)
        .unwrap_or_default()
}

/// Check the legacy bold bit; semibold and demibold never set it
pub fn is_bold_name(name: &str) -> bool {
    let mut remainder = name.to_string();
    for weight in NON_BOLD_WEIGHTS {
        remainder = remainder.replace(weight, " ");
    }
    BOLD_INDICATORS
        .iter()
        .any(|indicator| remainder.contains(indicator))
}

/// Check if a lower-cased name marks an italic font
pub fn is_italic_font(name: &str) -> bool {
    ITALIC_INDICATORS
        .iter()
        .any(|indicator| name.contains(indicator))
}

fn synthesize_display_style(weight: StyleToken, is_italic: bool) -> String {
    let mut parts = Vec::new();
    if weight != StyleToken::Regular {
        parts.push(weight.as_str());
    }
    if is_italic {
        parts.push("italic");
    }
    if parts.is_empty() {
        return "Regular".to_string();
    }
    capitalize_words(&parts.join(" "))
}

fn folder_display_style(folder: &str) -> String {
    FOLDER_SEPARATORS.replace_all(folder, " ").into_owned()
}

fn strip_extension(file_name: &str) -> &str {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => &file_name[..file_name.len() - ext.len() - 1],
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Foo-Thin.ttf", StyleToken::Thin)]
    #[case("Foo-ExtraLight.ttf", StyleToken::ExtraLight)]
    #[case("Foo-UltraLight.otf", StyleToken::UltraLight)]
    #[case("Foo-Light.ttf", StyleToken::Light)]
    #[case("Foo-Medium.ttf", StyleToken::Medium)]
    #[case("Foo-SemiBold.ttf", StyleToken::SemiBold)]
    #[case("Foo-DemiBold.ttf", StyleToken::DemiBold)]
    #[case("Foo-Bold.ttf", StyleToken::Bold)]
    #[case("Foo-Black.ttf", StyleToken::Black)]
    #[case("Foo-Heavy.woff2", StyleToken::Heavy)]
    #[case("Foo.ttf", StyleToken::Regular)]
    #[case("Foo-Regular.ttf", StyleToken::Regular)]
    #[case("Foo-Italic.ttf", StyleToken::Regular)]
    fn single_weight_token_is_detected(#[case] file_name: &str, #[case] expected: StyleToken) {
        assert_eq!(classify(file_name, None).weight, expected);
    }

    #[test]
    fn priority_order_decides_between_overlapping_tokens() {
        // "bold" comes before "extrabold" in the priority list
        assert_eq!(classify("Foo-ExtraBold.ttf", None).weight, StyleToken::Bold);
        assert_eq!(classify("Foo-UltraBold.ttf", None).weight, StyleToken::Bold);
        assert_eq!(classify("Foo-ThinItalic.ttf", None).weight, StyleToken::Thin);
        assert_eq!(classify("Foo-LightBlack.ttf", None).weight, StyleToken::Light);
    }

    #[test]
    fn semibold_italic_is_not_bold() {
        let style = classify("Foo-SemiBoldItalic.ttf", None);
        assert_eq!(
            style,
            StyleInfo {
                display_style: "Semibold Italic".to_string(),
                weight: StyleToken::SemiBold,
                is_bold: false,
                is_italic: true,
            }
        );
    }

    #[test]
    fn bold_sets_the_bold_flag() {
        let style = classify("Foo-Bold.ttf", None);
        assert_eq!(
            style,
            StyleInfo {
                display_style: "Bold".to_string(),
                weight: StyleToken::Bold,
                is_bold: true,
                is_italic: false,
            }
        );
    }

    #[rstest]
    #[case("foo-black", true)]
    #[case("foo-heavy", true)]
    #[case("foo-extrabold", true)]
    #[case("foo-demibold", false)]
    #[case("foo-semibold", false)]
    #[case("foo-semibold-bold", true)]
    #[case("foo-medium", false)]
    fn bold_flag_is_independent_of_weight(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_bold_name(name), expected);
    }

    #[test]
    fn oblique_counts_as_italic() {
        let style = classify("Foo-LightOblique.otf", None);
        assert!(style.is_italic);
        assert_eq!(style.display_style, "Light Italic");
    }

    #[test]
    fn regular_is_the_default_display_style() {
        assert_eq!(classify("Foo.ttf", None).display_style, "Regular");
        assert_eq!(classify("Foo-Italic.ttf", None).display_style, "Italic");
    }

    #[test]
    fn style_folder_overrides_display_only() {
        let style = classify("Foo-Black.ttf", Some("Heavy"));
        assert_eq!(style.display_style, "Heavy");
        assert_eq!(style.weight, StyleToken::Black);
        assert!(style.is_bold);
        assert!(!style.is_italic);
    }

    #[test]
    fn style_folder_separators_become_spaces() {
        let style = classify("Foo-LightItalic.ttf", Some("Light_Italic-Text"));
        assert_eq!(style.display_style, "Light Italic Text");
        assert_eq!(style.weight, StyleToken::Light);
        assert!(style.is_italic);
    }

    #[test]
    fn extension_is_ignored_when_matching() {
        let style = classify("Foo.Thin.ttf", None);
        assert_eq!(style.weight, StyleToken::Thin);
        assert_eq!(strip_extension("Foo-Bold"), "Foo-Bold");
        assert_eq!(strip_extension("Foo-Bold.OTF"), "Foo-Bold");
    }
}
