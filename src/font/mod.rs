//! Style inference, metadata resolution and the font library boundary

pub mod engine;
pub mod metadata;
pub mod sfnt;
pub mod style;

pub use engine::{font_revision, EditableFont, FontLoader, GenerateFlag, Locale, NameKind, GENERATE_FLAGS};
pub use metadata::{apply_metadata, resolve};
pub use sfnt::{SfntFont, SfntLoader};
pub use style::{classify, determine_weight, is_bold_name, is_italic_font};
