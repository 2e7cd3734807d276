//! Batch patching of font naming and style metadata.
//!
//! Fonts are laid out as `<src>/<Family>/[<Style>/]<files>`. Each file's
//! weight, bold and italic attributes are read off its name, folded together
//! with user options, and written back through a [`font::FontLoader`].

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod patcher;
pub mod utils;

pub use error::{Error, Result};
