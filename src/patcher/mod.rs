//! Directory walking and per-file patching

pub mod batch;
pub mod family;
pub mod processor;

pub use batch::{run_batch, BatchReport};
pub use family::process_family_directory;
pub use processor::{plan_font_file, process_font_file, FontJob};
