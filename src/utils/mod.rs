pub mod file;
pub mod naming;
pub mod logging;

pub use file::{
    dir_name, ensure_directory_exists, find_font_files, is_output_extension, list_subdirectories,
};
pub use naming::{capitalize_words, synthesize, output_file_name};
pub use logging::{init_logging, Logger, StandardLogger, MemoryLogger};
