use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the fontpatch application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Font loading, editing or generation errors raised by the font library
    #[error("Font error: {0}")]
    Font(String),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// A family failed while the batch was running
    #[error("Batch processing error: {0}")]
    Batch(String),
}

/// Result type alias for fontpatch operations
pub type Result<T> = std::result::Result<T, Error>;
