//! Command-line interface handling

mod args;

pub use args::{normalize_legacy_flags, parse_args, Args};
