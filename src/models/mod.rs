//! Data types shared across the patching pipeline

pub mod config;
pub mod font;

pub use config::{Config, FamilyClass, PatchOptions, Width};
pub use font::{MetadataRecord, StyleInfo, StyleToken, SynthesizedNames};
