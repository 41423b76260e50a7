//! Core engine modules
//!
//! Holds the unified configuration used by every other subsystem.

pub mod config;

pub use config::{GeneratorConfig, SceneConfig, StyleConfig, DatasetConfig};
