//! Dataset generation
//!
//! The orchestration side of the crate: sampling scenes, writing images and
//! the label table, and checking a finished dataset directory.

pub mod generator;
pub mod manifest;
pub mod table;

pub use generator::{DatasetGenerator, DatasetSummary};
pub use manifest::{DatasetManifest, ManifestReport};
pub use table::{read_rows, LabelRow, LabelTableWriter, LABEL_HEADER};

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::render::RenderError;
use thiserror::Error;

/// Dataset errors
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Invalid generator configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Renderer construction or image output failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Output path could not be created or opened
    #[error("Cannot write to {}: {source}", .path.display())]
    Output {
        /// Offending path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Label table could not be written or parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A sample produced NaN or infinite labels
    #[error("Labels of {0} are not finite")]
    NonFiniteLabels(String),

    /// Label table and images disagree, or the table is malformed
    #[error("Manifest error: {0}")]
    Manifest(String),
}
