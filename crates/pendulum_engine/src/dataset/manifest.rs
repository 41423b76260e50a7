//! Dataset manifest checks
//!
//! Reads a finished dataset directory back and confirms that the label
//! table and the image files correspond one to one.

use std::collections::HashSet;
use std::fs::{self, File};
use std::path::PathBuf;

use super::table::{read_rows, LabelRow};
use super::DatasetError;
use crate::core::config::DatasetConfig;

/// Outcome of a successful verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestReport {
    /// Rows in the label table
    pub rows: usize,
    /// Sample images found in the directory
    pub images: usize,
}

/// Parsed label table of a dataset directory
#[derive(Debug, Clone)]
pub struct DatasetManifest {
    dir: PathBuf,
    rows: Vec<LabelRow>,
}

impl DatasetManifest {
    /// Load `label_file` from `dir`
    pub fn load(dir: impl Into<PathBuf>, label_file: &str) -> Result<Self, DatasetError> {
        let dir = dir.into();
        let rows = read_rows(File::open(dir.join(label_file))?)?;

        log::debug!("Loaded {} label rows from {}", rows.len(), dir.display());
        Ok(Self { dir, rows })
    }

    /// Load the manifest a dataset configuration would have produced
    pub fn load_for(config: &DatasetConfig) -> Result<Self, DatasetError> {
        Self::load(&config.output_dir, &config.label_file)
    }

    /// Parsed rows in file order
    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    /// Check that rows and `{prefix}_*.png` images correspond one to one
    pub fn verify(&self, prefix: &str) -> Result<ManifestReport, DatasetError> {
        let mut named = HashSet::with_capacity(self.rows.len());
        for row in &self.rows {
            if !named.insert(row.filename.as_str()) {
                return Err(DatasetError::Manifest(format!("{} appears in more than one row", row.filename)));
            }
            if !self.dir.join(&row.filename).is_file() {
                return Err(DatasetError::Manifest(format!("{} is listed but missing", row.filename)));
            }
        }

        let stem = format!("{prefix}_");
        let mut images = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !(name.starts_with(&stem) && name.ends_with(".png")) {
                continue;
            }
            if !named.contains(name) {
                return Err(DatasetError::Manifest(format!("{name} has no label row")));
            }
            images += 1;
        }

        Ok(ManifestReport { rows: self.rows.len(), images })
    }
}
