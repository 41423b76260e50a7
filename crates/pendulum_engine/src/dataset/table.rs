//! Label table rows, writer and reader
//!
//! The table is standard CSV with a header record, then one record per
//! sample. Fields containing commas or quotes are quoted by the writer.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DatasetError;
use crate::scene::labels::{LabelVector, LABEL_COUNT};

/// Column names of the label table
pub const LABEL_HEADER: [&str; LABEL_COUNT + 1] =
    ["filename", "light_x", "pendulum_angle", "shadow_pos", "shadow_len"];

/// One row of the label table
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    /// Image filename, relative to the dataset directory
    pub filename: String,
    /// Labels of that image
    pub labels: LabelVector,
}

impl LabelRow {
    /// Create a row
    pub fn new(filename: impl Into<String>, labels: LabelVector) -> Self {
        Self { filename: filename.into(), labels }
    }
}

/// Flat on-disk record; field order matches `LABEL_HEADER`
#[derive(Debug, Serialize, Deserialize)]
struct LabelRecord {
    filename: String,
    light_x: f64,
    pendulum_angle: f64,
    shadow_pos: f64,
    shadow_len: f64,
}

impl From<&LabelRow> for LabelRecord {
    fn from(row: &LabelRow) -> Self {
        // adding +0.0 folds -0.0 into 0.0
        let labels = row.labels;
        Self {
            filename: row.filename.clone(),
            light_x: labels.light_x + 0.0,
            pendulum_angle: labels.pendulum_angle + 0.0,
            shadow_pos: labels.shadow_pos + 0.0,
            shadow_len: labels.shadow_len + 0.0,
        }
    }
}

impl From<LabelRecord> for LabelRow {
    fn from(record: LabelRecord) -> Self {
        Self::new(
            record.filename,
            LabelVector {
                light_x: record.light_x,
                pendulum_angle: record.pendulum_angle,
                shadow_pos: record.shadow_pos,
                shadow_len: record.shadow_len,
            },
        )
    }
}

/// Append-only writer for the label table
pub struct LabelTableWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl LabelTableWriter<File> {
    /// Create (or truncate) the label file and write the header
    pub fn create(path: &Path) -> Result<Self, DatasetError> {
        let file = File::create(path).map_err(|source| DatasetError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file)
    }
}

impl<W: Write> LabelTableWriter<W> {
    /// Wrap a writer and emit the header record
    pub fn new(inner: W) -> Result<Self, DatasetError> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(LABEL_HEADER)?;
        Ok(Self { writer })
    }

    /// Append one row; rows with NaN or infinite labels are refused
    pub fn append(&mut self, row: &LabelRow) -> Result<(), DatasetError> {
        if !row.labels.is_finite() {
            return Err(DatasetError::NonFiniteLabels(row.filename.clone()));
        }
        self.writer.serialize(LabelRecord::from(row))?;
        Ok(())
    }

    /// Flush buffered rows
    pub fn flush(&mut self) -> Result<(), DatasetError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read a label table, checking its header record
pub fn read_rows<R: Read>(source: R) -> Result<Vec<LabelRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader.headers()?;
    if headers.iter().ne(LABEL_HEADER) {
        return Err(DatasetError::Manifest(format!("unexpected header {headers:?}")));
    }

    reader
        .deserialize::<LabelRecord>()
        .map(|record| Ok(LabelRow::from(record?)))
        .collect()
}
