//! JSON file-based dataset source.
//!
//! Reads the whole dataset from a JSON array on disk on every fetch, so a reload
//! picks up edits made to the file since the previous load.

use crate::domain::error::Result;
use crate::domain::BarberRecord;
use crate::source::backend::{parse_dataset, DatasetSource};
use std::path::{Path, PathBuf};

/// Dataset source backed by a JSON file.
///
/// # File Format
///
/// ```json
/// [
///   { "id": 1, "name": "Ana Cortes", "address": "Centro", "rating": 4.5,
///     "isOpen": true, "services": ["Barba"] }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `file_path`.
    ///
    /// The file is not touched until the first fetch.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use barber_finder::source::{DatasetSource, JsonFileSource};
    ///
    /// let source = JsonFileSource::new("/srv/directory/barbers.json");
    /// let records = source.fetch_all()?;
    /// # Ok::<(), barber_finder::DirectoryError>(())
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl DatasetSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Vec<BarberRecord>> {
        let _span = tracing::debug_span!("json_fetch_all", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let records = parse_dataset(&contents)?;

        tracing::debug!(count = records.len(), "loaded dataset file");
        Ok(records)
    }
}
