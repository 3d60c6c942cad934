//! Dataset source abstraction.
//!
//! This module defines the [`DatasetSource`] trait that abstracts over where the
//! directory's records come from. The bundled static file, a file on disk and an
//! in-memory list all sit behind the same contract, so the state container never
//! changes when the source does.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::BarberRecord;
use std::collections::HashSet;

/// Supplier of the complete, ordered directory dataset.
///
/// The dataset is fetched as one unit: an implementation either returns every
/// record or fails. There is no partial or streamed result.
///
/// # Implementations
///
/// - [`BundledSource`](super::BundledSource): dataset compiled into the crate (default)
/// - [`JsonFileSource`](super::JsonFileSource): JSON array read from disk
/// - [`StaticSource`](super::StaticSource): records held in memory
///
/// # Examples
///
/// ```
/// use barber_finder::source::{DatasetSource, StaticSource};
/// use barber_finder::domain::BarberRecord;
///
/// let source = StaticSource::new(vec![BarberRecord::new(1, "Ana Cortes")]);
/// let records = source.fetch_all()?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), barber_finder::DirectoryError>(())
/// ```
pub trait DatasetSource {
    /// Fetches every record in dataset order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Load`] or [`DirectoryError::Io`] if the dataset
    /// cannot be read, parsed, or violates id uniqueness.
    fn fetch_all(&self) -> Result<Vec<BarberRecord>>;
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn fetch_all(&self) -> Result<Vec<BarberRecord>> {
        (**self).fetch_all()
    }
}

/// Rejects datasets in which two records share an id.
///
/// # Errors
///
/// Returns [`DirectoryError::Load`] naming the first repeated id.
pub fn ensure_unique_ids(records: &[BarberRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(DirectoryError::Load(format!("duplicate barber id: {}", record.id)));
        }
    }
    Ok(())
}

/// Parses a JSON array of records and validates it.
///
/// # Errors
///
/// Returns [`DirectoryError::Load`] on malformed JSON or duplicate ids.
pub fn parse_dataset(json: &str) -> Result<Vec<BarberRecord>> {
    let records: Vec<BarberRecord> = serde_json::from_str(json)
        .map_err(|e| DirectoryError::Load(format!("failed to parse JSON: {e}")))?;
    ensure_unique_ids(&records)?;
    Ok(records)
}
