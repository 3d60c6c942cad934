//! In-memory and compiled-in dataset sources.

use crate::domain::error::Result;
use crate::domain::BarberRecord;
use crate::source::backend::{ensure_unique_ids, parse_dataset, DatasetSource};

/// Dataset shipped inside the crate.
const BUNDLED_DATASET: &str = include_str!("../../data/barbers.json");

/// Source serving the dataset bundled with the crate.
///
/// This is the default source: the directory works without any external file.
///
/// # Examples
///
/// ```
/// use barber_finder::source::{BundledSource, DatasetSource};
///
/// let records = BundledSource.fetch_all()?;
/// assert!(!records.is_empty());
/// # Ok::<(), barber_finder::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl DatasetSource for BundledSource {
    fn fetch_all(&self) -> Result<Vec<BarberRecord>> {
        let _span = tracing::debug_span!("bundled_fetch_all").entered();

        let records = parse_dataset(BUNDLED_DATASET)?;

        tracing::debug!(count = records.len(), "parsed bundled dataset");
        Ok(records)
    }
}

/// Source handing out a fixed list of records.
///
/// Used by hosts that already hold the data and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<BarberRecord>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(records: Vec<BarberRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for StaticSource {
    fn fetch_all(&self) -> Result<Vec<BarberRecord>> {
        ensure_unique_ids(&self.records)?;
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_dataset_is_valid() {
        let records = BundledSource.fetch_all().unwrap();
        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();

        assert_eq!(records.len(), 8);
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn static_source_validates_ids() {
        let source = StaticSource::new(vec![BarberRecord::new(1, "A"), BarberRecord::new(1, "B")]);
        assert!(source.fetch_all().is_err());
    }
}
