//! The search/filter state container.
//!
//! This module defines [`DirectoryState`], the single owner of the dataset snapshot,
//! the current search criteria and the derived view shown to the user. It is the
//! single source of truth for the presentation layer, which reads it through
//! accessors or [`DirectorySnapshot`]s and changes it only through its mutators.
//!
//! # State Components
//!
//! - **Dataset**: Full record list from the last successful load
//! - **Criteria**: Search terms and filter selection ([`SearchFilterState`])
//! - **Derived view**: Dataset filtered by the criteria, recomputed eagerly
//! - **Load status**: Loading flag, user-facing error, last load time
//! - **Observers**: Callbacks notified after every mutation
//!
//! # Example
//!
//! ```rust
//! use barber_finder::app::{ActiveFilters, DirectoryState};
//! use barber_finder::source::StaticSource;
//! use barber_finder::domain::BarberRecord;
//!
//! let mut ana = BarberRecord::new(1, "Ana Cortes");
//! ana.is_open = true;
//! let source = StaticSource::new(vec![ana, BarberRecord::new(2, "Bela Hair")]);
//!
//! let mut state = DirectoryState::new(Box::new(source));
//! state.load();
//! state.set_search_terms("a", "");
//! assert_eq!(state.derived_view().len(), 2);
//!
//! state.apply_filters(ActiveFilters::open_only());
//! assert_eq!(state.derived_view().len(), 1);
//! ```

use crate::app::filters::{derive_view, ActiveFilters, SearchFilterState, SearchMode};
use crate::app::observer::{DirectorySnapshot, ObserverRegistry, SubscriptionId};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{BarberId, BarberRecord};
use crate::source::DatasetSource;

/// Message shown to users when the dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load barber data.";

/// Central directory state container.
///
/// Mutators never fail: load failures become the [`error`](Self::error) flag and an
/// empty view, and nonsensical criteria simply match nothing.
pub struct DirectoryState {
    source: Box<dyn DatasetSource>,

    /// Records from the last successful load, in source order.
    dataset: Vec<BarberRecord>,

    criteria: SearchFilterState,

    /// `dataset` filtered by `criteria`. Recomputed after every mutation.
    derived: Vec<BarberRecord>,

    search_mode: SearchMode,

    loading: bool,

    error: Option<String>,

    /// Unix timestamp of the last successful load.
    loaded_at: Option<i64>,

    observers: ObserverRegistry,
}

impl DirectoryState {
    /// Creates an empty container over `source` with default criteria.
    ///
    /// Nothing is fetched until [`load`](Self::load) is called.
    #[must_use]
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self {
            source,
            dataset: vec![],
            criteria: SearchFilterState::default(),
            derived: vec![],
            search_mode: SearchMode::default(),
            loading: false,
            error: None,
            loaded_at: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Sets how name and region terms are matched.
    #[must_use]
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self.recompute();
        self
    }

    /// Fetches the dataset from the source, replacing the current snapshot.
    ///
    /// Observers are notified once when loading starts and once when it ends. On
    /// failure the detailed cause is logged, the dataset is emptied and
    /// [`error`](Self::error) holds [`LOAD_ERROR_MESSAGE`]. Nothing is retried; call
    /// again to retry. A later call overwrites the outcome of an earlier one.
    pub fn load(&mut self) {
        let _span = tracing::debug_span!("load_dataset").entered();

        self.loading = true;
        self.notify();

        match self.source.fetch_all() {
            Ok(records) => {
                tracing::debug!(count = records.len(), "dataset loaded");
                self.dataset = records;
                self.error = None;
                self.loaded_at = Some(chrono::Utc::now().timestamp());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load barber data");
                self.dataset.clear();
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }

        self.loading = false;
        self.refresh();
    }

    /// Reloads the dataset. Same as [`load`](Self::load).
    pub fn reload(&mut self) {
        self.load();
    }

    /// Replaces both search terms. Empty terms mean no constraint.
    pub fn set_search_terms(&mut self, name: impl Into<String>, region: impl Into<String>) {
        self.criteria.search_name = name.into();
        self.criteria.search_region = region.into();

        tracing::debug!(
            name = %self.criteria.search_name,
            region = %self.criteria.search_region,
            "search terms updated"
        );
        self.refresh();
    }

    /// Replaces the active filters wholesale.
    pub fn apply_filters(&mut self, filters: ActiveFilters) {
        tracing::debug!(filters = ?filters, "filters applied");
        self.criteria.active_filters = filters;
        self.refresh();
    }

    /// Clears both search terms and restores the default filters.
    pub fn reset_all(&mut self) {
        tracing::debug!("search and filters reset");
        self.criteria = SearchFilterState::default();
        self.refresh();
    }

    /// Finds a record among the currently derived view.
    ///
    /// A record hidden by the current criteria is not found even though it is in
    /// the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no visible record has `id`.
    pub fn lookup_detail(&self, id: &BarberId) -> Result<&BarberRecord> {
        let found = self.derived.iter().find(|record| &record.id == id);
        tracing::debug!(id = %id, found = found.is_some(), "detail lookup");
        found.ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }

    /// Finds a record in the full dataset regardless of the current criteria.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if the dataset has no record with `id`.
    pub fn lookup_in_dataset(&self, id: &BarberId) -> Result<&BarberRecord> {
        self.dataset
            .iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }

    /// Registers an observer called after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&DirectorySnapshot) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn derived_view(&self) -> &[BarberRecord] {
        &self.derived
    }

    #[must_use]
    pub fn dataset(&self) -> &[BarberRecord] {
        &self.dataset
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn loaded_at(&self) -> Option<i64> {
        self.loaded_at
    }

    #[must_use]
    pub fn search_name(&self) -> &str {
        &self.criteria.search_name
    }

    #[must_use]
    pub fn search_region(&self) -> &str {
        &self.criteria.search_region
    }

    #[must_use]
    pub const fn active_filters(&self) -> &ActiveFilters {
        &self.criteria.active_filters
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchFilterState {
        &self.criteria
    }

    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Returns an owned copy of the presentation-facing state.
    #[must_use]
    pub fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot {
            derived_view: self.derived.clone(),
            loading: self.loading,
            error: self.error.clone(),
            search_name: self.criteria.search_name.clone(),
            search_region: self.criteria.search_region.clone(),
            active_filters: self.criteria.active_filters.clone(),
        }
    }

    fn recompute(&mut self) {
        self.derived = derive_view(&self.dataset, &self.criteria, self.search_mode);
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }

    fn refresh(&mut self) {
        self.recompute();
        self.notify();
    }
}

impl std::fmt::Debug for DirectoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryState")
            .field("dataset", &self.dataset.len())
            .field("derived", &self.derived.len())
            .field("criteria", &self.criteria)
            .field("search_mode", &self.search_mode)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
