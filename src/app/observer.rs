//! Change notification for presentation callers.
//!
//! Presentation components register an observer with the state container and are
//! called back synchronously, in registration order, after every mutator finishes.
//! Each callback receives an owned [`DirectorySnapshot`] of the presentation-facing
//! state.

use crate::app::filters::ActiveFilters;
use crate::domain::BarberRecord;

/// Presentation-facing copy of the container's state.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySnapshot {
    /// Records passing the current criteria, in dataset order.
    pub derived_view: Vec<BarberRecord>,

    /// `true` while a dataset load is in progress.
    pub loading: bool,

    /// User-facing error message from the last load, if it failed.
    pub error: Option<String>,

    pub search_name: String,
    pub search_region: String,
    pub active_filters: ActiveFilters,
}

/// Handle returned by [`ObserverRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&DirectorySnapshot)>;

/// Ordered list of registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl ObserverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&DirectorySnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));

        tracing::debug!(subscription = id.0, total = self.observers.len(), "observer subscribed");
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = self.observers.len() != before;

        tracing::debug!(subscription = id.0, removed, "observer unsubscribed");
        removed
    }

    pub fn notify(&mut self, snapshot: &DirectorySnapshot) {
        tracing::trace!(observers = self.observers.len(), "notifying observers");
        for (_, observer) in &mut self.observers {
            observer(snapshot);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
