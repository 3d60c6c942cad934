//! Application layer: the search/filter state container and its event model.
//!
//! # Architecture
//!
//! ```text
//! UI interaction → Event → handle_event → DirectoryState mutators → derived view
//!                                  ↓                        ↓
//!                               Actions              observer callbacks
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filters`]: Search criteria and the filter pipeline
//! - [`handler`]: Event processing
//! - [`observer`]: Change notification and snapshots
//! - [`state`]: The state container

pub mod actions;
pub mod filters;
pub mod handler;
pub mod observer;
pub mod state;

pub use actions::Action;
pub use filters::{derive_view, ActiveFilters, SearchFilterState, SearchMode, AVAILABLE_SERVICES};
pub use handler::{handle_event, Event};
pub use observer::{DirectorySnapshot, ObserverRegistry, SubscriptionId};
pub use state::{DirectoryState, LOAD_ERROR_MESSAGE};
