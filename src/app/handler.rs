//! Event handling and state transition logic.
//!
//! This module translates user interactions from the presentation layer into
//! [`DirectoryState`] mutations and the side effects the host must perform.
//!
//! # Architecture
//!
//! 1. The host maps a UI interaction to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `DirectoryState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use barber_finder::app::{handle_event, DirectoryState, Event};
//! use barber_finder::source::BundledSource;
//!
//! let mut state = DirectoryState::new(Box::new(BundledSource));
//! let (changed, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(changed);
//! assert!(actions.is_empty());
//! # Ok::<(), barber_finder::DirectoryError>(())
//! ```

use crate::app::filters::ActiveFilters;
use crate::app::{Action, DirectoryState};
use crate::domain::error::Result;
use crate::domain::{BarberId, BarberRecord};
use crate::ui::links::{dial_url, record_maps_url, Platform};

/// User interactions forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Search bar submitted with both terms.
    SearchSubmitted {
        name: String,
        region: String,
    },

    /// Filter selector applied a complete selection.
    FiltersApplied(ActiveFilters),

    /// Flips one service tag on top of the current filters.
    ToggleService(String),

    /// Sets or clears the open-status filter on top of the current filters.
    SetOpenStatus(Option<bool>),

    /// Clears search terms and filters.
    ClearAll,

    /// Reloads the dataset.
    Reload,

    /// A list card or map callout was tapped.
    SelectRecord(BarberId),

    /// "Open in maps" on a record.
    OpenInMaps {
        id: BarberId,
        platform: Platform,
    },

    /// "Call" on a record.
    CallRecord(BarberId),
}

/// Processes an event, mutates directory state, and returns actions to execute.
///
/// The boolean is `true` when the presentation should re-render: the search terms,
/// the filters or the derived view changed, or a reload ran. Resubmitting the
/// current criteria reports `false`.
///
/// # Errors
///
/// Currently infallible; all failures become state flags or
/// [`Action::ShowNotFound`].
pub fn handle_event(state: &mut DirectoryState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchSubmitted { name, region } => {
            Ok((mutate(state, |s| s.set_search_terms(name.as_str(), region.as_str())), vec![]))
        }
        Event::FiltersApplied(filters) => {
            Ok((mutate(state, |s| s.apply_filters(filters.clone())), vec![]))
        }
        Event::ToggleService(service) => {
            let mut filters = state.active_filters().clone();
            filters.toggle_service(service);
            Ok((mutate(state, |s| s.apply_filters(filters)), vec![]))
        }
        Event::SetOpenStatus(is_open) => {
            let filters = ActiveFilters {
                is_open: *is_open,
                ..state.active_filters().clone()
            };
            Ok((mutate(state, |s| s.apply_filters(filters)), vec![]))
        }
        Event::ClearAll => Ok((mutate(state, DirectoryState::reset_all), vec![])),
        Event::Reload => {
            state.reload();
            Ok((true, vec![]))
        }
        Event::SelectRecord(id) => {
            let action = with_visible(state, id, |_| Some(Action::ShowDetail(id.clone())));
            Ok((false, action.into_iter().collect()))
        }
        Event::OpenInMaps { id, platform } => {
            let action = with_visible(state, id, |record| {
                record_maps_url(record, *platform).map(Action::OpenUrl)
            });
            Ok((false, action.into_iter().collect()))
        }
        Event::CallRecord(id) => {
            let action = with_visible(state, id, |record| {
                record.contact_phone().map(|phone| Action::OpenUrl(dial_url(phone)))
            });
            Ok((false, action.into_iter().collect()))
        }
    }
}

/// Runs `f` and reports whether the criteria or the derived view changed.
fn mutate<F>(state: &mut DirectoryState, f: F) -> bool
where
    F: FnOnce(&mut DirectoryState),
{
    let criteria = state.criteria().clone();
    let view = state.derived_view().to_vec();
    f(state);
    let changed = state.criteria() != &criteria || state.derived_view() != view.as_slice();

    tracing::debug!(changed, derived_count = state.derived_view().len(), "state mutated");
    changed
}

/// Resolves `id` against the derived view and maps it to an action.
///
/// Ids that are not visible yield [`Action::ShowNotFound`].
fn with_visible<F>(state: &DirectoryState, id: &BarberId, f: F) -> Option<Action>
where
    F: FnOnce(&BarberRecord) -> Option<Action>,
{
    match state.lookup_detail(id) {
        Ok(record) => {
            let action = f(record);
            if action.is_none() {
                tracing::debug!(id = %id, "record lacks data for action");
            }
            action
        }
        Err(e) => {
            tracing::debug!(error = %e, "record not visible");
            Some(Action::ShowNotFound(id.clone()))
        }
    }
}
