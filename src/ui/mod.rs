//! Presentation-facing layer.
//!
//! This module turns directory state into display-ready view models for the host's
//! list, detail and map screens. It draws nothing itself.
//!
//! # Architecture
//!
//! ```text
//! DirectoryState → ListViewModel / DetailScreen / MapMarker → host rendering
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: List cards, detail view, fallback text
//! - [`map`]: Map regions and markers
//! - [`links`]: `tel:` and maps deep links
//!
//! # Example
//!
//! ```rust
//! use barber_finder::app::DirectoryState;
//! use barber_finder::source::BundledSource;
//! use barber_finder::ui::{markers, ListViewModel};
//!
//! let mut state = DirectoryState::new(Box::new(BundledSource));
//! state.load();
//!
//! assert!(matches!(ListViewModel::from_state(&state), ListViewModel::Items(_)));
//! assert!(!markers(state.derived_view()).is_empty());
//! ```

pub mod links;
pub mod map;
pub mod viewmodel;

pub use links::{dial_url, maps_url, record_maps_url, Platform};
pub use map::{map_label, markers, MapMarker, MapRegion, DEFAULT_CENTER};
pub use viewmodel::{
    format_rating, CardViewModel, DetailScreen, DetailViewModel, ImageView, ListViewModel,
    ADDRESS_NOT_AVAILABLE, EMPTY_RESULTS_MESSAGE, HOURS_NOT_AVAILABLE, IMAGE_PLACEHOLDER,
    LOCATION_NOT_AVAILABLE, NAME_NOT_AVAILABLE, NOT_FOUND_MESSAGE, PHONE_NOT_AVAILABLE,
    RATING_NOT_AVAILABLE, SERVICES_NOT_SPECIFIED, SERVICE_NOT_SPECIFIED,
};
