//! Barber Finder: a searchable, filterable directory of hairdressers and barbershops.
//!
//! The crate provides:
//! - A search/filter state container over a static dataset of barber records
//! - Case-insensitive name and region search, with an optional fuzzy mode
//! - Open-status, minimum rating and service filters
//! - Change notification for presentation layers
//! - Display-ready view models with fallback text for missing fields
//! - Device location state and maps/phone deep links

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host presentation (screens, maps, dialer)          │  ← Outside the crate
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State container
//! │  - Event handling                                   │  ← Business logic
//! │  - Filter pipeline                                  │
//! │  - Observer notification                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Location      │
//! │ (ui/)         │   │ (source/)     │   │ (location/)   │
//! │ - View models │   │ - Bundled set │   │ - Provider    │
//! │ - Map markers │   │ - JSON file   │   │ - State       │
//! │ - Deep links  │   │ - Validation  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Barber record model (domain/barber)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State container with event/action model
//! - [`domain`]: Core domain types (records, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`location`]: Device location provider and state
//! - [`source`]: Dataset sources
//! - [`ui`]: View models, map data and links
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Configuration comes either from a string map handed over by the host or from
//! a TOML file:
//!
//! ```toml
//! dataset_path = "~/barbers.json"
//! search_mode = "fuzzy"
//! trace_level = "debug"
//! log_dir = "/tmp/barber-finder"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use barber_finder::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let events = vec![
//!     Event::SearchSubmitted { name: String::new(), region: "pinheiros".to_string() },
//!     Event::SetOpenStatus(Some(true)),
//! ];
//! for event in events {
//!     let (_changed, _actions) = handle_event(&mut state, &event)?;
//!     // Re-render and execute actions...
//! }
//! assert!(state.derived_view().iter().all(|record| record.is_open));
//! # Ok::<(), barber_finder::DirectoryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod location;
pub mod source;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, ActiveFilters, DirectorySnapshot, DirectoryState, Event,
    SearchFilterState, SearchMode, SubscriptionId, AVAILABLE_SERVICES,
};
pub use domain::{BarberId, BarberRecord, Coordinates, DirectoryError, Result};

use infrastructure::paths::expand_tilde;
use serde::Deserialize;
use source::{BundledSource, DatasetSource, JsonFileSource};
use std::collections::BTreeMap;
use std::path::Path;

/// Directory configuration.
///
/// Every field is optional in both input formats; missing keys keep their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to a JSON dataset file.
    ///
    /// A leading `~` is expanded. When unset, the bundled dataset is used.
    pub dataset_path: Option<String>,

    /// How search terms are matched. Default: substring.
    pub search_mode: SearchMode,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the log file. Defaults to the platform data directory.
    pub log_dir: Option<String>,
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - Empty values count as unset
    /// - `search_mode`: `substring` or `fuzzy`, anything else falls back to substring
    /// - `dataset_path`, `trace_level`, `log_dir`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use barber_finder::{Config, SearchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_mode".to_string(), "Fuzzy".to_string());
    /// map.insert("dataset_path".to_string(), "~/barbers.json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.search_mode, SearchMode::Fuzzy);
    /// assert_eq!(config.dataset_path.as_deref(), Some("~/barbers.json"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let search_mode = value("search_mode")
            .map(|raw| {
                raw.parse::<SearchMode>().unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "falling back to substring search");
                    SearchMode::default()
                })
            })
            .unwrap_or_default();

        Self {
            dataset_path: value("dataset_path"),
            search_mode,
            trace_level: value("trace_level"),
            log_dir: value("log_dir"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// `search_mode` is read with the same case-insensitive rule as
    /// [`from_map`](Self::from_map), but an unknown mode is an error here rather
    /// than a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Io`] if the file cannot be read and
    /// [`DirectoryError::Config`] if it is not valid TOML for this structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content)
            .map_err(|e| DirectoryError::Config(format!("failed to parse config: {e}")))
    }

    /// Builds the dataset source this configuration selects.
    #[must_use]
    pub fn dataset_source(&self) -> Box<dyn DatasetSource> {
        match &self.dataset_path {
            Some(path) => Box::new(JsonFileSource::new(expand_tilde(path))),
            None => Box::new(BundledSource),
        }
    }
}

/// Creates a directory from configuration and performs the initial load.
///
/// Load failures do not escape: they are reported through
/// [`DirectoryState::error`]. Logging is set up separately with
/// [`observability::init_tracing`].
///
/// # Example
///
/// ```rust
/// use barber_finder::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(!state.is_loading());
/// assert!(state.error().is_none());
/// assert_eq!(state.derived_view(), state.dataset());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> DirectoryState {
    tracing::debug!(
        dataset_path = ?config.dataset_path,
        search_mode = ?config.search_mode,
        "initializing barber directory"
    );

    let mut state = DirectoryState::new(config.dataset_source()).with_search_mode(config.search_mode);
    state.load();
    state
}
