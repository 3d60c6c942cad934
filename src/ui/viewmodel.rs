//! View model types representing presentation-ready directory state.
//!
//! View models are computed from [`DirectoryState`] and records, and carry only
//! display-ready data: fallback text is already substituted for absent fields,
//! ratings are formatted, and search matches are pre-computed as highlight ranges.
//! Rendering them is left to the host's presentation layer.
//!
//! # Example
//!
//! ```rust
//! use barber_finder::ui::{DetailViewModel, NAME_NOT_AVAILABLE};
//! use barber_finder::domain::{BarberId, BarberRecord};
//!
//! let record = BarberRecord { id: BarberId::Int(4), ..BarberRecord::default() };
//! let detail = DetailViewModel::from_record(&record);
//! assert_eq!(detail.name, NAME_NOT_AVAILABLE);
//! assert_eq!(detail.rating, "N/A");
//! ```

use crate::app::filters::{normalize_term, SearchMode};
use crate::app::DirectoryState;
use crate::domain::{BarberId, BarberRecord, Coordinates};
use crate::ui::links::{dial_url, maps_url, Platform};
use crate::ui::map::map_label;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub const NAME_NOT_AVAILABLE: &str = "name not available";
pub const ADDRESS_NOT_AVAILABLE: &str = "address not available";
pub const RATING_NOT_AVAILABLE: &str = "N/A";
pub const PHONE_NOT_AVAILABLE: &str = "phone not available";
pub const HOURS_NOT_AVAILABLE: &str = "hours not available";
pub const SERVICES_NOT_SPECIFIED: &str = "services not specified";
pub const SERVICE_NOT_SPECIFIED: &str = "service not specified";
pub const LOCATION_NOT_AVAILABLE: &str = "location not available";
pub const IMAGE_PLACEHOLDER: &str = "No image";
pub const NOT_FOUND_MESSAGE: &str = "Barber not found.";
pub const EMPTY_RESULTS_MESSAGE: &str = "No barbers found.";

const STATUS_OPEN: &str = "Open";
const STATUS_CLOSED: &str = "Closed";

/// Image slot of a card or detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    Uri(String),
    Placeholder(&'static str),
}

impl ImageView {
    fn of(record: &BarberRecord) -> Self {
        record
            .image()
            .map_or(Self::Placeholder(IMAGE_PLACEHOLDER), |uri| Self::Uri(uri.to_string()))
    }
}

/// One entry of the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub id: BarberId,
    pub name: String,
    pub address: String,
    pub rating: String,
    pub status: &'static str,
    pub is_open: bool,
    pub image: ImageView,
    /// Service tags; empty when the record lists none.
    pub services: Vec<String>,

    /// Character ranges of `name` matched by the current name term.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl CardViewModel {
    #[must_use]
    pub fn from_record(record: &BarberRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.display_name().unwrap_or(NAME_NOT_AVAILABLE).to_string(),
            address: record.display_address().unwrap_or(ADDRESS_NOT_AVAILABLE).to_string(),
            rating: format_rating(record.rating),
            status: status_label(record.is_open),
            is_open: record.is_open,
            image: ImageView::of(record),
            services: service_labels(&record.services),
            highlight_ranges: vec![],
        }
    }
}

/// Content of the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListViewModel {
    Loading,
    Error(String),
    Empty { message: &'static str },
    Items(Vec<CardViewModel>),
}

impl ListViewModel {
    /// Computes the list screen from the container.
    ///
    /// Loading takes precedence over an error, and an error over the results.
    #[must_use]
    pub fn from_state(state: &DirectoryState) -> Self {
        if state.is_loading() {
            return Self::Loading;
        }
        if let Some(error) = state.error() {
            return Self::Error(error.to_string());
        }
        if state.derived_view().is_empty() {
            return Self::Empty {
                message: EMPTY_RESULTS_MESSAGE,
            };
        }

        let term = normalize_term(state.search_name());
        let highlighter = Highlighter::new(state.search_mode());

        let cards = state
            .derived_view()
            .iter()
            .map(|record| {
                let mut card = CardViewModel::from_record(record);
                if !term.is_empty() {
                    if let Some(name) = record.display_name() {
                        card.highlight_ranges = highlighter.ranges(name, &term);
                    }
                }
                card
            })
            .collect();

        Self::Items(cards)
    }
}

/// Everything the detail screen shows about one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub id: BarberId,
    pub name: String,
    pub address: String,
    pub rating: String,
    pub status: &'static str,
    pub is_open: bool,
    pub image: ImageView,
    pub phone: String,
    /// `tel:` link, present only when a phone number is known.
    pub dial_url: Option<String>,
    pub opening_hours: String,
    pub services: Vec<String>,
    /// Shown in place of the tag list when `services` is empty.
    pub services_fallback: Option<&'static str>,
    pub coordinates: Option<Coordinates>,
    /// Shown in place of the map when `coordinates` is absent.
    pub location_fallback: Option<&'static str>,
    /// Marker title and maps label.
    pub map_label: String,
}

impl DetailViewModel {
    #[must_use]
    pub fn from_record(record: &BarberRecord) -> Self {
        let services = service_labels(&record.services);
        let coordinates = record.coordinates();

        Self {
            id: record.id.clone(),
            name: record.display_name().unwrap_or(NAME_NOT_AVAILABLE).to_string(),
            address: record.display_address().unwrap_or(ADDRESS_NOT_AVAILABLE).to_string(),
            rating: format_rating(record.rating),
            status: status_label(record.is_open),
            is_open: record.is_open,
            image: ImageView::of(record),
            phone: record.contact_phone().unwrap_or(PHONE_NOT_AVAILABLE).to_string(),
            dial_url: record.contact_phone().map(dial_url),
            opening_hours: record
                .opening_hours
                .as_deref()
                .filter(|hours| !hours.is_empty())
                .unwrap_or(HOURS_NOT_AVAILABLE)
                .to_string(),
            services_fallback: services.is_empty().then_some(SERVICES_NOT_SPECIFIED),
            services,
            coordinates,
            location_fallback: coordinates.is_none().then_some(LOCATION_NOT_AVAILABLE),
            map_label: map_label(record).to_string(),
        }
    }

    /// Link opening the record in the platform's maps application.
    ///
    /// `None` when the record has no coordinates.
    #[must_use]
    pub fn maps_link(&self, platform: Platform) -> Option<String> {
        self.coordinates
            .map(|coordinates| maps_url(&self.map_label, coordinates, platform))
    }
}

/// Outcome of opening the detail screen for an id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailScreen {
    Found(Box<DetailViewModel>),
    NotFound { message: &'static str },
}

impl DetailScreen {
    /// Resolves `id` against the container's derived view.
    #[must_use]
    pub fn lookup(state: &DirectoryState, id: &BarberId) -> Self {
        state.lookup_detail(id).map_or(
            Self::NotFound {
                message: NOT_FOUND_MESSAGE,
            },
            |record| Self::Found(Box::new(DetailViewModel::from_record(record))),
        )
    }
}

/// Formats a rating with one decimal, or `"N/A"`.
#[must_use]
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| RATING_NOT_AVAILABLE.to_string(), |rating| format!("{rating:.1}"))
}

const fn status_label(is_open: bool) -> &'static str {
    if is_open {
        STATUS_OPEN
    } else {
        STATUS_CLOSED
    }
}

fn service_labels(services: &[String]) -> Vec<String> {
    services
        .iter()
        .map(|service| {
            if service.is_empty() {
                SERVICE_NOT_SPECIFIED.to_string()
            } else {
                service.clone()
            }
        })
        .collect()
}

/// Computes highlight ranges for the active search mode.
struct Highlighter {
    fuzzy: Option<SkimMatcherV2>,
}

impl Highlighter {
    fn new(mode: SearchMode) -> Self {
        Self {
            fuzzy: matches!(mode, SearchMode::Fuzzy).then(SkimMatcherV2::default),
        }
    }

    /// `term` is already normalized. Ranges index characters of `text` itself.
    fn ranges(&self, text: &str, term: &str) -> Vec<(usize, usize)> {
        let indices: Vec<usize> = match &self.fuzzy {
            // Smart case: a lowercase pattern matches case-insensitively.
            Some(matcher) => matcher
                .fuzzy_indices(text, term)
                .map(|(_score, indices)| indices)
                .unwrap_or_default(),
            None => substring_indices(text, term),
        };
        coalesce(&indices)
    }
}

/// Character indices of `text` covered by the first case-insensitive occurrence
/// of `term`.
///
/// Lowercasing may expand one character into several (`İ` becomes `i` plus a
/// combining dot), so each lowered character remembers the original character it
/// came from.
fn substring_indices(text: &str, term: &str) -> Vec<usize> {
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.push(idx);
        }
    }

    let Some(byte_pos) = lowered.find(term) else {
        return vec![];
    };
    let start = lowered[..byte_pos].chars().count();
    let end = (start + term.chars().count()).min(origin.len());

    let mut indices = origin[start..end].to_vec();
    indices.dedup();
    indices
}

/// Merges sorted character indices into `(start, end)` runs.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in indices {
        match (start, prev) {
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {
                start = Some(idx);
                prev = Some(idx);
            }
        }
    }

    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ActiveFilters;
    use crate::source::StaticSource;

    fn full_record() -> BarberRecord {
        BarberRecord {
            id: BarberId::Int(1),
            name: Some("Ana Cortes".to_string()),
            address: Some("Centro".to_string()),
            rating: Some(4.56),
            is_open: true,
            services: vec!["Barba".to_string(), String::new()],
            image_url: Some("https://img.example/ana.jpg".to_string()),
            phone: Some("+55 11 1234-5678".to_string()),
            latitude: Some(-23.5),
            longitude: Some(-46.6),
            opening_hours: Some("9h-18h".to_string()),
        }
    }

    #[test]
    fn detail_uses_record_values() {
        let detail = DetailViewModel::from_record(&full_record());

        assert_eq!(detail.name, "Ana Cortes");
        assert_eq!(detail.rating, "4.6");
        assert_eq!(detail.status, "Open");
        assert_eq!(detail.image, ImageView::Uri("https://img.example/ana.jpg".to_string()));
        assert_eq!(detail.dial_url.as_deref(), Some("tel:+55 11 1234-5678"));
        assert_eq!(detail.services, vec!["Barba".to_string(), SERVICE_NOT_SPECIFIED.to_string()]);
        assert!(detail.services_fallback.is_none());
        assert!(detail.location_fallback.is_none());
        assert_eq!(
            detail.maps_link(Platform::Android).as_deref(),
            Some("geo:0,0?q=-23.5,-46.6(Ana%20Cortes)")
        );
    }

    #[test]
    fn detail_substitutes_every_fallback() {
        let detail = DetailViewModel::from_record(&BarberRecord::default());

        assert_eq!(detail.name, NAME_NOT_AVAILABLE);
        assert_eq!(detail.address, ADDRESS_NOT_AVAILABLE);
        assert_eq!(detail.rating, RATING_NOT_AVAILABLE);
        assert_eq!(detail.status, "Closed");
        assert_eq!(detail.image, ImageView::Placeholder(IMAGE_PLACEHOLDER));
        assert_eq!(detail.phone, PHONE_NOT_AVAILABLE);
        assert!(detail.dial_url.is_none());
        assert_eq!(detail.opening_hours, HOURS_NOT_AVAILABLE);
        assert_eq!(detail.services_fallback, Some(SERVICES_NOT_SPECIFIED));
        assert_eq!(detail.location_fallback, Some(LOCATION_NOT_AVAILABLE));
        assert!(detail.maps_link(Platform::Ios).is_none());
    }

    #[test]
    fn list_prefers_loading_then_error() {
        struct Broken;
        impl crate::source::DatasetSource for Broken {
            fn fetch_all(&self) -> crate::domain::Result<Vec<BarberRecord>> {
                Err(crate::domain::DirectoryError::Load("gone".to_string()))
            }
        }

        let mut state = DirectoryState::new(Box::new(Broken));
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&seen);
        state.subscribe(move |snap| sink.borrow_mut().push(snap.loading));
        state.load();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(
            ListViewModel::from_state(&state),
            ListViewModel::Error(crate::app::LOAD_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn list_reports_empty_results() {
        let mut state = DirectoryState::new(Box::new(StaticSource::new(vec![full_record()])));
        state.load();
        state.apply_filters(ActiveFilters::default().with_min_rating(5.0));

        assert_eq!(
            ListViewModel::from_state(&state),
            ListViewModel::Empty {
                message: EMPTY_RESULTS_MESSAGE
            }
        );
    }

    #[test]
    fn list_highlights_substring_matches() {
        let mut state = DirectoryState::new(Box::new(StaticSource::new(vec![full_record()])));
        state.load();
        state.set_search_terms(" COR ", "");

        let ListViewModel::Items(cards) = ListViewModel::from_state(&state) else {
            panic!("expected items");
        };
        assert_eq!(cards[0].highlight_ranges, vec![(4, 7)]);
    }

    fn highlighted(name: &str, term: &str, mode: SearchMode) -> Vec<(usize, usize)> {
        let source = StaticSource::new(vec![BarberRecord::new(1, name)]);
        let mut state = DirectoryState::new(Box::new(source)).with_search_mode(mode);
        state.load();
        state.set_search_terms(term, "");

        let ListViewModel::Items(cards) = ListViewModel::from_state(&state) else {
            panic!("expected items");
        };
        cards[0].highlight_ranges.clone()
    }

    fn slice(text: &str, (start, end): (usize, usize)) -> String {
        text.chars().skip(start).take(end - start).collect()
    }

    #[test]
    fn highlights_index_original_characters_when_lowercase_expands() {
        let name = "İzmir Barber";

        let ranges = highlighted(name, "bar", SearchMode::Substring);
        assert_eq!(ranges, vec![(6, 9)]);
        assert_eq!(slice(name, ranges[0]), "Bar");

        let ranges = highlighted(name, "i\u{307}z", SearchMode::Substring);
        assert_eq!(ranges, vec![(0, 2)]);
        assert_eq!(slice(name, ranges[0]), "İz");
    }

    #[test]
    fn fuzzy_highlights_stay_inside_the_name() {
        let name = "İzmir Barber";
        let ranges = highlighted(name, "bar", SearchMode::Fuzzy);

        assert_eq!(ranges.first().map(|range| range.0), Some(6));
        assert!(ranges.iter().all(|&(_, end)| end <= name.chars().count()));
        assert_eq!(slice(name, ranges[0]).to_lowercase().chars().next(), Some('b'));
    }

    #[test]
    fn detail_screen_reports_not_found() {
        let state = DirectoryState::new(Box::new(StaticSource::default()));
        assert_eq!(
            DetailScreen::lookup(&state, &BarberId::Int(1)),
            DetailScreen::NotFound {
                message: NOT_FOUND_MESSAGE
            }
        );
    }

    #[test]
    fn coalesce_merges_consecutive_indices() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }
}
