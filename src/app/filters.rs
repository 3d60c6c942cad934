//! Search criteria and the filter pipeline.
//!
//! This module defines [`SearchFilterState`], the user's current search terms and
//! filter selection, and [`derive_view`], the pure function that turns the full
//! dataset and those criteria into the displayed subset.
//!
//! # Filtering Algorithm
//!
//! Starting from the full dataset in its original order, a record is kept only if
//! it passes every active predicate:
//!
//! 1. **Name**: trimmed, lowercased term is contained in the lowercased name
//! 2. **Region**: trimmed, lowercased term is contained in the lowercased address
//! 3. **Open status**: `is_open` equals the selected status, when one is selected
//! 4. **Rating floor**: rating is at least `min_rating`, when `min_rating > 0`
//! 5. **Services**: the record offers at least one selected service
//!
//! Empty terms, an unset status, a zero rating floor and an empty service set
//! impose no constraint. Absent names, addresses and ratings never satisfy an
//! active constraint.

use crate::domain::BarberRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Service tags offered by the filter selector.
pub const AVAILABLE_SERVICES: [&str; 5] = [
    "Corte Masculino",
    "Corte Feminino",
    "Barba",
    "Coloração",
    "Relaxamento",
];

/// How name and region terms are matched against records.
///
/// Parsing ignores case and surrounding whitespace in every input format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SearchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,

    /// Skim-style fuzzy matching: the term's characters must appear in order.
    Fuzzy,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "fuzzy" => Ok(Self::Fuzzy),
            other => Err(format!("unknown search mode: {other}")),
        }
    }
}

impl TryFrom<String> for SearchMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Filter selection made through the filter selector.
///
/// Always replaced as a whole by
/// [`DirectoryState::apply_filters`](super::DirectoryState::apply_filters); fields
/// the caller leaves at their defaults impose no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilters {
    /// Required open status, or `None` to ignore it.
    pub is_open: Option<bool>,

    /// Minimum rating; values of zero or below disable the rating filter.
    pub min_rating: f64,

    /// Selected service tags; a record must offer any one of them.
    pub services: BTreeSet<String>,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            is_open: None,
            min_rating: 0.0,
            services: BTreeSet::new(),
        }
    }
}

impl ActiveFilters {
    #[must_use]
    pub fn open_only() -> Self {
        Self {
            is_open: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_rating(self, min_rating: f64) -> Self {
        Self { min_rating, ..self }
    }

    #[must_use]
    pub fn with_services<I, S>(self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            services: services.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Adds `service` if it is not selected, removes it otherwise.
    pub fn toggle_service(&mut self, service: &str) {
        if !self.services.remove(service) {
            self.services.insert(service.to_string());
        }
    }

    /// Returns `true` if no filter constrains the view.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.is_open.is_none() && !rating_floor_active(self.min_rating) && self.services.is_empty()
    }
}

/// Search terms and filter selection owned by the state container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilterState {
    pub search_name: String,
    pub search_region: String,
    pub active_filters: ActiveFilters,
}

impl SearchFilterState {
    /// Returns `true` if neither terms nor filters constrain the view.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_name.trim().is_empty()
            && self.search_region.trim().is_empty()
            && self.active_filters.is_inactive()
    }
}

/// Matches normalized terms against record fields.
struct TermMatcher {
    mode: SearchMode,
    fuzzy: Option<SkimMatcherV2>,
}

impl TermMatcher {
    fn new(mode: SearchMode) -> Self {
        let fuzzy = match mode {
            SearchMode::Substring => None,
            SearchMode::Fuzzy => Some(SkimMatcherV2::default()),
        };
        Self { mode, fuzzy }
    }

    /// `term` must already be trimmed and lowercased and non-empty.
    fn matches(&self, field: Option<&str>, term: &str) -> bool {
        let Some(field) = field else {
            return false;
        };
        let field = field.to_lowercase();
        match (self.mode, &self.fuzzy) {
            (SearchMode::Fuzzy, Some(matcher)) => matcher.fuzzy_match(&field, term).is_some(),
            _ => field.contains(term),
        }
    }
}

/// Trims and lowercases a raw search term.
#[must_use]
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `NaN` and non-positive floors are disabled.
fn rating_floor_active(min_rating: f64) -> bool {
    min_rating > 0.0
}

/// Computes the displayed subset of `dataset` for `criteria`.
///
/// The result is a fresh sequence in dataset order; `dataset` is never modified.
///
/// # Examples
///
/// ```
/// use barber_finder::app::filters::{derive_view, SearchFilterState, SearchMode};
/// use barber_finder::domain::BarberRecord;
///
/// let dataset = vec![BarberRecord::new(1, "Ana Cortes"), BarberRecord::new(2, "Bela Hair")];
/// let criteria = SearchFilterState {
///     search_name: "  ANA ".to_string(),
///     ..SearchFilterState::default()
/// };
///
/// let view = derive_view(&dataset, &criteria, SearchMode::Substring);
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].display_name(), Some("Ana Cortes"));
/// ```
#[must_use]
pub fn derive_view(
    dataset: &[BarberRecord],
    criteria: &SearchFilterState,
    mode: SearchMode,
) -> Vec<BarberRecord> {
    let _span = tracing::debug_span!("derive_view",
        total_records = dataset.len(),
        name_len = criteria.search_name.len(),
        region_len = criteria.search_region.len(),
        mode = ?mode
    )
    .entered();

    let name_term = normalize_term(&criteria.search_name);
    let region_term = normalize_term(&criteria.search_region);
    let filters = &criteria.active_filters;
    let matcher = TermMatcher::new(mode);

    let derived: Vec<BarberRecord> = dataset
        .iter()
        .filter(|record| name_term.is_empty() || matcher.matches(record.name.as_deref(), &name_term))
        .filter(|record| {
            region_term.is_empty() || matcher.matches(record.address.as_deref(), &region_term)
        })
        .filter(|record| filters.is_open.map_or(true, |open| record.is_open == open))
        .filter(|record| {
            !rating_floor_active(filters.min_rating)
                || record.rating.is_some_and(|rating| rating >= filters.min_rating)
        })
        .filter(|record| filters.services.is_empty() || record.offers_any(&filters.services))
        .cloned()
        .collect();

    tracing::debug!(derived_count = derived.len(), "derived view computed");
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BarberId;

    fn record(id: i64, name: &str, address: &str, rating: Option<f64>, open: bool, services: &[&str]) -> BarberRecord {
        BarberRecord {
            id: BarberId::Int(id),
            name: Some(name.to_string()),
            address: Some(address.to_string()),
            rating,
            is_open: open,
            services: services.iter().map(ToString::to_string).collect(),
            ..BarberRecord::default()
        }
    }

    fn dataset() -> Vec<BarberRecord> {
        vec![
            record(1, "Ana Cortes", "Centro", Some(4.5), true, &["Barba"]),
            record(2, "Bela Hair", "Jardins", Some(3.0), false, &["Corte Feminino"]),
            record(3, "Navalha", "Rua Central, Jardins", None, true, &["Barba", "Corte Masculino"]),
        ]
    }

    fn ids(view: &[BarberRecord]) -> Vec<BarberId> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    fn criteria(name: &str, region: &str, filters: ActiveFilters) -> SearchFilterState {
        SearchFilterState {
            search_name: name.to_string(),
            search_region: region.to_string(),
            active_filters: filters,
        }
    }

    #[test]
    fn default_criteria_is_identity() {
        let data = dataset();
        let view = derive_view(&data, &SearchFilterState::default(), SearchMode::Substring);
        assert_eq!(view, data);
    }

    #[test]
    fn name_term_is_trimmed_and_case_insensitive() {
        let view = derive_view(&dataset(), &criteria("  bela  ", "", ActiveFilters::default()), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(2)]);
    }

    #[test]
    fn region_matches_address_substring() {
        let view = derive_view(&dataset(), &criteria("", "JARDINS", ActiveFilters::default()), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(2), BarberId::Int(3)]);
    }

    #[test]
    fn whitespace_only_terms_impose_no_constraint() {
        let data = dataset();
        let view = derive_view(&data, &criteria("   ", "\t", ActiveFilters::default()), SearchMode::Substring);
        assert_eq!(view.len(), data.len());
    }

    #[test]
    fn absent_name_never_matches_a_term() {
        let mut data = dataset();
        data.push(BarberRecord {
            id: BarberId::Int(9),
            address: Some("Centro".to_string()),
            ..BarberRecord::default()
        });

        let view = derive_view(&data, &criteria("a", "", ActiveFilters::default()), SearchMode::Substring);
        assert!(!ids(&view).contains(&BarberId::Int(9)));

        let view = derive_view(&data, &criteria("", "centro", ActiveFilters::default()), SearchMode::Substring);
        assert!(ids(&view).contains(&BarberId::Int(9)));
    }

    #[test]
    fn open_status_filters_both_ways() {
        let open = derive_view(&dataset(), &criteria("", "", ActiveFilters::open_only()), SearchMode::Substring);
        assert_eq!(ids(&open), vec![BarberId::Int(1), BarberId::Int(3)]);

        let closed = ActiveFilters {
            is_open: Some(false),
            ..ActiveFilters::default()
        };
        let closed = derive_view(&dataset(), &criteria("", "", closed), SearchMode::Substring);
        assert_eq!(ids(&closed), vec![BarberId::Int(2)]);
    }

    #[test]
    fn rating_floor_excludes_missing_and_lower_ratings() {
        let filters = ActiveFilters::default().with_min_rating(4.0);
        let view = derive_view(&dataset(), &criteria("", "", filters), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(1)]);
    }

    #[test]
    fn rating_floor_is_inclusive() {
        let filters = ActiveFilters::default().with_min_rating(3.0);
        let view = derive_view(&dataset(), &criteria("", "", filters), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(1), BarberId::Int(2)]);
    }

    #[test]
    fn nonsensical_rating_floors_disable_the_filter() {
        let data = dataset();
        for floor in [-2.0, 0.0, f64::NAN] {
            let filters = ActiveFilters::default().with_min_rating(floor);
            assert_eq!(derive_view(&data, &criteria("", "", filters), SearchMode::Substring).len(), 3);
        }
    }

    #[test]
    fn unreachable_rating_floor_yields_empty_view() {
        let filters = ActiveFilters::default().with_min_rating(9.0);
        assert!(derive_view(&dataset(), &criteria("", "", filters), SearchMode::Substring).is_empty());
    }

    #[test]
    fn services_use_or_semantics() {
        let filters = ActiveFilters::default().with_services(["Corte Feminino", "Corte Masculino"]);
        let view = derive_view(&dataset(), &criteria("", "", filters), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(2), BarberId::Int(3)]);
    }

    #[test]
    fn services_match_exactly() {
        let filters = ActiveFilters::default().with_services(["barba"]);
        assert!(derive_view(&dataset(), &criteria("", "", filters), SearchMode::Substring).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let filters = ActiveFilters::open_only().with_services(["Barba"]);
        let view = derive_view(&dataset(), &criteria("nav", "jardins", filters), SearchMode::Substring);
        assert_eq!(ids(&view), vec![BarberId::Int(3)]);
    }

    #[test]
    fn fuzzy_mode_matches_scattered_characters() {
        let data = dataset();
        let substring = derive_view(&data, &criteria("bhr", "", ActiveFilters::default()), SearchMode::Substring);
        let fuzzy = derive_view(&data, &criteria("bhr", "", ActiveFilters::default()), SearchMode::Fuzzy);

        assert!(substring.is_empty());
        assert_eq!(ids(&fuzzy), vec![BarberId::Int(2)]);
    }

    #[test]
    fn toggle_service_adds_then_removes() {
        let mut filters = ActiveFilters::default();
        filters.toggle_service("Barba");
        assert!(filters.services.contains("Barba"));
        filters.toggle_service("Barba");
        assert!(filters.is_inactive());
    }

    #[test]
    fn search_mode_parses_leniently() {
        assert_eq!(" Fuzzy ".parse::<SearchMode>(), Ok(SearchMode::Fuzzy));
        assert!("regex".parse::<SearchMode>().is_err());
    }

    #[test]
    fn search_mode_deserializes_like_from_str() {
        let mode: SearchMode = serde_json::from_str("\"SUBSTRING\"").unwrap();
        assert_eq!(mode, SearchMode::Substring);
        assert!(serde_json::from_str::<SearchMode>("\"regex\"").is_err());
        assert_eq!(serde_json::to_string(&SearchMode::Fuzzy).unwrap(), "\"fuzzy\"");
    }
}
