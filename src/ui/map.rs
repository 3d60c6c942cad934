//! Map view models: visible region and record markers.

use crate::domain::{BarberId, BarberRecord, Coordinates};

/// Label used for records without a name on maps.
pub const DEFAULT_MAP_LABEL: &str = "Location";

/// Center used before the device location is known (São Paulo).
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(-23.550_520, -46.633_308);

const OVERVIEW_LATITUDE_DELTA: f64 = 0.0922;
const OVERVIEW_LONGITUDE_DELTA: f64 = 0.0421;
const DETAIL_DELTA: f64 = 0.01;

/// Visible map area: a center and the span shown around it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// City-wide region around the user, or around [`DEFAULT_CENTER`].
    #[must_use]
    pub fn overview(user: Option<Coordinates>) -> Self {
        Self {
            center: user.unwrap_or(DEFAULT_CENTER),
            latitude_delta: OVERVIEW_LATITUDE_DELTA,
            longitude_delta: OVERVIEW_LONGITUDE_DELTA,
        }
    }

    /// Street-level region around a single record.
    #[must_use]
    pub const fn detail(center: Coordinates) -> Self {
        Self {
            center,
            latitude_delta: DETAIL_DELTA,
            longitude_delta: DETAIL_DELTA,
        }
    }
}

/// A pin on the map for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: BarberId,
    pub coordinates: Coordinates,
    pub title: String,
    /// Callout subtitle; empty when the address is unknown.
    pub address: String,
}

/// Markers for every record that has coordinates, in view order.
///
/// Records without a position are skipped rather than pinned at the origin.
#[must_use]
pub fn markers(records: &[BarberRecord]) -> Vec<MapMarker> {
    records
        .iter()
        .filter_map(|record| {
            record.coordinates().map(|coordinates| MapMarker {
                id: record.id.clone(),
                coordinates,
                title: map_label(record).to_string(),
                address: record.display_address().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Name shown on markers and maps links.
#[must_use]
pub fn map_label(record: &BarberRecord) -> &str {
    record.display_name().unwrap_or(DEFAULT_MAP_LABEL)
}
