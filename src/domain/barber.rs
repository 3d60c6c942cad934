//! Barber record domain model.
//!
//! This module defines [`BarberRecord`], one entry of the directory dataset, and its
//! identifier type [`BarberId`]. Records are immutable once loaded: the directory
//! only ever filters them into fresh derived sequences.
//!
//! Records deserialize from the camelCase JSON shape of the bundled dataset:
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Ana Cortes",
//!   "address": "Rua Augusta, 120 - Centro, São Paulo",
//!   "rating": 4.5,
//!   "isOpen": true,
//!   "services": ["Barba"],
//!   "imageUrl": "https://example.com/ana.jpg",
//!   "phone": "+55 11 99999-0000",
//!   "latitude": -23.55,
//!   "longitude": -46.63,
//!   "openingHours": "Seg-Sáb 9h-19h"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a record within the dataset.
///
/// Datasets use either integer or string ids, so both are accepted. The JSON form
/// is the bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarberId {
    Int(i64),
    Text(String),
}

impl Default for BarberId {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for BarberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for BarberId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for BarberId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for BarberId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One hairdresser or barbershop in the directory.
///
/// Every descriptive field may be missing in the source data. Presentation code
/// substitutes fallback text for absent values (see
/// [`DetailViewModel`](crate::ui::DetailViewModel)); the filter pipeline treats
/// an absent field as never matching a non-empty constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberRecord {
    pub id: BarberId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Average rating between 0.0 and 5.0.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub opening_hours: Option<String>,
}

impl BarberRecord {
    /// Creates a record with the given id and name and every other field empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use barber_finder::domain::{BarberId, BarberRecord};
    ///
    /// let record = BarberRecord::new(1, "Ana Cortes");
    /// assert_eq!(record.id, BarberId::Int(1));
    /// assert_eq!(record.display_name(), Some("Ana Cortes"));
    /// assert!(record.coordinates().is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<BarberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the name if present and non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Returns the address if present and non-empty.
    #[must_use]
    pub fn display_address(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }

    /// Returns the phone number if present and non-empty.
    #[must_use]
    pub fn contact_phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    /// Returns the image URI if present and non-empty.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }

    /// Returns the position only when both latitude and longitude are known.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }

    /// Returns `true` if the record offers at least one of `services`.
    pub fn offers_any<'a, I>(&self, services: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        services.into_iter().any(|wanted| self.services.contains(wanted))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
