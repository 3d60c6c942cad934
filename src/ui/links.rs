//! Deep links into the host platform's phone and maps applications.

use crate::domain::{BarberRecord, Coordinates};
use crate::ui::map::map_label;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a maps label: everything except letters, digits and
/// `-_.!~*'()`.
const LABEL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Mobile platform whose maps URL scheme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

/// Builds a `tel:` link.
///
/// # Examples
///
/// ```
/// use barber_finder::ui::dial_url;
///
/// assert_eq!(dial_url("+55 11 3256-1020"), "tel:+55 11 3256-1020");
/// ```
#[must_use]
pub fn dial_url(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Builds a link showing `label` at `coordinates` in the platform maps app.
///
/// # Examples
///
/// ```
/// use barber_finder::ui::{maps_url, Platform};
/// use barber_finder::domain::Coordinates;
///
/// let at = Coordinates::new(-23.5, -46.6);
/// assert_eq!(maps_url("Zé & Cia", at, Platform::Ios), "maps:0,0?q=Z%C3%A9%20%26%20Cia@-23.5,-46.6");
/// assert_eq!(maps_url("Zé & Cia", at, Platform::Android), "geo:0,0?q=-23.5,-46.6(Z%C3%A9%20%26%20Cia)");
/// ```
#[must_use]
pub fn maps_url(label: &str, coordinates: Coordinates, platform: Platform) -> String {
    let label = utf8_percent_encode(label, LABEL_ENCODE_SET);
    let lat_lng = format!("{},{}", coordinates.latitude, coordinates.longitude);

    match platform {
        Platform::Ios => format!("maps:0,0?q={label}@{lat_lng}"),
        Platform::Android => format!("geo:0,0?q={lat_lng}({label})"),
    }
}

/// Maps link for a record, or `None` if it has no coordinates.
#[must_use]
pub fn record_maps_url(record: &BarberRecord, platform: Platform) -> Option<String> {
    record
        .coordinates()
        .map(|coordinates| maps_url(map_label(record), coordinates, platform))
}
