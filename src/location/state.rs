//! Device location state for map presentation.
//!
//! [`LocationState`] mirrors what map screens need: the last known coordinates, a
//! user-facing error, and whether a request is in flight. It is independent of the
//! directory state; neither waits for the other.

use crate::domain::error::DirectoryError;
use crate::domain::Coordinates;
use crate::location::provider::{LocationProvider, PermissionStatus};

pub const PERMISSION_DENIED_MESSAGE: &str = "Location permission denied";
pub const PERMISSION_REQUEST_FAILED_MESSAGE: &str = "Failed to request location permission";
pub const POSITION_FAILED_MESSAGE: &str = "Failed to get current location";

/// Last known device location and request status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationState {
    coordinates: Option<Coordinates>,
    error: Option<String>,
    loading: bool,
}

impl LocationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests permission and, if granted, the current position.
    ///
    /// Failures are recorded in [`error`](Self::error) and leave any previous
    /// coordinates in place. `loading` is always cleared on return.
    ///
    /// # Examples
    ///
    /// ```
    /// use barber_finder::location::{LocationState, StaticLocationProvider};
    /// use barber_finder::domain::Coordinates;
    ///
    /// let mut location = LocationState::new();
    /// location.refresh(&mut StaticLocationProvider::denied());
    /// assert_eq!(location.error(), Some("Location permission denied"));
    ///
    /// location.refresh(&mut StaticLocationProvider::at(Coordinates::new(-23.5, -46.6)));
    /// assert!(location.error().is_none());
    /// assert!(location.coordinates().is_some());
    /// ```
    pub fn refresh(&mut self, provider: &mut dyn LocationProvider) {
        let _span = tracing::debug_span!("refresh_location").entered();
        self.loading = true;

        match provider.request_permission() {
            Ok(PermissionStatus::Granted) => match provider.current_position() {
                Ok(coordinates) => {
                    tracing::debug!(
                        latitude = coordinates.latitude,
                        longitude = coordinates.longitude,
                        "location updated"
                    );
                    self.coordinates = Some(coordinates);
                    self.error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to get current location");
                    self.error = Some(POSITION_FAILED_MESSAGE.to_string());
                }
            },
            Ok(PermissionStatus::Denied) => {
                tracing::debug!(error = %DirectoryError::PermissionDenied, "location unavailable");
                self.error = Some(PERMISSION_DENIED_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to request location permission");
                self.error = Some(PERMISSION_REQUEST_FAILED_MESSAGE.to_string());
            }
        }

        self.loading = false;
    }

    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
