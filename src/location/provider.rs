//! Device location abstraction.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::Coordinates;

/// Answer to a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of the device's current position.
///
/// Implemented by the host platform. The filter pipeline never calls it; only map
/// presentation does.
pub trait LocationProvider {
    /// Asks the user for foreground location access.
    ///
    /// # Errors
    ///
    /// Returns an error if the request itself could not be made. A refusal is
    /// `Ok(PermissionStatus::Denied)`, not an error.
    fn request_permission(&mut self) -> Result<PermissionStatus>;

    /// Reads the current position.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Location`] if no fix can be obtained.
    fn current_position(&mut self) -> Result<Coordinates>;
}

/// Provider returning a fixed answer.
///
/// For hosts without positioning hardware and for tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLocationProvider {
    permission: PermissionStatus,
    position: Option<Coordinates>,
}

impl StaticLocationProvider {
    /// Grants permission and reports `position`.
    #[must_use]
    pub const fn at(position: Coordinates) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Some(position),
        }
    }

    /// Refuses permission.
    #[must_use]
    pub const fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: None,
        }
    }

    /// Grants permission but never gets a fix.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: None,
        }
    }
}

impl LocationProvider for StaticLocationProvider {
    fn request_permission(&mut self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    fn current_position(&mut self) -> Result<Coordinates> {
        self.position
            .ok_or_else(|| DirectoryError::Location("no position fix".to_string()))
    }
}
