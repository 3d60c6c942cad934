//! Error types for the barber directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors escape the state containers: loads, lookups and location
//! requests catch them at their origin and turn them into state flags that the
//! presentation layer reads.

use crate::domain::barber::BarberId;
use thiserror::Error;

/// The main error type for directory operations.
///
/// # Examples
///
/// ```
/// use barber_finder::domain::{BarberId, DirectoryError};
///
/// fn find() -> Result<(), DirectoryError> {
///     Err(DirectoryError::NotFound(BarberId::Int(7)))
/// }
///
/// assert_eq!(find().unwrap_err().to_string(), "Barber not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The dataset could not be fetched or parsed.
    ///
    /// The string carries the detailed cause for logging; users only ever see
    /// a generic retriable message.
    #[error("Load error: {0}")]
    Load(String),

    /// No record with the given id is visible.
    #[error("Barber not found: {0}")]
    NotFound(BarberId),

    /// The device location could not be determined.
    #[error("Location error: {0}")]
    Location(String),

    /// The user refused the location permission.
    #[error("Location permission denied")]
    PermissionDenied,

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
