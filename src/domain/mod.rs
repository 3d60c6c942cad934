//! Domain layer for the barber directory.
//!
//! This module contains the core domain types, independent of where the dataset
//! comes from or how it is displayed.
//!
//! # Organization
//!
//! - [`barber`]: Barber record model and identifiers
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use barber_finder::domain::{BarberRecord, Result};
//!
//! fn create_record() -> Result<BarberRecord> {
//!     Ok(BarberRecord::new(1, "Ana Cortes"))
//! }
//! ```

pub mod barber;
pub mod error;

pub use barber::{BarberId, BarberRecord, Coordinates};
pub use error::{DirectoryError, Result};
