//! Dataset sources for the directory.
//!
//! # Modules
//!
//! - `backend`: The [`DatasetSource`] trait and dataset validation
//! - `json`: JSON file on disk
//! - `memory`: Bundled and in-memory datasets

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{ensure_unique_ids, parse_dataset, DatasetSource};
pub use json::JsonFileSource;
pub use memory::{BundledSource, StaticSource};
