//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where configuration, datasets and logs live on the host.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
