//! Structured logging to a rotating file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → barber-finder.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Lines are written to `<data_dir>/barber-finder/barber-finder.log`
//!   unless `log_dir` overrides the directory
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use barber_finder::observability::init_tracing;
//! use barber_finder::Config;
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     log_dir: Some(dir.path().display().to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("directory initialized");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
