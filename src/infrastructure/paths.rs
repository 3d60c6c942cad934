//! Path utilities for configuration and log files.

use std::path::PathBuf;

/// Name of the per-user data subdirectory.
const APP_DIR_NAME: &str = "barber-finder";

/// Returns the data directory for log files.
///
/// Resolves to the platform data directory (for example
/// `~/.local/share/barber-finder` on Linux), or `./barber-finder` when the
/// platform has none.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is known,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use barber_finder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/barbers.json").to_str(), Some("/srv/barbers.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
