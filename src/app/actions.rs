//! Actions representing side effects to be executed by the host.
//!
//! The event handler never navigates or opens links itself; it returns
//! [`Action`]s and leaves their execution to the presentation layer.
//!
//! # Example
//!
//! ```rust
//! use barber_finder::app::Action;
//! use barber_finder::domain::BarberId;
//!
//! let actions = vec![
//!     Action::ShowDetail(BarberId::Int(1)),
//!     Action::OpenUrl("tel:+55 11 3256-1020".to_string()),
//! ];
//! ```

use crate::domain::BarberId;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigates to the detail screen of a visible record.
    ShowDetail(BarberId),

    /// Shows the inline not-found message for an id that is not visible.
    ShowNotFound(BarberId),

    /// Hands a `tel:` or maps URL to the platform.
    OpenUrl(String),
}
