//! Device location for map screens.
//!
//! - `provider`: [`LocationProvider`] trait and a fixed-answer implementation
//! - `state`: [`LocationState`], the coordinates/error/loading holder

pub mod provider;
pub mod state;

pub use provider::{LocationProvider, PermissionStatus, StaticLocationProvider};
pub use state::{
    LocationState, PERMISSION_DENIED_MESSAGE, PERMISSION_REQUEST_FAILED_MESSAGE,
    POSITION_FAILED_MESSAGE,
};
