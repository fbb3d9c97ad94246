use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Update monitoring errors with source location tracking.
///
/// None of these escape [`crate::UpdateMonitor`]; they are logged and folded
/// into the tray state.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The update-listing tool could not be started or its output not collected.
    #[error("Failed to run update check '{program}': {source} {location}")]
    CheckLaunchFailed {
        /// Program that was invoked.
        program: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The update-listing tool did not finish in time and was killed.
    #[error("Update check '{program}' timed out after {timeout:?} {location}")]
    CheckTimedOut {
        /// Program that was invoked.
        program: String,
        /// Timeout that elapsed.
        timeout: Duration,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The terminal running the install command could not be started.
    #[error("Failed to launch terminal '{terminal}': {source} {location}")]
    InstallLaunchFailed {
        /// Terminal program that was requested.
        terminal: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MonitorError`].
pub type Result<T> = std::result::Result<T, MonitorError>;
