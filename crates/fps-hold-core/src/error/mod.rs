use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the hold-to-limit core, with source location tracking.
///
/// None of these terminate the process. The monitor converts every one of
/// them into an activity log entry and, where relevant, a forced return to
/// `Idle`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings store could not be read, parsed or written.
    #[error("Settings store error: {reason} {location}")]
    ConfigIo {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Key chord is malformed or names a key the OS layer does not know.
    #[error("Invalid hotkey '{binding}': {reason} {location}")]
    InvalidBinding {
        /// The offending chord text.
        binding: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Target application name is empty.
    #[error("Invalid target application: {reason} {location}")]
    InvalidTarget {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Frame rate value is not a non-negative integer.
    #[error("Invalid frame rate limit '{value}' {location}")]
    InvalidRateLimit {
        /// The offending text.
        value: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Combination is already owned by this or another process.
    #[error("Hotkey '{binding}' could not be registered: {reason} {location}")]
    HotkeyConflict {
        /// The chord that failed to register.
        binding: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Combination could not be released.
    #[error("Hotkey '{binding}' could not be unregistered: {reason} {location}")]
    HotkeyUnregisterFailed {
        /// The chord that failed to unregister.
        binding: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The OS-side hotkey registry is no longer reachable.
    #[error("Hotkey registry unavailable: {reason} {location}")]
    RegistrarUnavailable {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Limiter executable could not be started.
    #[error("Failed to start {program:?}: {source} {location}")]
    ProcessSpawn {
        /// Executable that was launched.
        program: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Limiter was started but waiting for it or reading its output failed.
    #[error("Limiter process IO error: {source} {location}")]
    ProcessIo {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
