use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Frames-per-second cap applied while the hotkey is held.
///
/// Zero means "no limit". The decimal string form only exists in the
/// settings file and on the limiter command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateLimit(u32);

impl RateLimit {
    /// The "uncapped" value used to clear a limit.
    pub const UNLIMITED: RateLimit = RateLimit(0);

    /// Wrap a raw frames-per-second value.
    pub const fn new(fps: u32) -> Self {
        Self(fps)
    }

    /// Raw frames-per-second value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse an optional rate where the empty string means "unset".
    #[track_caller]
    pub fn parse_optional(text: &str) -> CoreResult<Option<Self>> {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            text.parse().map(Some)
        }
    }
}

impl FromStr for RateLimit {
    type Err = CoreError;

    #[track_caller]
    fn from_str(text: &str) -> CoreResult<Self> {
        text.trim()
            .parse::<u32>()
            .map(RateLimit)
            .map_err(|_| CoreError::InvalidRateLimit {
                value: text.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
