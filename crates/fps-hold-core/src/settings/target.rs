use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Sentinel that scopes the limit to every application.
pub const GLOBAL_TARGET: &str = "Global";

/// Where the frame rate limit applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// System-wide limit.
    Global,
    /// Limit a single process, named by its executable (e.g. `game.exe`).
    Application(String),
}

impl Target {
    /// Parse an optional target where the empty string means "unset".
    pub fn parse_optional(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for Target {
    type Err = CoreError;

    #[track_caller]
    fn from_str(text: &str) -> CoreResult<Self> {
        let text = text.trim();

        if text.is_empty() {
            return Err(CoreError::InvalidTarget {
                reason: "application name is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // The sentinel is matched exactly; "global" is a (strange) app name.
        if text == GLOBAL_TARGET {
            Ok(Target::Global)
        } else {
            Ok(Target::Application(text.to_string()))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Global => f.write_str(GLOBAL_TARGET),
            Target::Application(name) => f.write_str(name),
        }
    }
}
