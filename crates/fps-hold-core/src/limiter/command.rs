use crate::settings::{RateLimit, Target};

use std::fmt;

/// Instruction setting the global frame rate limit.
pub const GLOBAL_LIMIT_SET: &str = "limit:set";
/// Instruction setting a per-application profile property.
pub const PROPERTY_SET: &str = "property:set";
/// Profile property holding the frame rate limit.
pub const FRAMERATE_LIMIT_PROPERTY: &str = "FramerateLimit";

/// One limiter invocation, as the argument vector handed to the executable.
///
/// Identical (target, rate) pairs always produce identical commands, so
/// repeating one is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimiterCommand {
    args: Vec<String>,
}

impl LimiterCommand {
    /// Cap `target` at `rate` frames per second.
    pub fn set(target: &Target, rate: RateLimit) -> Self {
        let args = match target {
            Target::Global => vec![GLOBAL_LIMIT_SET.to_string(), rate.to_string()],
            Target::Application(app) => vec![
                PROPERTY_SET.to_string(),
                app.clone(),
                FRAMERATE_LIMIT_PROPERTY.to_string(),
                rate.to_string(),
            ],
        };

        Self { args }
    }

    /// Remove the cap on `target` (rate 0, same scoping).
    pub fn clear(target: &Target) -> Self {
        Self::set(target, RateLimit::UNLIMITED)
    }

    /// Argument vector, excluding the executable itself.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for LimiterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}
