use crate::settings::{
    Binding, DEFAULT_APP_NAME, DEFAULT_RATE_LIMIT, RESET_RATE_LIMIT, RateLimit, Target,
};

use std::fmt;

/// The user-facing triple: which chord, which target, which cap.
///
/// Each field is optional because the user may clear it; monitoring only
/// starts once all three are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Global key chord to hold.
    pub binding: Option<Binding>,
    /// Application (or the global sentinel) the cap applies to.
    pub target: Option<Target>,
    /// Frames-per-second cap applied while held.
    pub rate: Option<RateLimit>,
}

impl Settings {
    /// True when all three fields are set.
    pub fn is_complete(&self) -> bool {
        self.binding.is_some() && self.target.is_some() && self.rate.is_some()
    }

    /// Defaults restored by the "restore defaults" action.
    ///
    /// Differs from [`Settings::default`] (the load-time default) and never
    /// touches persisted state.
    pub fn reset_defaults() -> Self {
        Self {
            binding: Some(Binding::default()),
            target: Some(Target::Global),
            rate: Some(RESET_RATE_LIMIT),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binding: Some(Binding::default()),
            target: Some(Target::Application(DEFAULT_APP_NAME.to_string())),
            rate: Some(DEFAULT_RATE_LIMIT),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), ToString::to_string)
        }

        write!(
            f,
            "hotkey: {}, app: {}, frame limit: {}",
            or_unset(&self.binding),
            or_unset(&self.target),
            or_unset(&self.rate)
        )
    }
}
