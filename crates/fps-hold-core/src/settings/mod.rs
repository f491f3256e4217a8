mod binding;
mod rate_limit;
#[allow(clippy::module_inception)]
mod settings;
mod target;

pub use {
    binding::{Binding, ModifierSet},
    rate_limit::RateLimit,
    settings::Settings,
    target::{GLOBAL_TARGET, Target},
};

/// Application targeted when nothing has been saved yet.
pub const DEFAULT_APP_NAME: &str = "NarakaBladepoint.exe";
/// Cap applied when nothing has been saved yet.
pub const DEFAULT_RATE_LIMIT: RateLimit = RateLimit::new(20);
/// Cap restored by "restore defaults".
pub const RESET_RATE_LIMIT: RateLimit = RateLimit::new(10);
