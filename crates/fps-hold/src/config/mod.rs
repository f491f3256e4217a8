mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod limiter_config;

pub(crate) use {behaviour_config::BehaviourConfig, config::Config, limiter_config::LimiterConfig};

use std::path::PathBuf;

pub(crate) const DEFAULT_REQUIRE_ELEVATION: bool = true;
pub(crate) const DEFAULT_START_ON_LAUNCH: bool = false;

#[cfg(target_os = "windows")]
pub(crate) const LIMITER_FILE_NAME: &str = "rtss-cli.exe";
#[cfg(not(target_os = "windows"))]
pub(crate) const LIMITER_FILE_NAME: &str = "rtss-cli";

pub(crate) fn default_require_elevation() -> bool {
    DEFAULT_REQUIRE_ELEVATION
}

pub(crate) fn default_start_on_launch() -> bool {
    DEFAULT_START_ON_LAUNCH
}

/// `resources/rtss-cli[.exe]` next to our executable, or a bare name
/// resolved through `PATH` when the executable location is unknown.
pub(crate) fn default_limiter_executable() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
        .map(|dir| dir.join(LIMITER_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LIMITER_FILE_NAME))
}
