use crate::config::default_limiter_executable;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// External limiter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// Path to the limiter command-line client (`rtss-cli`).
    #[serde(default = "default_limiter_executable")]
    pub executable: PathBuf,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            executable: default_limiter_executable(),
        }
    }
}
