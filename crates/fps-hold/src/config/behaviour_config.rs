use crate::config::{default_require_elevation, default_start_on_launch};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Refuse to run unless elevated (the limiter needs admin rights).
    #[serde(default = "default_require_elevation")]
    pub require_elevation: bool,

    /// Start monitoring as soon as settings are loaded.
    #[serde(default = "default_start_on_launch")]
    pub start_monitoring_on_launch: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            require_elevation: default_require_elevation(),
            start_monitoring_on_launch: default_start_on_launch(),
        }
    }
}
