use crate::{monitor::MonitorPhase, settings::Settings};

use std::time::Duration;

/// Read-only view of the monitor, published after every handled event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorSnapshot {
    /// Current phase.
    pub phase: MonitorPhase,
    /// Settings in effect.
    pub settings: Settings,
    /// Duration of the last completed hold.
    pub last_hold: Option<Duration>,
    /// Most recent activity log line, formatted with its timestamp.
    pub latest_log: Option<String>,
}
