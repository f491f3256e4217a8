use tokio::time::Instant;
use uuid::Uuid;

/// Open interval between a Pressed edge and its matching Released edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressWindow {
    /// When the chord went down.
    pub started_at: Instant,
    /// Unique id for log correlation of one physical hold.
    pub hold_id: Uuid,
}

impl PressWindow {
    /// Window starting now.
    pub fn open() -> Self {
        Self {
            started_at: Instant::now(),
            hold_id: Uuid::new_v4(),
        }
    }
}

/// Monitor state. `Idle` is initial; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    /// Not monitoring.
    #[default]
    Idle,
    /// Hotkey registered, waiting for a press.
    Armed,
    /// Hotkey registered and currently held down.
    Held {
        /// The open press window.
        window: PressWindow,
    },
}

impl MonitorState {
    /// Coarse phase, without the window payload.
    pub fn phase(&self) -> MonitorPhase {
        match self {
            MonitorState::Idle => MonitorPhase::Idle,
            MonitorState::Armed => MonitorPhase::Armed,
            MonitorState::Held { .. } => MonitorPhase::Held,
        }
    }

    /// True while the hotkey is registered.
    pub fn is_monitoring(&self) -> bool {
        !matches!(self, MonitorState::Idle)
    }
}

/// Phase published to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorPhase {
    /// Not monitoring.
    #[default]
    Idle,
    /// Waiting for a press.
    Armed,
    /// Limit currently applied.
    Held,
}
