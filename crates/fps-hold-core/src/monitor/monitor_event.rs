use crate::{hotkey::EdgeState, settings::Settings};

/// Everything that can change the monitor, in one queue.
///
/// UI actions and OS hotkey edges are both funnelled through this enum so
/// they are handled strictly one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Persist settings and arm the hotkey.
    Start,
    /// Clear the limit and disarm.
    Stop,
    /// Restore the default settings in memory (Idle only).
    ResetSettings,
    /// Re-read settings from the store (Idle only).
    ReloadSettings,
    /// Replace the in-memory settings (Idle only).
    UpdateSettings(Settings),
    /// Press or release reported for the registered chord.
    Edge(EdgeState),
    /// Process is exiting: release everything and stop the loop.
    Shutdown,
}
