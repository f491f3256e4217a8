use fps_hold_core::MonitorEvent;

/// Tray menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// "Start monitoring".
    Start,
    /// "Stop monitoring".
    Stop,
    /// "Restore defaults".
    Reset,
    /// "Reload settings".
    Reload,
    /// "Open settings file".
    OpenSettings,
    /// "Exit".
    Exit,
}

impl TrayAction {
    /// Monitor event queued for this action.
    ///
    /// `OpenSettings` is served by the main thread and never reaches the
    /// monitor.
    pub fn monitor_event(self) -> Option<MonitorEvent> {
        match self {
            TrayAction::Start => Some(MonitorEvent::Start),
            TrayAction::Stop => Some(MonitorEvent::Stop),
            TrayAction::Reset => Some(MonitorEvent::ResetSettings),
            TrayAction::Reload => Some(MonitorEvent::ReloadSettings),
            TrayAction::Exit => Some(MonitorEvent::Shutdown),
            TrayAction::OpenSettings => None,
        }
    }
}
