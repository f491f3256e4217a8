//! The hold-to-limit state machine and its event queue.

#[allow(clippy::module_inception)]
mod monitor;
mod monitor_event;
mod monitor_state;
mod snapshot;

pub use {
    monitor::Monitor,
    monitor_event::MonitorEvent,
    monitor_state::{MonitorPhase, MonitorState, PressWindow},
    snapshot::MonitorSnapshot,
};

use tokio::sync::mpsc;

/// Sending half of the monitor queue, handed to the UI and hotkey layers.
pub type MonitorSender = mpsc::UnboundedSender<MonitorEvent>;
/// Receiving half of the monitor queue, consumed only by [`Monitor::run`].
pub type MonitorReceiver = mpsc::UnboundedReceiver<MonitorEvent>;

/// Create the monitor's event queue.
///
/// Unbounded so OS callbacks and the UI thread never block or drop an edge;
/// a dropped `Released` would leave the limit applied.
pub fn channel() -> (MonitorSender, MonitorReceiver) {
    mpsc::unbounded_channel()
}
