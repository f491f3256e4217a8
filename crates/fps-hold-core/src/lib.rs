//! fps-hold Core Library
//!
//! Press-and-hold frame rate limiting: while a global hotkey is held, an
//! external limiter caps the frame rate of a target application (or every
//! application); on release the cap is removed.
//!
//! The [`Monitor`] is the only stateful piece. It is generic over its three
//! collaborators ([`HotkeyRegistrar`], [`LimiterInvoker`], [`SettingsStore`])
//! and is driven by a single event queue.
//!
//! # Example
//!
//! ```no_run
//! use fps_hold_core::{
//!     HotkeyRegistrar, Monitor, MonitorEvent, ProcessLimiter, TomlSettingsStore, monitor,
//! };
//!
//! async fn serve<R: HotkeyRegistrar>(registrar: R) {
//!     let (events_tx, events_rx) = monitor::channel();
//!     let store = TomlSettingsStore::new("store.toml");
//!     let limiter = ProcessLimiter::new("rtss-cli.exe");
//!
//!     let (monitor, _status_rx) = Monitor::new(registrar, limiter, store, &events_tx);
//!     let _ = events_tx.send(MonitorEvent::Start);
//!     monitor.run(events_rx).await;
//! }
//! ```

mod activity_log;
mod error;
pub mod hotkey;
pub mod limiter;
pub mod monitor;
pub mod settings;
pub mod store;

pub use {
    activity_log::{ActivityLog, LogEntry},
    error::{CoreError, Result as CoreResult},
    hotkey::{EdgeCallback, EdgeState, HotkeyRegistrar},
    limiter::{CapturedOutput, LimiterCommand, LimiterInvoker, ProcessLimiter},
    monitor::{
        Monitor, MonitorEvent, MonitorPhase, MonitorSender, MonitorSnapshot, MonitorState,
    },
    settings::{Binding, ModifierSet, RateLimit, Settings, Target},
    store::{STORE_FILE_NAME, SettingsStore, TomlSettingsStore},
};

#[cfg(test)]
mod tests;
