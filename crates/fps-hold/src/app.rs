use crate::{AppError, AppResult, UiCommand, hotkey_registry::MainThreadRegistrar};

use std::panic::Location;

use error_location::ErrorLocation;
use fps_hold_core::{
    Monitor, MonitorSnapshot, ProcessLimiter, TomlSettingsStore, monitor::MonitorReceiver,
};
use tao::event_loop::EventLoopProxy;
use tokio::{runtime::Runtime, sync::watch};
use tracing::{info, instrument, warn};

/// Monitor wired to the real registrar, limiter and store.
pub type AppMonitor = Monitor<MainThreadRegistrar, ProcessLimiter, TomlSettingsStore>;

/// Async half of the application.
///
/// Runs on the runtime thread. Snapshots go back to the main thread via
/// `ui_proxy` because `TrayIcon` is `!Send` and must remain on the UI thread.
pub struct App {
    pub(crate) monitor: AppMonitor,
    pub(crate) events_rx: MonitorReceiver,
    pub(crate) status_rx: watch::Receiver<MonitorSnapshot>,
    pub(crate) ui_proxy: EventLoopProxy<UiCommand>,
}

impl App {
    /// Drive the monitor until it shuts down, mirroring its status to the tray.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) {
        info!("FPS Hold starting");

        let App {
            monitor,
            events_rx,
            mut status_rx,
            ui_proxy,
        } = self;

        // The watch sender lives inside the monitor, so the forwarder ends
        // once `Monitor::run` returns and drops it.
        let forward_status = async {
            loop {
                let snapshot = status_rx.borrow_and_update().clone();
                if ui_proxy.send_event(UiCommand::Refresh(snapshot)).is_err() {
                    warn!("Event loop closed, status forwarding stopped");
                    break;
                }
                if status_rx.changed().await.is_err() {
                    break;
                }
            }
        };

        tokio::join!(monitor.run(events_rx), forward_status);

        let _ = ui_proxy.send_event(UiCommand::MonitorStopped);
        info!("FPS Hold shut down successfully");
    }
}

/// Multi-threaded runtime hosting the monitor.
#[track_caller]
pub(crate) fn build_runtime() -> AppResult<Runtime> {
    Runtime::new().map_err(|e| AppError::RuntimeError {
        reason: format!("Failed to create tokio runtime: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
