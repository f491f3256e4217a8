//! FPS Hold: cap a game's frame rate while a global hotkey is held.

mod app;
mod config;
mod error;
mod hotkey_registry;
mod privilege;
#[cfg(test)]
mod tests;
mod tray_action;
mod tray_icon_state;
mod tray_manager;
mod ui_command;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    hotkey_registry::{HotkeyRegistry, MainThreadRegistrar},
    tray_action::TrayAction,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
    ui_command::UiCommand,
};

use crate::config::Config;

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use fps_hold_core::{
    Monitor, MonitorEvent, MonitorSender, ProcessLimiter, TomlSettingsStore, monitor,
};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tray_icon::menu::MenuEvent;

const DEFAULT_LOG_FILTER: &str = "fps_hold=debug,fps_hold_core=debug";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let event_loop = EventLoopBuilder::<UiCommand>::with_user_event().build();
    let ui_proxy = event_loop.create_proxy();

    let menu_proxy = Mutex::new(ui_proxy.clone());
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(UiCommand::Menu(event));
    }));

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Owned by the main thread; the monitor reaches it through UiCommand::Hotkey.
    let mut hotkey_registry: Option<HotkeyRegistry> = None;
    let mut monitor_tx: Option<MonitorSender> = None;
    let mut store_path: Option<PathBuf> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                UiCommand::Menu(event) => {
                    let Some(action) = tray_manager.action_for(&event.id) else {
                        return;
                    };
                    info!(?action, "Tray menu action");

                    match action {
                        TrayAction::OpenSettings => open_settings_file(store_path.as_deref()),
                        TrayAction::Exit => match monitor_tx.take() {
                            // Wait for MonitorStopped so the limit is cleared first.
                            Some(tx) => {
                                if tx.send(MonitorEvent::Shutdown).is_err() {
                                    *control_flow = ControlFlow::ExitWithCode(0);
                                }
                            }
                            None => *control_flow = ControlFlow::ExitWithCode(0),
                        },
                        _ => {
                            let (Some(tx), Some(event)) = (&monitor_tx, action.monitor_event())
                            else {
                                return;
                            };
                            if tx.send(event).is_err() {
                                warn!(?action, "Monitor is gone, action dropped");
                            }
                        }
                    }
                }
                UiCommand::Refresh(snapshot) => {
                    if let Err(e) = tray_manager.update(&snapshot) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                UiCommand::Hotkey(request) => match hotkey_registry.as_mut() {
                    Some(registry) => registry.handle(request),
                    // Dropping the request fails the monitor's pending call.
                    None => warn!("Hotkey request without a registry"),
                },
                UiCommand::MonitorStopped => {
                    info!("Monitor stopped, exiting");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                if config.behaviour.require_elevation && !is_elevated() {
                    advise(&mut tray_manager, "Run as administrator to enable monitoring");
                    return;
                }

                let path = match Config::store_path() {
                    Ok(path) => path,
                    Err(e) => {
                        error!(error = ?e, "Failed to resolve settings store path");
                        advise(&mut tray_manager, "Settings location unavailable");
                        return;
                    }
                };

                // Register hotkeys on the main thread: tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery.
                match HotkeyRegistry::new() {
                    Ok(registry) => hotkey_registry = Some(registry),
                    Err(e) => {
                        error!(error = ?e, "Failed to create hotkey registry");
                        advise(&mut tray_manager, "Global hotkeys unavailable");
                        return;
                    }
                }

                let (events_tx, events_rx) = monitor::channel();
                if config.behaviour.start_monitoring_on_launch {
                    // Handled after the monitor has loaded its settings.
                    let _ = events_tx.send(MonitorEvent::Start);
                }

                spawn_monitor(
                    &config,
                    path.clone(),
                    events_tx.clone(),
                    events_rx,
                    ui_proxy.clone(),
                );

                store_path = Some(path);
                monitor_tx = Some(events_tx);
            }
            Event::LoopDestroyed => {
                let Some(registry) = hotkey_registry.as_mut() else {
                    return;
                };
                if let Err(e) = registry.unregister_all() {
                    error!(error = ?e, "Failed to unregister hotkey on exit");
                }
            }
            _ => {}
        }
    });
}

/// Start the runtime thread that owns the monitor.
///
/// The tray icon and hotkey registry stay on the main thread.
fn spawn_monitor(
    config: &Config,
    store_path: PathBuf,
    events_tx: MonitorSender,
    events_rx: monitor::MonitorReceiver,
    ui_proxy: EventLoopProxy<UiCommand>,
) {
    let limiter = ProcessLimiter::new(config.limiter.executable.clone());
    let store = TomlSettingsStore::new(store_path);
    let registrar = MainThreadRegistrar::new(ui_proxy.clone());

    std::thread::spawn(move || {
        let rt = match app::build_runtime() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                std::process::exit(1);
            }
        };

        rt.block_on(async move {
            let (monitor, status_rx) = Monitor::new(registrar, limiter, store, &events_tx);
            // Only the main thread keeps the queue open from here on.
            drop(events_tx);

            let app = App {
                monitor,
                events_rx,
                status_rx,
                ui_proxy,
            };
            app.run().await;
        });
    });
}

fn is_elevated() -> bool {
    match privilege::is_elevated() {
        Ok(elevated) => elevated,
        Err(e) => {
            warn!(error = ?e, "Elevation check failed, treating as not elevated");
            false
        }
    }
}

fn advise(tray_manager: &mut TrayManager, message: &str) {
    warn!(reason = message, "Monitoring disabled");
    if let Err(e) = tray_manager.show_advisory(message) {
        error!(error = ?e, "Failed to update tray icon");
    }
}

/// Open the settings store, or its folder before the first save.
fn open_settings_file(store_path: Option<&Path>) {
    let Some(path) = store_path else {
        warn!("Settings location unknown");
        return;
    };

    let target = if path.exists() {
        path
    } else {
        path.parent().unwrap_or(path)
    };

    match open::that(target) {
        Ok(()) => info!(path = ?target, "Opened settings"),
        Err(e) => warn!(path = ?target, error = ?e, "Failed to open settings"),
    }
}
