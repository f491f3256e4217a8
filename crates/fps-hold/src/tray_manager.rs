//! System tray icon with state-based updates.
//!
//! Stands in for a settings window: the icon colour follows the monitor
//! phase, the tooltip shows the settings and the latest activity, and the
//! context menu drives the monitor.

use crate::{AppError, AppResult, TrayAction, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use fps_hold_core::{MonitorPhase, MonitorSnapshot};
use tracing::{debug, info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;
const TOOLTIP_TITLE: &str = "FPS Hold";
// Windows truncates longer tray tooltips.
const TOOLTIP_MAX_CHARS: usize = 127;

/// Which monitor-facing menu items can be clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAvailability {
    /// "Start monitoring".
    pub start: bool,
    /// "Stop monitoring".
    pub stop: bool,
    /// "Restore defaults" and "Reload settings".
    pub edit: bool,
}

impl MenuAvailability {
    /// Settings can only change while idle; start needs complete settings.
    pub fn for_snapshot(snapshot: &MonitorSnapshot) -> Self {
        let idle = snapshot.phase == MonitorPhase::Idle;

        Self {
            start: idle && snapshot.settings.is_complete(),
            stop: !idle,
            edit: idle,
        }
    }

    /// Nothing but "Open settings file" and "Exit".
    pub fn none() -> Self {
        Self {
            start: false,
            stop: false,
            edit: false,
        }
    }
}

/// Tooltip text for `snapshot`, capped to what the shell displays.
pub fn tooltip(snapshot: &MonitorSnapshot) -> String {
    let state = TrayIconState::from(snapshot.phase);
    let mut text = format!("{} - {}\n{}", TOOLTIP_TITLE, state.label(), snapshot.settings);

    if let Some(hold) = snapshot.last_hold {
        text.push_str(&format!("\nLast hold: {} ms", hold.as_millis()));
    }
    if let Some(line) = &snapshot.latest_log {
        text.push('\n');
        text.push_str(line);
    }

    text.chars().take(TOOLTIP_MAX_CHARS).collect()
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    start_item: MenuItem,
    stop_item: MenuItem,
    reset_item: MenuItem,
    reload_item: MenuItem,
    open_settings_id: MenuId,
    exit_id: MenuId,
    state: TrayIconState,
}

impl TrayManager {
    /// Create the tray icon. Monitor actions stay disabled until the first
    /// snapshot arrives.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let start_item = MenuItem::new("Start monitoring", false, None);
        let stop_item = MenuItem::new("Stop monitoring", false, None);
        let reset_item = MenuItem::new("Restore defaults", false, None);
        let reload_item = MenuItem::new("Reload settings", false, None);
        let open_settings_item = MenuItem::new("Open settings file", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let separator = PredefinedMenuItem::separator();
        let second_separator = PredefinedMenuItem::separator();

        menu.append_items(&[
            &start_item,
            &stop_item,
            &separator,
            &reset_item,
            &reload_item,
            &open_settings_item,
            &second_separator,
            &exit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let state = TrayIconState::Idle;
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(format!("{} - Starting", TOOLTIP_TITLE))
            .with_menu(Box::new(menu))
            .with_icon(Self::render_icon(state)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            open_settings_id: open_settings_item.id().clone(),
            exit_id: exit_item.id().clone(),
            start_item,
            stop_item,
            reset_item,
            reload_item,
            state,
        })
    }

    /// Reflect a monitor snapshot: icon, tooltip and menu availability.
    #[track_caller]
    #[instrument(skip_all, fields(phase = ?snapshot.phase))]
    pub fn update(&mut self, snapshot: &MonitorSnapshot) -> AppResult<()> {
        self.set_state(TrayIconState::from(snapshot.phase))?;
        self.set_tooltip(&tooltip(snapshot))?;
        self.set_availability(MenuAvailability::for_snapshot(snapshot));

        Ok(())
    }

    /// Put the tray in the disabled state with `message` as explanation.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show_advisory(&mut self, message: &str) -> AppResult<()> {
        self.set_state(TrayIconState::Disabled)?;
        self.set_tooltip(&format!("{} - {}", TOOLTIP_TITLE, message))?;
        self.set_availability(MenuAvailability::none());

        Ok(())
    }

    /// Menu entry behind a clicked item id.
    pub fn action_for(&self, id: &MenuId) -> Option<TrayAction> {
        let action = if id == self.start_item.id() {
            TrayAction::Start
        } else if id == self.stop_item.id() {
            TrayAction::Stop
        } else if id == self.reset_item.id() {
            TrayAction::Reset
        } else if id == self.reload_item.id() {
            TrayAction::Reload
        } else if *id == self.open_settings_id {
            TrayAction::OpenSettings
        } else if *id == self.exit_id {
            TrayAction::Exit
        } else {
            return None;
        };

        Some(action)
    }

    fn set_availability(&self, availability: MenuAvailability) {
        self.start_item.set_enabled(availability.start);
        self.stop_item.set_enabled(availability.stop);
        self.reset_item.set_enabled(availability.edit);
        self.reload_item.set_enabled(availability.edit);
    }

    #[track_caller]
    fn set_state(&mut self, state: TrayIconState) -> AppResult<()> {
        if state == self.state {
            return Ok(());
        }

        self.tray_icon
            .set_icon(Some(Self::render_icon(state)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(from = ?self.state, to = ?state, "Tray icon state changed");
        self.state = state;

        Ok(())
    }

    #[track_caller]
    fn set_tooltip(&self, text: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(text))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Icons are drawn in memory so they work regardless of install location.
    #[track_caller]
    fn render_icon(state: TrayIconState) -> AppResult<Icon> {
        Icon::from_rgba(state.rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE).map_err(|e| {
            AppError::TrayError {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
