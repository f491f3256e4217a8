use crate::hotkey_registry::HotkeyRequest;

use fps_hold_core::MonitorSnapshot;
use tray_icon::menu::MenuEvent;

/// Commands delivered to the main UI thread through the `tao` event loop.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`) and the
/// `GlobalHotKeyManager`, so menu clicks, status refreshes, hotkey requests
/// and process lifecycle events all flow through this enum.
pub enum UiCommand {
    /// A tray menu item was clicked.
    Menu(MenuEvent),
    /// The monitor published a new snapshot.
    Refresh(MonitorSnapshot),
    /// The monitor needs the hotkey registry.
    Hotkey(HotkeyRequest),
    /// The monitor loop has returned. The main thread will exit the event loop.
    MonitorStopped,
}
