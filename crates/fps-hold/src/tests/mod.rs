mod hotkey;
mod tray;
