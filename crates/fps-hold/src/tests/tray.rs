use crate::{TrayAction, TrayIconState, tray_manager::{MenuAvailability, tooltip}};

use std::time::Duration;

use fps_hold_core::{MonitorEvent, MonitorPhase, MonitorSnapshot, Settings};

fn snapshot(phase: MonitorPhase) -> MonitorSnapshot {
    MonitorSnapshot {
        phase,
        settings: Settings::reset_defaults(),
        last_hold: None,
        latest_log: None,
    }
}

/// WHAT: Icon state follows the monitor phase
/// WHY: The icon is the only always-visible status indicator
#[test]
fn given_each_phase_when_mapped_then_matching_icon_state() {
    // Given/When/Then: One icon state per phase
    assert_eq!(TrayIconState::from(MonitorPhase::Idle), TrayIconState::Idle);
    assert_eq!(TrayIconState::from(MonitorPhase::Armed), TrayIconState::Armed);
    assert_eq!(TrayIconState::from(MonitorPhase::Held), TrayIconState::Held);
}

/// WHAT: Generated icons are an opaque disc on a transparent square
/// WHY: Icon::from_rgba needs exactly width*height*4 bytes
#[test]
fn given_icon_state_when_rendered_then_disc_pixels() {
    // Given: A 32px Held icon
    let size = 32;

    // When: Rendering
    let pixels = TrayIconState::Held.rgba(size);

    // Then: Right length, transparent corner, opaque centre in the state colour
    assert_eq!(pixels.len(), (size * size * 4) as usize);
    assert_eq!(pixels[3], 0);
    let centre = ((size / 2 * size + size / 2) * 4) as usize;
    let [r, g, b] = TrayIconState::Held.colour();
    assert_eq!(&pixels[centre..centre + 4], &[r, g, b, u8::MAX]);
}

/// WHAT: Settings actions are only available while idle
/// WHY: Inputs are locked while monitoring
#[test]
fn given_monitoring_when_availability_computed_then_only_stop_enabled() {
    // Given: Idle and Held snapshots
    let idle = MenuAvailability::for_snapshot(&snapshot(MonitorPhase::Idle));
    let held = MenuAvailability::for_snapshot(&snapshot(MonitorPhase::Held));

    // Then: Idle can start and edit; Held can only stop
    assert_eq!(
        idle,
        MenuAvailability {
            start: true,
            stop: false,
            edit: true
        }
    );
    assert_eq!(
        held,
        MenuAvailability {
            start: false,
            stop: true,
            edit: false
        }
    );
}

/// WHAT: Start stays disabled with incomplete settings
/// WHY: The monitor ignores start without a hotkey, target and rate
#[test]
fn given_incomplete_settings_when_availability_computed_then_start_disabled() {
    // Given: Idle with no hotkey
    let mut idle = snapshot(MonitorPhase::Idle);
    idle.settings.binding = None;

    // When: Computing availability
    let availability = MenuAvailability::for_snapshot(&idle);

    // Then: Cannot start, can still edit
    assert!(!availability.start);
    assert!(availability.edit);
}

/// WHAT: Tooltip shows phase, settings, last hold and latest activity
/// WHY: The tooltip replaces the settings window's status labels
#[test]
fn given_completed_hold_when_tooltip_built_then_all_parts_present() {
    // Given: Armed after a 512 ms hold
    let mut armed = snapshot(MonitorPhase::Armed);
    armed.last_hold = Some(Duration::from_millis(512));
    armed.latest_log = Some("12:00:01: Hold duration: 512 ms".to_string());

    // When: Building the tooltip
    let text = tooltip(&armed);

    // Then: Every part is there
    assert!(text.starts_with("FPS Hold - Monitoring"));
    assert!(text.contains("hotkey: CapsLock, app: Global, frame limit: 10"));
    assert!(text.contains("Last hold: 512 ms"));
    assert!(text.contains("12:00:01: Hold duration: 512 ms"));
}

/// WHAT: Long tooltips are capped
/// WHY: The shell rejects or truncates tooltips over 127 characters
#[test]
fn given_long_log_line_when_tooltip_built_then_capped() {
    // Given: A very long log line
    let mut idle = snapshot(MonitorPhase::Idle);
    idle.latest_log = Some("x".repeat(500));

    // When: Building the tooltip
    let text = tooltip(&idle);

    // Then: At most 127 characters
    assert_eq!(text.chars().count(), 127);
}

/// WHAT: Every menu action but "Open settings file" reaches the monitor
/// WHY: Exit must clear the limit through the monitor's shutdown path
#[test]
fn given_tray_actions_when_mapped_then_monitor_events() {
    // Given/When/Then
    assert_eq!(TrayAction::Start.monitor_event(), Some(MonitorEvent::Start));
    assert_eq!(TrayAction::Stop.monitor_event(), Some(MonitorEvent::Stop));
    assert_eq!(
        TrayAction::Reset.monitor_event(),
        Some(MonitorEvent::ResetSettings)
    );
    assert_eq!(
        TrayAction::Reload.monitor_event(),
        Some(MonitorEvent::ReloadSettings)
    );
    assert_eq!(TrayAction::Exit.monitor_event(), Some(MonitorEvent::Shutdown));
    assert_eq!(TrayAction::OpenSettings.monitor_event(), None);
}
