use crate::ActivityLog;

/// WHAT: Entries keep append order and the latest is the last one
/// WHY: The log is a time-ordered feed that is never reordered
#[test]
fn given_entries_when_appended_then_order_kept() {
    // Given: Empty log
    let mut log = ActivityLog::new();
    assert!(log.is_empty());

    // When: Appending three messages
    log.append("Settings loaded");
    log.append("Monitoring started");
    log.append("Hotkey CapsLock registered");

    // Then: Same order, latest is the last
    let messages: Vec<&str> = log.entries().iter().map(|e| e.message()).collect();
    assert_eq!(
        messages,
        ["Settings loaded", "Monitoring started", "Hotkey CapsLock registered"]
    );
    assert_eq!(log.len(), 3);
    assert_eq!(
        log.latest().map(|e| e.message()),
        Some("Hotkey CapsLock registered")
    );
}

/// WHAT: Rendered entries are prefixed with a HH:MM:SS timestamp
/// WHY: Consumers display the formatted line as-is
#[test]
fn given_entry_when_rendered_then_time_prefixed() {
    let mut log = ActivityLog::new();
    log.append("Monitoring stopped");

    let line = log.latest().map(ToString::to_string).unwrap_or_default();

    assert!(line.ends_with(": Monitoring stopped"));
    let (time, _) = line.split_at(8);
    assert_eq!(time.matches(':').count(), 2);
}
