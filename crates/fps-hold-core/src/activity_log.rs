//! Append-only, time-ordered feed of human-readable events.

use std::fmt;

use chrono::{DateTime, Local};
use tracing::info;

/// One timestamped activity line. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    message: String,
}

impl LogEntry {
    /// Local wall-clock time the entry was appended.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Message text without the timestamp.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Unbounded activity log; consumers decide how much of it to show.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `message` with the current local time and append it.
    pub fn append(&mut self, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        };

        info!(target: "fps_hold_core::activity", "{}", entry.message);

        self.entries.push(entry);
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries appended so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was appended yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
