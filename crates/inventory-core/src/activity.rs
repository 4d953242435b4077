//! Timestamped record of accepted stock additions.

use std::fmt;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single activity record.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When the activity happened (local time)
    pub timestamp: DateTime<Local>,

    /// What happened, e.g. "Added 10 of apple"
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Append-only sequence of activity records, in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current local time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_preserves_order() {
        let mut log = ActivityLog::new();
        log.record("Added 1 of apple");
        log.record("Added 2 of pear");

        let messages: Vec<_> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Added 1 of apple", "Added 2 of pear"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_display_format() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            message: "Added 10 of apple".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "2024-03-09 14:05:07.000000: Added 10 of apple"
        );
    }
}
