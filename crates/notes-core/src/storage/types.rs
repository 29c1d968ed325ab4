//! Core data types for notes.
//!
//! These types represent the logical notes stored inside encrypted records.

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::{NotesError, Result};

/// Filename suffix of per-title records.
pub const RECORD_SUFFIX: &str = ".enc";

/// Timestamp layout used inside the aggregate log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Map a human title to a filesystem-safe file stem.
///
/// `/` and space become `_`. The mapping is deterministic; titles that differ
/// only in those characters share a file.
///
/// # Errors
///
/// Returns `NotesError::InvalidInput` for blank titles or titles containing a
/// NUL byte or backslash.
///
/// # Examples
///
/// ```
/// use notes_core::storage::sanitize_title;
///
/// assert_eq!(sanitize_title("work/todo list").unwrap(), "work_todo_list");
/// ```
pub fn sanitize_title(title: &str) -> Result<String> {
    if title.trim().is_empty() {
        return Err(NotesError::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }
    if title.contains('\0') || title.contains('\\') {
        return Err(NotesError::InvalidInput(
            "Title contains invalid characters".to_string(),
        ));
    }

    Ok(title.replace(['/', ' '], "_"))
}

/// One timestamped entry of the aggregate log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Append time (local, second precision). `None` for lines without a
    /// recognizable timestamp prefix.
    pub timestamp: Option<NaiveDateTime>,
    /// Entry text
    pub text: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(text: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self {
            timestamp: Some(now.with_nanosecond(0).unwrap_or(now)),
            text: text.into(),
        }
    }

    /// Parse one line of log plaintext.
    pub fn parse_line(line: &str) -> Self {
        let parsed = line
            .strip_prefix('[')
            .and_then(|rest| rest.split_once("] "))
            .and_then(|(stamp, text)| {
                NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
                    .ok()
                    .map(|ts| (ts, text))
            });

        match parsed {
            Some((ts, text)) => Self {
                timestamp: Some(ts),
                text: text.to_string(),
            },
            None => Self {
                timestamp: None,
                text: line.to_string(),
            },
        }
    }

    /// Serialize as a log line, including the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }

    /// Case-insensitive substring match against the whole line.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.to_string().to_lowercase().contains(term_lower)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(ts) => write!(f, "[{}] {}", ts.format(TIMESTAMP_FORMAT), self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A decrypted titled note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitledNote {
    /// Sanitized title (file stem)
    pub title: String,
    /// Note body
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sanitize_replaces_slash_and_space() {
        assert_eq!(sanitize_title("grocery").unwrap(), "grocery");
        assert_eq!(sanitize_title("a b/c").unwrap(), "a_b_c");
    }

    #[test]
    fn test_sanitize_accepted_collision() {
        assert_eq!(
            sanitize_title("a b").unwrap(),
            sanitize_title("a/b").unwrap()
        );
        assert_ne!(
            sanitize_title("a b").unwrap(),
            sanitize_title("a-b").unwrap()
        );
    }

    #[test]
    fn test_sanitize_rejects_invalid() {
        assert!(sanitize_title("").is_err());
        assert!(sanitize_title("   ").is_err());
        assert!(sanitize_title("a\0b").is_err());
        assert!(sanitize_title("a\\b").is_err());
    }

    #[test]
    fn test_log_entry_line_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(8, 5, 1)
            .unwrap();
        let entry = LogEntry {
            timestamp: Some(ts),
            text: "buy milk".to_string(),
        };

        assert_eq!(entry.to_line(), "[2024-03-09 08:05:01] buy milk\n");
        assert_eq!(LogEntry::parse_line("[2024-03-09 08:05:01] buy milk"), entry);
    }

    #[test]
    fn test_log_entry_without_timestamp() {
        let entry = LogEntry::parse_line("free-form line");
        assert_eq!(entry.timestamp, None);
        assert_eq!(entry.text, "free-form line");
        assert_eq!(entry.to_string(), "free-form line");

        let bad_stamp = LogEntry::parse_line("[not a date] text");
        assert_eq!(bad_stamp.timestamp, None);
        assert_eq!(bad_stamp.text, "[not a date] text");
    }

    #[test]
    fn test_log_entry_now_has_second_precision() {
        let entry = LogEntry::now("hello");
        let ts = entry.timestamp.unwrap();
        assert_eq!(ts.nanosecond(), 0);
        assert_eq!(LogEntry::parse_line(entry.to_line().trim_end()), entry);
    }

    #[test]
    fn test_log_entry_matches_case_insensitive() {
        let entry = LogEntry::parse_line("[2024-03-09 08:05:01] Buy MILK");
        assert!(entry.matches("milk"));
        assert!(entry.matches("2024-03"));
        assert!(!entry.matches("eggs"));
    }
}
