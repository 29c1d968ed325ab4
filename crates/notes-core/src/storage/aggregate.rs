//! Aggregate mode: every note in one encrypted, timestamped log.
//!
//! The whole log is a single record under one password. Appending decrypts
//! the full log, adds a line, and re-encrypts everything with a new salt and
//! nonce.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::config::StoreConfig;
use crate::error::{NotesError, Result};
use crate::storage::sealed::{read_sealed_text, write_sealed};
use crate::storage::traits::SealedRecord;
use crate::storage::types::LogEntry;

/// The aggregate notes log.
#[derive(Debug, Clone)]
pub struct NoteLog {
    path: PathBuf,
}

impl NoteLog {
    /// Log at the configured location.
    pub fn new(config: &StoreConfig) -> Self {
        Self::at(config.log_path())
    }

    /// Log at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the log file has been created.
    pub fn is_initialized(&self) -> bool {
        self.exists()
    }

    /// Create an empty log encrypted under `password`.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::AlreadyExists` if the log is already initialized.
    pub fn initialize(&self, password: &str) -> Result<()> {
        if self.is_initialized() {
            return Err(NotesError::AlreadyExists(self.path.clone()));
        }
        self.write("", password)?;
        tracing::info!(path = %self.path.display(), "initialized notes log");
        Ok(())
    }

    /// Append a timestamped entry.
    ///
    /// An uninitialized log is created by its first append. Otherwise the
    /// existing log must decrypt with `password` first.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::InvalidInput` for empty or multi-line text.
    pub fn append(&self, text: &str, password: &str) -> Result<LogEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotesError::InvalidInput(
                "Note cannot be empty".to_string(),
            ));
        }
        if text.contains(['\n', '\r']) {
            return Err(NotesError::InvalidInput(
                "Log notes must be a single line".to_string(),
            ));
        }

        let mut content = if self.is_initialized() {
            Zeroizing::new(self.read(password)?)
        } else {
            Zeroizing::new(String::new())
        };

        let entry = LogEntry::now(text);
        content.push_str(&entry.to_line());
        self.write(&content, password)?;

        tracing::debug!(path = %self.path.display(), "appended log entry");
        Ok(entry)
    }

    /// Decrypt the whole log.
    pub fn load(&self, password: &str) -> Result<String> {
        self.read(password)
    }

    /// All entries in append order.
    pub fn entries(&self, password: &str) -> Result<Vec<LogEntry>> {
        let content = Zeroizing::new(self.read(password)?);
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(LogEntry::parse_line)
            .collect())
    }

    /// Entries whose line contains `term`, ignoring case.
    pub fn find(&self, term: &str, password: &str) -> Result<Vec<LogEntry>> {
        let term_lower = term.to_lowercase();
        Ok(self
            .entries(password)?
            .into_iter()
            .filter(|entry| entry.matches(&term_lower))
            .collect())
    }

    /// Remove the log after proving the password opens it.
    pub fn delete(&self, password: &str) -> Result<()> {
        drop(Zeroizing::new(self.read(password)?));
        fs::remove_file(&self.path)
            .map_err(|e| NotesError::io(format!("remove {}", self.path.display()), e))?;
        tracing::info!(path = %self.path.display(), "deleted notes log");
        Ok(())
    }
}

impl SealedRecord for NoteLog {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self, password: &str) -> Result<String> {
        if !self.exists() {
            return Err(NotesError::NotInitialized(self.path.clone()));
        }
        read_sealed_text(&self.path, password)
    }

    fn write(&self, content: &str, password: &str) -> Result<()> {
        write_sealed(&self.path, content.as_bytes(), password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn temp_log() -> (TempDir, NoteLog) {
        let dir = tempdir().unwrap();
        let log = NoteLog::at(dir.path().join("notes.enc"));
        (dir, log)
    }

    #[test]
    fn test_initialize_transitions_state() {
        let (_dir, log) = temp_log();
        assert!(!log.is_initialized());

        log.initialize("pw1").unwrap();
        assert!(log.is_initialized());
        assert_eq!(log.load("pw1").unwrap(), "");
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_dir, log) = temp_log();
        log.initialize("pw1").unwrap();

        let result = log.initialize("pw1");
        assert!(matches!(result, Err(NotesError::AlreadyExists(_))));
    }

    #[test]
    fn test_first_append_creates_log() {
        let (_dir, log) = temp_log();

        let entry = log.append("first note", "pw1").unwrap();
        assert!(log.is_initialized());
        assert_eq!(entry.text, "first note");

        let entries = log.entries("pw1").unwrap();
        assert_eq!(entries, vec![entry]);
    }

    #[test]
    fn test_append_keeps_order() {
        let (_dir, log) = temp_log();
        log.append("one", "pw1").unwrap();
        log.append("two", "pw1").unwrap();
        log.append("three", "pw1").unwrap();

        let texts: Vec<String> = log
            .entries("pw1")
            .unwrap()
            .into_iter()
            .map(|entry| entry.text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_append_wrong_password_leaves_log_untouched() {
        let (_dir, log) = temp_log();
        log.append("one", "pw1").unwrap();
        let before = fs::read(log.path()).unwrap();

        let result = log.append("two", "wrong");
        assert!(matches!(result, Err(NotesError::Authentication)));
        assert_eq!(fs::read(log.path()).unwrap(), before);
    }

    #[test]
    fn test_append_rewrites_with_fresh_bytes() {
        let (_dir, log) = temp_log();
        log.initialize("pw1").unwrap();
        let before = fs::read(log.path()).unwrap();

        log.append("note", "pw1").unwrap();
        let after = fs::read(log.path()).unwrap();
        assert_ne!(before[..32], after[..32]);
    }

    #[test]
    fn test_append_rejects_bad_text() {
        let (_dir, log) = temp_log();
        assert!(matches!(
            log.append("   ", "pw1"),
            Err(NotesError::InvalidInput(_))
        ));
        assert!(matches!(
            log.append("line one\nline two", "pw1"),
            Err(NotesError::InvalidInput(_))
        ));
        assert!(!log.is_initialized());
    }

    #[test]
    fn test_load_uninitialized() {
        let (_dir, log) = temp_log();
        let result = log.load("pw1");
        assert!(matches!(result, Err(NotesError::NotInitialized(_))));
    }

    #[test]
    fn test_find_case_insensitive() {
        let (_dir, log) = temp_log();
        log.append("Buy MILK", "pw1").unwrap();
        log.append("call mom", "pw1").unwrap();

        let found = log.find("milk", "pw1").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Buy MILK");

        assert!(log.find("eggs", "pw1").unwrap().is_empty());
    }

    #[test]
    fn test_delete_requires_password() {
        let (_dir, log) = temp_log();
        log.append("secret", "pw1").unwrap();

        assert!(matches!(
            log.delete("wrong"),
            Err(NotesError::Authentication)
        ));
        assert!(log.is_initialized());

        log.delete("pw1").unwrap();
        assert!(!log.is_initialized());
    }
}
