//! Store configuration.
//!
//! A `StoreConfig` is built once by the caller and handed to the stores.
//! Nothing in the core looks up the home directory on its own.

use std::path::{Path, PathBuf};

use crate::error::{NotesError, Result};
use crate::fs::ensure_private_dir;

/// Default per-title notes directory name under the home directory.
pub const DEFAULT_NOTES_DIR: &str = ".secure_notes";

/// Default aggregate log filename under the home directory.
pub const DEFAULT_LOG_FILE: &str = ".secure_notes.enc";

/// Locations used by the note stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    notes_dir: PathBuf,
    log_path: PathBuf,
}

impl StoreConfig {
    pub fn new(notes_dir: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            log_path: log_path.into(),
        }
    }

    /// Default layout rooted at `home`.
    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join(DEFAULT_NOTES_DIR), default_log_path(home))
    }

    /// Directory holding one `.enc` file per titled note.
    pub fn notes_directory(&self) -> &Path {
        &self.notes_dir
    }

    /// Path of the single aggregate log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Default aggregate log location for `home`.
pub fn default_log_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_LOG_FILE)
}

/// Expand a leading `~` or `~/` against `home`.
pub fn expand_tilde(input: &str, home: &Path) -> PathBuf {
    if input == "~" {
        return home.to_path_buf();
    }
    match input.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Validate and create the notes directory chosen during first-run setup.
///
/// The input is trimmed and `~/` is expanded against `home`. The directory is
/// created with owner-only permissions if it does not exist.
///
/// # Errors
///
/// Returns `NotesError::InvalidInput` for empty input or a path that exists
/// but is not a directory.
pub fn setup_notes_directory(input: &str, home: &Path) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NotesError::InvalidInput(
            "Notes directory cannot be empty".to_string(),
        ));
    }

    let dir = expand_tilde(trimmed, home);
    ensure_private_dir(&dir)?;
    tracing::info!(path = %dir.display(), "notes directory ready");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_home_defaults() {
        let config = StoreConfig::from_home(Path::new("/home/me"));
        assert_eq!(
            config.notes_directory(),
            Path::new("/home/me/.secure_notes")
        );
        assert_eq!(config.log_path(), Path::new("/home/me/.secure_notes.enc"));
    }

    #[test]
    fn test_expand_tilde() {
        let home = Path::new("/home/me");
        assert_eq!(expand_tilde("~/notes", home), PathBuf::from("/home/me/notes"));
        assert_eq!(expand_tilde("~", home), PathBuf::from("/home/me"));
        assert_eq!(expand_tilde("/abs/path", home), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("~other/x", home), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_setup_creates_directory_under_home() {
        let home = tempdir().unwrap();

        let dir = setup_notes_directory("  ~/Documents/notes  ", home.path()).unwrap();

        assert_eq!(dir, home.path().join("Documents").join("notes"));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_setup_rejects_empty_input() {
        let home = tempdir().unwrap();
        let result = setup_notes_directory("   ", home.path());
        assert!(matches!(result, Err(NotesError::InvalidInput(_))));
    }

    #[test]
    fn test_setup_rejects_existing_file() {
        let home = tempdir().unwrap();
        std::fs::write(home.path().join("taken"), b"x").unwrap();

        let result = setup_notes_directory("~/taken", home.path());
        assert!(matches!(result, Err(NotesError::InvalidInput(_))));
    }
}
