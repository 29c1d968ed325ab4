//! Per-title mode: one encrypted file per titled note.
//!
//! Each file is an independent record and may use its own password.
//! Filenames are `sanitize(title) + ".enc"`, so titles are visible to anyone
//! who can list the directory; only content is confidential.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::config::StoreConfig;
use crate::error::{NotesError, Result};
use crate::storage::sealed::{read_sealed_text, write_sealed};
use crate::storage::traits::SealedRecord;
use crate::storage::types::{sanitize_title, TitledNote, RECORD_SUFFIX};

/// Directory of titled notes.
#[derive(Debug, Clone)]
pub struct TitledNotes {
    dir: PathBuf,
}

/// A single titled note file.
#[derive(Debug, Clone)]
pub struct TitledRecord {
    title: String,
    path: PathBuf,
}

impl TitledRecord {
    /// Sanitized title of this record.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl SealedRecord for TitledRecord {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self, password: &str) -> Result<String> {
        if !self.exists() {
            return Err(NotesError::NotFound(self.title.clone()));
        }
        read_sealed_text(&self.path, password)
    }

    fn write(&self, content: &str, password: &str) -> Result<()> {
        write_sealed(&self.path, content.as_bytes(), password)
    }
}

impl TitledNotes {
    /// Notes in the configured directory.
    pub fn new(config: &StoreConfig) -> Self {
        Self::in_dir(config.notes_directory())
    }

    /// Notes in an explicit directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the `.enc` files.
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// File path for `title`.
    pub fn path_for(&self, title: &str) -> Result<PathBuf> {
        let stem = sanitize_title(title)?;
        Ok(self.dir.join(format!("{}{}", stem, RECORD_SUFFIX)))
    }

    /// Record handle for `title`. Does not touch the filesystem.
    pub fn record(&self, title: &str) -> Result<TitledRecord> {
        Ok(TitledRecord {
            title: sanitize_title(title)?,
            path: self.path_for(title)?,
        })
    }

    /// Whether a note exists for `title`. Never decrypts; invalid titles never exist.
    pub fn exists(&self, title: &str) -> bool {
        self.record(title)
            .map(|record| record.exists())
            .unwrap_or(false)
    }

    /// Encrypt `content` under `password`, replacing any previous note with this title.
    pub fn save(&self, title: &str, content: &str, password: &str) -> Result<()> {
        let record = self.record(title)?;
        record.write(content, password)?;
        tracing::debug!(title = record.title(), "saved note");
        Ok(())
    }

    /// Decrypt the note stored under `title`.
    ///
    /// # Errors
    ///
    /// - `NotesError::NotFound` if no note has this title
    /// - `NotesError::Authentication` for a wrong password or a modified file
    /// - `NotesError::Format` for an undersized file
    pub fn load(&self, title: &str, password: &str) -> Result<String> {
        self.record(title)?.read(password)
    }

    /// Decrypt a note together with its sanitized title.
    pub fn get(&self, title: &str, password: &str) -> Result<TitledNote> {
        let record = self.record(title)?;
        let content = record.read(password)?;
        Ok(TitledNote {
            title: record.title,
            content,
        })
    }

    /// Titles of all stored notes, sorted. A missing directory has no notes.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(NotesError::io(
                    format!("list {}", self.dir.display()),
                    e,
                ))
            }
        };

        let mut titles = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| NotesError::io(format!("list {}", self.dir.display()), e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(title) = name.strip_suffix(RECORD_SUFFIX) {
                if !title.is_empty() {
                    titles.push(title.to_string());
                }
            }
        }

        titles.sort();
        Ok(titles)
    }

    /// Titles containing `term`, ignoring case.
    pub fn find(&self, term: &str) -> Result<Vec<String>> {
        let term_lower = term.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .filter(|title| title.to_lowercase().contains(&term_lower))
            .collect())
    }

    /// Remove a note after proving the password opens it.
    pub fn delete(&self, title: &str, password: &str) -> Result<()> {
        let record = self.record(title)?;
        drop(Zeroizing::new(record.read(password)?));

        fs::remove_file(record.path())
            .map_err(|e| NotesError::io(format!("remove {}", record.path().display()), e))?;
        tracing::info!(title = record.title(), "deleted note");
        Ok(())
    }
}
