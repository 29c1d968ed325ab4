//! Error types for note store operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing hints.
//!
//! Authentication failures deliberately carry no detail: a wrong password and
//! a tampered record produce the same variant and the same message.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for note store operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for note store operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The operating system randomness source failed. Nothing was written.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Record is undersized or its content is malformed
    #[error("Invalid file format: {0}")]
    Format(String),

    /// AEAD tag mismatch (wrong password or corrupted data)
    #[error("Incorrect password or corrupted file")]
    Authentication,

    /// Titled note does not exist
    #[error("Note '{0}' does not exist")]
    NotFound(String),

    /// Aggregate log has not been created yet
    #[error("Notes log not initialized: {}", .0.display())]
    NotInitialized(PathBuf),

    /// Aggregate log already exists
    #[error("Notes log already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Invalid caller input (title, password, entry text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cipher construction failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Filesystem failure with the operation that triggered it
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl NotesError {
    /// Wrap an I/O error with a short description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        NotesError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error means the password was rejected (or the record was tampered with).
    pub fn is_authentication(&self) -> bool {
        matches!(self, NotesError::Authentication)
    }
}
