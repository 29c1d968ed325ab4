//! Sealed record trait definition.
//!
//! A `SealedRecord` is one encrypted file addressed by a store: the whole
//! aggregate log, or a single titled note. Password rotation is written
//! against this trait so it works on either without knowing the layout.

use std::path::Path;

use crate::error::Result;

/// One password-protected record on disk.
///
/// All implementations must ensure:
/// - `write` replaces the whole file with a fresh salt and nonce
/// - `read` never returns plaintext from a record that fails authentication
pub trait SealedRecord {
    /// Location of the record file.
    fn path(&self) -> &Path;

    /// Whether the record file exists. Never decrypts.
    fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Decrypt the full record content.
    ///
    /// # Errors
    ///
    /// - `NotesError::Authentication` if the password is wrong or the file was modified
    /// - `NotesError::Format` if the file is undersized or not UTF-8
    /// - A missing-record error naming the record if it does not exist
    fn read(&self, password: &str) -> Result<String>;

    /// Encrypt `content` under `password` and replace the record.
    fn write(&self, content: &str, password: &str) -> Result<()>;
}
