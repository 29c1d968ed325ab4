//! On-disk record layout.
//!
//! ```text
//! +-----------+------------+------------------+----------+
//! | salt (32) | nonce (12) | ciphertext (n)   | tag (16) |
//! +-----------+------------+------------------+----------+
//! ```
//!
//! All offsets are fixed. The smallest valid record (empty plaintext) is
//! 60 bytes.

use crate::error::{NotesError, Result};

use super::key::SALT_LEN;

/// Length of the AES-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Length of the AES-GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Smallest well-formed record: salt, nonce and tag around an empty ciphertext.
pub const MIN_RECORD_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// A borrowed view over an encrypted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedRecord<'a> {
    /// Key derivation salt
    pub salt: &'a [u8; SALT_LEN],
    /// AEAD nonce
    pub nonce: &'a [u8; NONCE_LEN],
    /// Ciphertext with the authentication tag appended
    pub sealed: &'a [u8],
}

impl<'a> EncryptedRecord<'a> {
    /// Split a blob into salt, nonce and sealed payload.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Format` if the blob is shorter than
    /// [`MIN_RECORD_LEN`]. No key derivation happens before this check.
    pub fn parse(blob: &'a [u8]) -> Result<Self> {
        if blob.len() < MIN_RECORD_LEN {
            return Err(NotesError::Format(format!(
                "record is {} bytes, expected at least {}",
                blob.len(),
                MIN_RECORD_LEN
            )));
        }

        let (salt, rest) = blob.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        let salt = salt
            .try_into()
            .map_err(|_| NotesError::Format("salt truncated".to_string()))?;
        let nonce = nonce
            .try_into()
            .map_err(|_| NotesError::Format("nonce truncated".to_string()))?;

        Ok(Self {
            salt,
            nonce,
            sealed,
        })
    }

    /// Length of the ciphertext without the trailing tag.
    pub fn ciphertext_len(&self) -> usize {
        self.sealed.len() - TAG_LEN
    }

    /// Serialize back into the on-disk layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + self.sealed.len());
        out.extend_from_slice(self.salt);
        out.extend_from_slice(self.nonce);
        out.extend_from_slice(self.sealed);
        out
    }
}
