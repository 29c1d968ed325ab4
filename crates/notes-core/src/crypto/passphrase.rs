//! Password validation.
//!
//! The core only refuses passwords that cannot protect anything. Length
//! policy for newly chosen passwords belongs to the front end.

use crate::error::{NotesError, Result};

/// Validate a password before it is used to create or re-encrypt a record.
///
/// # Examples
///
/// ```
/// use notes_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("pw1").is_ok());
/// assert!(validate_passphrase("   ").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(NotesError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    Ok(())
}
