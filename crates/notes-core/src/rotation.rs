//! Password rotation.
//!
//! Rotation decrypts a record with the old password and re-encrypts the same
//! content under the new one, with a new salt and nonce.
//!
//! The aggregate log has one password, so it rotates as a whole. Titled notes
//! may each carry a different password; they rotate one title at a time and
//! there is no store-wide operation.

use zeroize::Zeroizing;

use crate::crypto::validate_passphrase;
use crate::error::Result;
use crate::storage::{NoteLog, SealedRecord, TitledNotes};

/// Re-encrypt any sealed record under a new password.
///
/// # Errors
///
/// - `NotesError::InvalidInput` if `new` is blank (checked before reading)
/// - `NotesError::Authentication` if `old` does not open the record; the
///   record is left untouched
pub fn rotate<R: SealedRecord + ?Sized>(record: &R, old: &str, new: &str) -> Result<()> {
    validate_passphrase(new)?;

    let content = Zeroizing::new(record.read(old)?);
    record.write(&content, new)?;

    tracing::info!(path = %record.path().display(), "password rotated");
    Ok(())
}

/// Change the password of the aggregate log.
pub fn change_password(log: &NoteLog, old: &str, new: &str) -> Result<()> {
    rotate(log, old, new)
}

/// Change the password of a single titled note.
pub fn change_title_password(store: &TitledNotes, title: &str, old: &str, new: &str) -> Result<()> {
    rotate(&store.record(title)?, old, new)
}
