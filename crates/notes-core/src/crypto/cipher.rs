//! AES-256-GCM encryption/decryption of whole records.
//!
//! Both functions are pure: the salt and nonce travel inside the blob, so
//! there is no engine state that could go stale between calls.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::{NotesError, Result};

use super::key::{derive_key, generate_salt, random_array, DerivedKey};
use super::record::{EncryptedRecord, NONCE_LEN};

fn cipher_for(key: &DerivedKey) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| NotesError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt data under a password.
///
/// Generates a fresh salt and nonce for this call, derives the key and seals
/// the plaintext with no associated data.
///
/// # Returns
///
/// `salt || nonce || ciphertext || tag`, ready to write to disk.
///
/// # Errors
///
/// Returns `NotesError::Entropy` if no randomness is available; no output is
/// produced in that case.
///
/// # Examples
///
/// ```
/// use notes_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt(b"secret data", "my-password").unwrap();
/// assert_eq!(decrypt(&blob, "my-password").unwrap(), b"secret data");
/// ```
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let salt = generate_salt()?;
    let nonce = random_array::<NONCE_LEN>()?;
    let key = derive_key(password, &salt);

    let sealed = cipher_for(&key)?
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| NotesError::Crypto(format!("Encryption failed: {}", e)))?;

    Ok(EncryptedRecord {
        salt: &salt,
        nonce: &nonce,
        sealed: &sealed,
    }
    .to_bytes())
}

/// Decrypt a record produced by [`encrypt`].
///
/// # Errors
///
/// - `NotesError::Format` if the blob is shorter than 60 bytes (checked before
///   any key derivation)
/// - `NotesError::Authentication` if the tag does not verify, whether the
///   password is wrong or the data was modified
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    let record = EncryptedRecord::parse(blob)?;
    let key = derive_key(password, record.salt);

    cipher_for(&key)?
        .decrypt(Nonce::from_slice(record.nonce), record.sealed)
        .map_err(|_| NotesError::Authentication)
}
