//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! Keys are derived from a password and a per-record salt. The salt is stored
//! in the clear at the front of every record; the key never is.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{NotesError, Result};

/// Fixed PBKDF2 iteration count. Changing this makes existing records unreadable.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-record salt in bytes.
pub const SALT_LEN: usize = 32;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256-GCM).
pub const KEY_LEN: usize = 32;

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Fill a fixed-size array from the operating system randomness source.
pub(crate) fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| NotesError::Entropy(e.to_string()))?;
    Ok(bytes)
}

/// Generate a fresh 32-byte salt.
///
/// # Errors
///
/// Returns `NotesError::Entropy` if the randomness source is unavailable.
/// Callers must abort the write in that case.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    random_array::<SALT_LEN>()
}

/// Derive an encryption key from a password and salt.
///
/// - Same password + salt always produces the same key
/// - Different salt produces a different key, so one password encrypting
///   many notes still yields unrelated keys
///
/// # Examples
///
/// ```
/// use notes_core::crypto::{derive_key, SALT_LEN};
///
/// let salt = [7u8; SALT_LEN];
/// let key = derive_key("my-password", &salt);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
