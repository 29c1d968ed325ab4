//! Cryptographic operations for secure notes.
//!
//! This module provides key derivation and authenticated encryption using
//! audited RustCrypto implementations:
//! - **PBKDF2-HMAC-SHA256**: salted, iterated password-based key derivation
//! - **AES-256-GCM**: authenticated encryption (confidentiality + tamper detection)
//!
//! ## Security Model
//!
//! - Every record carries its own random 32-byte salt and 12-byte nonce,
//!   generated fresh on every write
//! - Derived keys are zeroized from memory on drop and never persisted
//! - A failed tag check reports one generic error, whether the password was
//!   wrong or the bytes were altered
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of encrypted note files
//! - Offline brute-force attacks on passwords (iterated KDF)
//! - Silent tampering with stored records
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Disclosure of note titles (titles are filenames)

pub mod cipher;
pub mod key;
pub mod passphrase;
pub mod record;

pub use cipher::{decrypt, encrypt};
pub use key::{derive_key, generate_salt, DerivedKey, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use passphrase::validate_passphrase;
pub use record::{EncryptedRecord, MIN_RECORD_LEN, NONCE_LEN, TAG_LEN};
