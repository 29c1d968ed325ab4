//! Reading and writing whole encrypted record files.

use std::fs;
use std::path::Path;

use crate::crypto::{decrypt, encrypt, validate_passphrase};
use crate::error::{NotesError, Result};
use crate::fs::{ensure_private_dir, write_private};

/// Encrypt `plaintext` and replace the file at `path`.
///
/// The parent directory is created owner-only if missing. Every call
/// produces a new salt and nonce.
pub(crate) fn write_sealed(path: &Path, plaintext: &[u8], password: &str) -> Result<()> {
    validate_passphrase(password)?;

    if let Some(parent) = path.parent() {
        ensure_private_dir(parent)?;
    }

    let blob = encrypt(plaintext, password)?;
    write_private(path, &blob)?;

    tracing::debug!(path = %path.display(), bytes = blob.len(), "wrote sealed record");
    Ok(())
}

/// Read and decrypt the file at `path`.
pub(crate) fn read_sealed(path: &Path, password: &str) -> Result<Vec<u8>> {
    let blob = fs::read(path).map_err(|e| NotesError::io(format!("read {}", path.display()), e))?;
    tracing::debug!(path = %path.display(), bytes = blob.len(), "read sealed record");

    decrypt(&blob, password).inspect_err(|e| {
        if e.is_authentication() {
            tracing::warn!(path = %path.display(), "record failed authentication");
        }
    })
}

/// Read and decrypt the file at `path` as UTF-8 text.
pub(crate) fn read_sealed_text(path: &Path, password: &str) -> Result<String> {
    let bytes = read_sealed(path, password)?;
    String::from_utf8(bytes)
        .map_err(|_| NotesError::Format("note content is not valid UTF-8".to_string()))
}
