//! Filesystem utilities: owner-only directories and atomic private writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{NotesError, Result};

/// Permission bits for note directories (owner rwx).
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// Permission bits for record files (owner rw).
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Create `dir` (and parents) if missing. A newly created leaf directory is
/// restricted to the owner; existing directories keep their permissions.
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(NotesError::InvalidInput(format!(
            "{} exists and is not a directory",
            dir.display()
        )));
    }

    fs::create_dir_all(dir)
        .map_err(|e| NotesError::io(format!("create directory {}", dir.display()), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(DIR_MODE))
            .map_err(|e| NotesError::io(format!("restrict directory {}", dir.display()), e))?;
    }

    tracing::debug!(path = %dir.display(), "created notes directory");
    Ok(())
}

/// Write `data` to `path` through a temp file and rename, readable only by the owner.
///
/// A crash mid-write leaves either the old file or the new one, never a
/// truncated record.
pub fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| NotesError::InvalidInput(format!("{} has no parent", path.display())))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| NotesError::InvalidInput(format!("invalid filename {}", path.display())))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(&temp_path)
        .map_err(|e| NotesError::io(format!("create temp file {}", temp_path.display()), e))?;
    let written = file.write_all(data).and_then(|()| file.sync_all());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(NotesError::io(format!("write {}", temp_path.display()), e));
    }

    rename_with_fallback(&temp_path, path)
        .map_err(|e| NotesError::io(format!("replace {}", path.display()), e))
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
