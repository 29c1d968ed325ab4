//! Storage layer for encrypted notes.
//!
//! Two addressing modes share one record format
//! (`salt || nonce || ciphertext || tag`):
//!
//! - [`NoteLog`]: aggregate mode. All notes live in one timestamped log
//!   encrypted as a single record under one password.
//! - [`TitledNotes`]: per-title mode. One `<sanitized title>.enc` file per
//!   note, each with its own password.
//!
//! ## Security
//!
//! Stores are responsible for:
//! - Encryption at rest (content never touches disk in the clear)
//! - Owner-only permissions on directories and record files
//! - Atomic replacement of record files
//!
//! Titles are filenames and are therefore not confidential.
//!
//! No locking is performed; two processes appending to the same log at once
//! can lose one of the writes.

pub mod aggregate;
mod sealed;
pub mod titled;
pub mod traits;
pub mod types;

pub use aggregate::NoteLog;
pub use titled::{TitledNotes, TitledRecord};
pub use traits::SealedRecord;
pub use types::{sanitize_title, LogEntry, TitledNote, RECORD_SUFFIX, TIMESTAMP_FORMAT};
