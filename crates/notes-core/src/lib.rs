//! # Notes Core
//!
//! Core library for Secure Notes - a local, password-encrypted note store.
//!
//! This crate provides key derivation, authenticated encryption, the on-disk
//! record layout and note addressing, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation, AES-256-GCM records
//! - **storage**: aggregate log and per-title note stores
//! - **rotation**: password changes for the log or a single title
//! - **config**: explicit store locations and first-run directory setup
//! - **fs**: owner-only directories and atomic writes
//!
//! ## Example
//!
//! ```no_run
//! use notes_core::{StoreConfig, TitledNotes};
//!
//! let config = StoreConfig::new("/home/me/.secure_notes", "/home/me/.secure_notes.enc");
//! let notes = TitledNotes::new(&config);
//! notes.save("grocery", "milk, eggs", "pw1")?;
//! assert_eq!(notes.load("grocery", "pw1")?, "milk, eggs");
//! # Ok::<(), notes_core::NotesError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod rotation;
pub mod storage;

pub use config::StoreConfig;
pub use error::{NotesError, Result};
pub use storage::{LogEntry, NoteLog, SealedRecord, TitledNote, TitledNotes};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
