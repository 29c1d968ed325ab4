//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (unclassified failures)
/// - 2: Usage error (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure (I/O, entropy, config parse).
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, note title, log file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or damaged file).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable holding the password of the record being opened.
pub const PASSPHRASE_ENV: &str = "NOTES_PASSPHRASE";

/// Environment variable holding the replacement password for `passwd`.
pub const NEW_PASSPHRASE_ENV: &str = "NOTES_NEW_PASSPHRASE";

/// Environment variable read by the log filter.
pub const LOG_ENV: &str = "NOTES_LOG";

/// Minimum length of passwords chosen through the CLI.
pub const MIN_PASSPHRASE_LEN: usize = 8;
