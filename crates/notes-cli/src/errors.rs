//! CLI error classification.
//!
//! Handlers return `anyhow::Result`. Failures that need a specific exit code
//! are either a [`CliError`] raised by the CLI itself or a
//! [`NotesError`] bubbling up from the core; [`exit_code`] and
//! [`error_hint`] inspect both.

use std::fmt;

use notes_core::NotesError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Invalid user input (missing password, refused confirmation, weak password)
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } | CliError::InvalidInput { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint.as_str()),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

fn core_exit_code(err: &NotesError) -> i32 {
    match err {
        NotesError::Authentication => exit_codes::AUTH_FAILED,
        NotesError::NotFound(_) | NotesError::NotInitialized(_) => exit_codes::NOT_FOUND,
        NotesError::InvalidInput(_) | NotesError::Format(_) | NotesError::AlreadyExists(_) => {
            exit_codes::INVALID_INPUT
        }
        NotesError::Entropy(_) | NotesError::Crypto(_) | NotesError::Io { .. } => {
            exit_codes::GENERAL
        }
    }
}

fn core_hint(err: &NotesError) -> Option<&'static str> {
    match err {
        NotesError::Authentication => {
            Some("A wrong password and a damaged file are reported the same way.")
        }
        NotesError::NotFound(_) => Some("Run `notes list` to see saved titles."),
        NotesError::NotInitialized(_) => {
            Some("Run `notes log init`, or `notes log add <TEXT>` to start the log.")
        }
        NotesError::AlreadyExists(_) => Some("Run `notes log delete` first to start over."),
        _ => None,
    }
}

/// Exit code for an error returned by a command handler.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<NotesError>() {
        return core_exit_code(core_err);
    }
    exit_codes::GENERAL
}

/// Follow-up suggestion for an error returned by a command handler.
pub fn error_hint(err: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.hint().map(str::to_string);
    }
    err.downcast_ref::<NotesError>()
        .and_then(core_hint)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_error_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), 3);
        assert_eq!(CliError::invalid_input("x").exit_code(), 4);
    }

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let auth: anyhow::Error = NotesError::Authentication.into();
        let missing: anyhow::Error = NotesError::NotFound("grocery".into()).into();
        let log: anyhow::Error = NotesError::NotInitialized(PathBuf::from("/x")).into();
        let bad: anyhow::Error = NotesError::InvalidInput("bad".into()).into();

        assert_eq!(exit_code(&auth), exit_codes::AUTH_FAILED);
        assert_eq!(exit_code(&missing), exit_codes::NOT_FOUND);
        assert_eq!(exit_code(&log), exit_codes::NOT_FOUND);
        assert_eq!(exit_code(&bad), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_unclassified_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), exit_codes::GENERAL);
        assert!(error_hint(&err).is_none());
    }

    #[test]
    fn test_hints() {
        let cli: anyhow::Error = CliError::not_found("No config", "Run `notes init`").into();
        assert_eq!(error_hint(&cli).as_deref(), Some("Run `notes init`"));

        let missing: anyhow::Error = NotesError::NotFound("grocery".into()).into();
        assert!(error_hint(&missing).is_some_and(|h| h.contains("notes list")));
    }
}
