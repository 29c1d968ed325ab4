//! Password input.
//!
//! Passwords come from an environment variable when set, otherwise from a
//! hidden `dialoguer` prompt. Without a TTY (or with `--no-input`) the
//! environment variable is required.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::constants::MIN_PASSPHRASE_LEN;
use crate::errors::CliError;

fn env_passphrase(var: &str) -> Option<Zeroizing<String>> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Zeroizing::new)
}

fn missing_passphrase(var: &str) -> anyhow::Error {
    CliError::invalid_input_with_hint(
        "No password provided and prompting is disabled",
        format!("Set {} or run from a terminal.", var),
    )
    .into()
}

/// Read the password of an existing record.
pub fn read_passphrase(var: &str, interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase(var) {
        return Ok(value);
    }
    if !interactive {
        return Err(missing_passphrase(var));
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Choose a password for a new record (or a rotation target).
///
/// Prompts twice when interactive. The result must pass
/// [`check_new_passphrase`].
pub fn choose_passphrase(
    var: &str,
    prompt: &str,
    interactive: bool,
) -> anyhow::Result<Zeroizing<String>> {
    let passphrase = match env_passphrase(var) {
        Some(value) => value,
        None if interactive => Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?,
        None => return Err(missing_passphrase(var)),
    };
    check_new_passphrase(&passphrase)?;
    Ok(passphrase)
}

/// Minimum-length policy for passwords chosen through the CLI.
pub fn check_new_passphrase(passphrase: &str) -> Result<(), CliError> {
    if passphrase.chars().count() < MIN_PASSPHRASE_LEN {
        return Err(CliError::invalid_input(format!(
            "Password must be at least {} characters",
            MIN_PASSPHRASE_LEN
        )));
    }
    Ok(())
}
