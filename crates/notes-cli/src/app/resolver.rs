//! Path resolution for the config file.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config file path. `--config` (or `NOTES_CONFIG`, which clap
/// maps onto the same flag) wins over the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No notes config found at {}", config_path.display())
}
