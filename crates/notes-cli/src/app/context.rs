//! Application context for the notes CLI.
//!
//! Bundles the parsed arguments with terminal detection and gives handlers
//! one place to load the store configuration and ask for passwords.

use std::io::IsTerminal;
use std::path::PathBuf;

use zeroize::Zeroizing;

use notes_core::{NoteLog, StoreConfig, TitledNotes};

use crate::cli::Cli;
use crate::config::{home_dir, read_config};
use crate::constants::{NEW_PASSPHRASE_ENV, PASSPHRASE_ENV};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::passphrase::{choose_passphrase, read_passphrase};
use super::resolver::{missing_config_message, resolve_config_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    interactive: bool,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            interactive: !cli.no_input && std::io::stdin().is_terminal(),
            ui: UiContext::from_env(false),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether prompts may be shown.
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// UI context for a command, honoring its `--json` flag.
    pub fn ui(&self, json: bool) -> UiContext {
        self.ui.with_json(json)
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli)
    }

    /// Load the store locations from the config file.
    pub fn store_config(&self) -> anyhow::Result<StoreConfig> {
        let config_path = self.config_path()?;
        if !config_path.exists() {
            return Err(CliError::not_found(
                missing_config_message(&config_path),
                "Run `notes init` to choose where notes are stored.",
            )
            .into());
        }
        let config = read_config(&config_path)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config.store_config(&home_dir()?))
    }

    pub fn titled_notes(&self) -> anyhow::Result<TitledNotes> {
        Ok(TitledNotes::new(&self.store_config()?))
    }

    pub fn note_log(&self) -> anyhow::Result<NoteLog> {
        Ok(NoteLog::new(&self.store_config()?))
    }

    /// Password of an existing record.
    pub fn passphrase(&self) -> anyhow::Result<Zeroizing<String>> {
        read_passphrase(PASSPHRASE_ENV, self.interactive)
    }

    /// Password for a record being created.
    pub fn initial_passphrase(&self) -> anyhow::Result<Zeroizing<String>> {
        choose_passphrase(PASSPHRASE_ENV, "Choose a password", self.interactive)
    }

    /// Replacement password during rotation.
    pub fn replacement_passphrase(&self) -> anyhow::Result<Zeroizing<String>> {
        choose_passphrase(NEW_PASSPHRASE_ENV, "New password", self.interactive)
    }
}
