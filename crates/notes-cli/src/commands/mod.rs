//! Command handlers, one module per command family.

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub mod init;
pub mod log;
pub mod misc;
pub mod notes;

/// Print an action summary unless `--quiet` was given.
pub(crate) fn print_receipt(ctx: &AppContext, title: &str, items: &[(&str, &str)]) {
    if ctx.quiet() {
        return;
    }
    let ui = ctx.ui(false);
    print(&ui, &receipt(&ui, title, items));
}

/// Ask before destroying data. Returns false when the user declines.
pub(crate) fn confirm_delete(ctx: &AppContext, what: &str, force: bool) -> anyhow::Result<bool> {
    if force {
        return Ok(true);
    }
    if !ctx.interactive() {
        return Err(CliError::invalid_input_with_hint(
            format!("Refusing to delete {} without confirmation", what),
            "Pass --force to delete non-interactively.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(format!("Delete {}? This cannot be undone", what))
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
