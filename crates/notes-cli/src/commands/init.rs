use dialoguer::Input;

use notes_core::config::{
    default_log_path, expand_tilde, setup_notes_directory, DEFAULT_NOTES_DIR,
};

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{home_dir, write_config, NotesConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt};

/// First-run setup: choose the notes directory and write the config file.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let home = home_dir()?;
    let config_path = ctx.config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let default_dir = format!("~/{}", DEFAULT_NOTES_DIR);
    let input = match args.directory.as_deref() {
        Some(dir) => dir.to_string(),
        None if ctx.interactive() => Input::<String>::new()
            .with_prompt("Where should notes be stored?")
            .default(default_dir)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read directory: {}", e))?,
        None => default_dir,
    };

    let directory = setup_notes_directory(&input, &home)?;
    let log_path = args
        .log_path
        .as_deref()
        .map(|path| expand_tilde(path.trim(), &home));
    write_config(
        &config_path,
        &NotesConfig::new(&directory, log_path.as_deref()),
    )?;

    if !ctx.quiet() {
        let log_display = log_path
            .unwrap_or_else(|| default_log_path(&home))
            .display()
            .to_string();
        let ui = ctx.ui(false);
        print(
            &ui,
            &receipt(
                &ui,
                "Notes ready",
                &[
                    ("Directory", &directory.display().to_string()),
                    ("Log", &log_display),
                    ("Config", &config_path.display().to_string()),
                ],
            ),
        );
    }
    Ok(())
}
