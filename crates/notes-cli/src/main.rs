//! Notes CLI - local, password-encrypted notes
//!
//! This is the command-line interface for Secure Notes. It resolves the
//! config file, gathers passwords and renders results; all encryption and
//! storage lives in `notes-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod ui;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::LOG_ENV;
use crate::errors::{error_hint, exit_code};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        tracing::debug!(error = ?err, "command failed");
        let hint = error_hint(&err);
        print_error(&UiContext::from_env(false), &err.to_string(), hint.as_deref());
        std::process::exit(exit_code(&err));
    }
}

/// Install the stderr log subscriber.
///
/// `-v` and `-vv` override `NOTES_LOG`; without either the filter comes from
/// `NOTES_LOG`, falling back to `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let Some(command) = &ctx.cli().command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init(args) => commands::init::handle_init(ctx, args),
        Commands::Save(args) => commands::notes::handle_save(ctx, args),
        Commands::Open(args) => commands::notes::handle_open(ctx, args),
        Commands::List(args) => commands::notes::handle_list(ctx, args),
        Commands::Find(args) => commands::notes::handle_find(ctx, args),
        Commands::Delete(args) => commands::notes::handle_delete(ctx, args),
        Commands::Passwd(args) => commands::notes::handle_passwd(ctx, args),
        Commands::Log(args) => commands::log::handle_log(ctx, args),
        Commands::Completions(args) => commands::misc::handle_completions(args.shell),
    }
}
