//! Aggregate log commands.

use notes_core::rotation::change_password;
use notes_core::storage::TIMESTAMP_FORMAT;
use notes_core::{LogEntry, NoteLog, NotesError, SealedRecord};

use crate::app::AppContext;
use crate::cli::{LogAddArgs, LogArgs, LogDeleteArgs, LogFindArgs, LogShowArgs, LogSubcommand};
use crate::ui::{badge, hint, print, table, Badge, Column, UiContext};

use super::{confirm_delete, print_receipt};

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    match &args.command {
        LogSubcommand::Init => handle_init(ctx),
        LogSubcommand::Add(add) => handle_add(ctx, add),
        LogSubcommand::Show(show) => handle_show(ctx, show),
        LogSubcommand::Find(find) => handle_find(ctx, find),
        LogSubcommand::Passwd => handle_passwd(ctx),
        LogSubcommand::Delete(delete) => handle_delete(ctx, delete),
    }
}

/// Open the log, failing before any prompt if it has not been created.
fn initialized_log(ctx: &AppContext) -> anyhow::Result<NoteLog> {
    let log = ctx.note_log()?;
    if !log.is_initialized() {
        return Err(NotesError::NotInitialized(log.path().to_path_buf()).into());
    }
    Ok(log)
}

fn entry_time(entry: &LogEntry) -> String {
    entry
        .timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let log = ctx.note_log()?;
    if log.is_initialized() {
        return Err(NotesError::AlreadyExists(log.path().to_path_buf()).into());
    }
    let passphrase = ctx.initial_passphrase()?;
    log.initialize(&passphrase)?;

    print_receipt(
        ctx,
        "Log created",
        &[("Path", &log.path().display().to_string())],
    );
    Ok(())
}

fn handle_add(ctx: &AppContext, args: &LogAddArgs) -> anyhow::Result<()> {
    let log = ctx.note_log()?;
    let passphrase = if log.is_initialized() {
        ctx.passphrase()?
    } else {
        ctx.initial_passphrase()?
    };
    let entry = log.append(&args.text.join(" "), &passphrase)?;

    print_receipt(ctx, "Added to log", &[("Time", &entry_time(&entry))]);
    Ok(())
}

fn print_entries(
    ctx: &AppContext,
    ui: &UiContext,
    entries: &[LogEntry],
    empty: &str,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        if !ctx.quiet() {
            print(ui, &badge(ui, Badge::Info, empty));
            print(ui, &hint(ui, "notes log add <TEXT>..."));
        }
        return Ok(());
    }
    if ui.mode.is_pretty() {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| vec![entry_time(entry), entry.text.clone()])
            .collect();
        let columns = [Column::new("Time"), Column::new("Note")];
        print(ui, &table(ui, &columns, &rows));
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, args: &LogShowArgs) -> anyhow::Result<()> {
    let log = initialized_log(ctx)?;
    let passphrase = ctx.passphrase()?;
    let entries = log.entries(&passphrase)?;
    print_entries(ctx, &ctx.ui(args.json), &entries, "Log is empty")
}

fn handle_find(ctx: &AppContext, args: &LogFindArgs) -> anyhow::Result<()> {
    let log = initialized_log(ctx)?;
    let passphrase = ctx.passphrase()?;
    let entries = log.find(&args.term, &passphrase)?;
    let empty = format!("No log entries contain '{}'", args.term);
    print_entries(ctx, &ctx.ui(args.json), &entries, &empty)
}

fn handle_passwd(ctx: &AppContext) -> anyhow::Result<()> {
    let log = initialized_log(ctx)?;
    let old = ctx.passphrase()?;
    let new = ctx.replacement_passphrase()?;

    change_password(&log, &old, &new)?;

    print_receipt(
        ctx,
        "Password changed",
        &[("Path", &log.path().display().to_string())],
    );
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &LogDeleteArgs) -> anyhow::Result<()> {
    let log = initialized_log(ctx)?;
    let passphrase = ctx.passphrase()?;

    if !confirm_delete(ctx, "the whole log", args.force)? {
        if !ctx.quiet() {
            eprintln!("Cancelled.");
        }
        return Ok(());
    }

    log.delete(&passphrase)?;

    print_receipt(
        ctx,
        "Deleted log",
        &[("Path", &log.path().display().to_string())],
    );
    Ok(())
}
