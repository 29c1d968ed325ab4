//! Per-title note commands.

use std::io::{IsTerminal, Read};

use notes_core::rotation::change_title_password;
use notes_core::storage::TitledRecord;
use notes_core::{NotesError, SealedRecord, TitledNotes};

use crate::app::AppContext;
use crate::cli::{DeleteArgs, FindArgs, ListArgs, OpenArgs, PasswdArgs, SaveArgs};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, table, Badge, Column, UiContext};

use super::{confirm_delete, print_receipt};

/// Resolve a title to its record, failing before any prompt if it is absent.
fn existing_record(notes: &TitledNotes, title: &str) -> anyhow::Result<TitledRecord> {
    let record = notes.record(title)?;
    if !record.exists() {
        return Err(NotesError::NotFound(record.title().to_string()).into());
    }
    Ok(record)
}

fn read_content(ctx: &AppContext, args: &SaveArgs) -> anyhow::Result<String> {
    if !args.content.is_empty() {
        return Ok(args.content.join("\n"));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        if ctx.cli().no_input {
            return Err(CliError::invalid_input_with_hint(
                "No note content provided",
                "Pass the content as arguments or pipe it on stdin.",
            )
            .into());
        }
        eprintln!("Enter note content, then press Ctrl-D:");
    }
    let mut content = String::new();
    stdin
        .read_to_string(&mut content)
        .map_err(|e| anyhow::anyhow!("Failed to read note content: {}", e))?;
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

pub fn handle_save(ctx: &AppContext, args: &SaveArgs) -> anyhow::Result<()> {
    let notes = ctx.titled_notes()?;
    let record = notes.record(&args.title)?;
    let content = zeroize::Zeroizing::new(read_content(ctx, args)?);
    let passphrase = ctx.initial_passphrase()?;

    let replaced = record.exists();
    record.write(&content, &passphrase)?;

    let title = if replaced { "Replaced note" } else { "Saved note" };
    print_receipt(
        ctx,
        title,
        &[
            ("Title", record.title()),
            ("Path", &record.path().display().to_string()),
        ],
    );
    Ok(())
}

pub fn handle_open(ctx: &AppContext, args: &OpenArgs) -> anyhow::Result<()> {
    let notes = ctx.titled_notes()?;
    existing_record(&notes, &args.title)?;
    let passphrase = ctx.passphrase()?;
    let note = notes.get(&args.title, &passphrase)?;

    let ui = ctx.ui(args.json);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}\n", kv(&ui, "Title", &note.title));
        println!("{}", note.content);
    } else {
        println!("{}", note.content);
    }
    Ok(())
}

fn print_titles(ctx: &AppContext, ui: &UiContext, titles: &[String], empty: &str) {
    if ui.mode.is_json() {
        println!("{}", serde_json::json!({ "titles": titles }));
        return;
    }
    if titles.is_empty() {
        if !ctx.quiet() {
            print(ui, &badge(ui, Badge::Info, empty));
            print(ui, &hint(ui, "notes save <TITLE> [CONTENT]..."));
        }
        return;
    }
    let rows: Vec<Vec<String>> = titles.iter().map(|t| vec![t.clone()]).collect();
    print(ui, &table(ui, &[Column::new("Title")], &rows));
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let titles = ctx.titled_notes()?.list()?;
    print_titles(ctx, &ctx.ui(args.json), &titles, "No notes saved yet");
    Ok(())
}

pub fn handle_find(ctx: &AppContext, args: &FindArgs) -> anyhow::Result<()> {
    let titles = ctx.titled_notes()?.find(&args.term)?;
    let empty = format!("No titles contain '{}'", args.term);
    print_titles(ctx, &ctx.ui(args.json), &titles, &empty);
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let notes = ctx.titled_notes()?;
    let record = existing_record(&notes, &args.title)?;
    let passphrase = ctx.passphrase()?;

    let what = format!("note '{}'", record.title());
    if !confirm_delete(ctx, &what, args.force)? {
        if !ctx.quiet() {
            eprintln!("Cancelled.");
        }
        return Ok(());
    }

    notes.delete(&args.title, &passphrase)?;

    print_receipt(ctx, "Deleted note", &[("Title", record.title())]);
    Ok(())
}

pub fn handle_passwd(ctx: &AppContext, args: &PasswdArgs) -> anyhow::Result<()> {
    let notes = ctx.titled_notes()?;
    let record = existing_record(&notes, &args.title)?;
    let old = ctx.passphrase()?;
    let new = ctx.replacement_passphrase()?;

    change_title_password(&notes, &args.title, &old, &new)?;

    print_receipt(ctx, "Password changed", &[("Title", record.title())]);
    Ok(())
}
