use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - local, password-encrypted notes
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "NOTES_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never prompt; read passwords from NOTES_PASSPHRASE / NOTES_NEW_PASSPHRASE
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where titled notes will be stored
    #[arg(value_name = "DIR")]
    pub directory: Option<String>,

    /// Aggregate log location (defaults to ~/.secure_notes.enc)
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `save` command
#[derive(Args)]
pub struct SaveArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Note content (joined with newlines; read from stdin when omitted)
    #[arg(value_name = "CONTENT")]
    pub content: Vec<String>,
}

/// Arguments for the `open` command
#[derive(Args)]
pub struct OpenArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `find` command
#[derive(Args)]
pub struct FindArgs {
    /// Text to look for in titles
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `passwd` command
#[derive(Args)]
pub struct PasswdArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// Arguments for the `log` command group
#[derive(Args)]
pub struct LogArgs {
    #[command(subcommand)]
    pub command: LogSubcommand,
}

#[derive(Subcommand)]
pub enum LogSubcommand {
    /// Create an empty encrypted log
    Init,

    /// Append a timestamped note
    Add(LogAddArgs),

    /// Show all log entries
    Show(LogShowArgs),

    /// Find log entries containing text
    Find(LogFindArgs),

    /// Change the log password
    Passwd,

    /// Delete the whole log
    Delete(LogDeleteArgs),
}

/// Arguments for the `log add` command
#[derive(Args)]
pub struct LogAddArgs {
    /// Note text (words are joined with spaces)
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

/// Arguments for the `log show` command
#[derive(Args)]
pub struct LogShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log find` command
#[derive(Args)]
pub struct LogFindArgs {
    /// Text to look for
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log delete` command
#[derive(Args)]
pub struct LogDeleteArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose where notes are stored (first-run setup)
    Init(InitArgs),

    /// Save a titled note (replaces an existing note with the same title)
    Save(SaveArgs),

    /// Decrypt and print a titled note
    Open(OpenArgs),

    /// List note titles (titles are not encrypted)
    List(ListArgs),

    /// Find note titles containing text
    Find(FindArgs),

    /// Delete a titled note (requires its password)
    Delete(DeleteArgs),

    /// Change the password of one titled note
    Passwd(PasswdArgs),

    /// Aggregate timestamped log (one file, one password)
    Log(LogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_save_with_content() {
        let cli = Cli::try_parse_from(["notes", "save", "grocery", "milk", "eggs"]).unwrap();
        match cli.command {
            Some(Commands::Save(args)) => {
                assert_eq!(args.title, "grocery");
                assert_eq!(args.content, vec!["milk", "eggs"]);
            }
            _ => panic!("expected save"),
        }
    }

    #[test]
    fn test_parse_log_add_requires_text() {
        assert!(Cli::try_parse_from(["notes", "log", "add"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["notes", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
