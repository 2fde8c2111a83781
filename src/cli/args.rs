//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run translation-table checks (placeholders, duplicates, ...)
//! - `fmt`: Rewrite `.ts` files in canonical lupdate layout
//! - `tr`: Look up and render one translated string
//! - `init`: Initialize tsglot configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.args.common.verbose,
            Some(Command::Tr(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory (or single file) holding the .ts files (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Language the source texts are written in (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub args: FmtArgs,
}

#[derive(Debug, Parser)]
pub struct TrArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Context the string belongs to (e.g. MainWindow)
    #[arg(short, long)]
    pub context: String,

    /// Translation file to read (takes precedence over --locale)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Locale to resolve a catalog for (e.g. es_MX.UTF-8)
    #[arg(long, env = "LANG")]
    pub locale: Option<String>,

    /// Catalog base name (overrides config `catalogName`)
    #[arg(long)]
    pub name: Option<String>,

    /// Count for plural messages; replaces %n
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub count: Option<i64>,

    /// Source text to translate
    pub source: String,

    /// Arguments substituted into the placeholders, in order
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TrCommand {
    #[command(flatten)]
    pub args: TrArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files for placeholder, duplicate and coverage issues
    Check(CheckCommand),
    /// Rewrite translation files in canonical lupdate layout
    Fmt(FmtCommand),
    /// Translate one source string, falling back to the source text
    Tr(TrCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
