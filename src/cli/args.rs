//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Translate missing catalog entries
//! - `generate`: Generate Swift accessors for catalog keys
//! - `status`: Show translation coverage per language
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// String catalog to use (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Source language (overrides the catalog's sourceLanguage)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target languages (overrides config file)
    /// Can be repeated or comma separated: -l de -l fr, -l de,fr
    #[arg(short = 'l', long = "language", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Translate entries again even if they are already translated
    #[arg(long)]
    pub force: bool,

    /// Show what would be translated without calling the service
    #[arg(long)]
    pub dry_run: bool,

    /// Do not keep the previous catalog as a .bak file
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output Swift file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the generated enum (overrides config file)
    #[arg(long)]
    pub enum_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Languages to report (default: config targets, else all catalog languages)
    #[arg(short = 'l', long = "language", value_delimiter = ',')]
    pub languages: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate missing or outdated entries of a string catalog
    Translate(TranslateCommand),
    /// Generate Swift accessors for every key of a string catalog
    Generate(GenerateCommand),
    /// Show translation coverage per language
    Status(StatusCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
