//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! translayer commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `init`: Initialize a translayer configuration file
//! - `groups`: List translation groups under the language root
//! - `show`: Print the flattened translations for one group
//! - `set`: Save a single translation override
//! - `promote`: Merge saved overrides for a locale into the base set

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
            Some(Command::Groups(cmd)) => cmd.common.verbose,
            Some(Command::Show(cmd)) => cmd.common.verbose,
            Some(Command::Set(cmd)) => cmd.common.verbose,
            Some(Command::Promote(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Canonical language root (overrides config file)
    #[arg(long)]
    pub lang_root: Option<PathBuf>,

    /// Override storage root (overrides config file)
    #[arg(long)]
    pub override_root: Option<PathBuf>,

    /// Fallback locale (overrides config file)
    #[arg(long)]
    pub fallback_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize translayer configuration file
    Init,
    /// List translation groups discovered under the language root
    Groups(GroupsCommand),
    /// Show the flattened translations for one group
    Show(ShowCommand),
    /// Save a single translation override
    Set(SetCommand),
    /// Merge saved overrides for a locale into the base translations
    Promote(PromoteCommand),
}

#[derive(Debug, Args)]
pub struct GroupsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Locale to read translations for
    pub locale: String,

    /// Group identifier, e.g. "messages" or "acme/messages"
    pub group: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Locale to store the override for
    pub locale: String,

    /// Group identifier, e.g. "messages" or "acme/messages"
    pub group: String,

    /// Dotted translation key, e.g. "user.profile.title"
    pub key: String,

    /// New translation value
    pub value: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PromoteCommand {
    /// Locale whose overrides are merged into the base translations
    pub locale: String,

    #[command(flatten)]
    pub common: CommonArgs,
}
