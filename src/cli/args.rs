//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: run resource-key checks (missing keys, literal keys, …)
//! - `fix`: rewrite literal keys, format literals and wrapper calls
//! - `rename`: rename a resource key across code and tables
//! - `init`: write a default `.resxlintrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use super::commands::fix::FixRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return
    /// `None`.
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
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Fix(cmd)) => cmd.common.verbose,
            Some(Command::Rename(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    /// Rules to fix (default: all fixable)
    #[arg(long, value_enum)]
    pub rules: Vec<FixRule>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// The resource key to rename
    pub old: String,

    /// The new key name
    pub new: String,

    /// Accessor type to rename in (required when the project has several)
    #[arg(long)]
    pub resources: Option<String>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for resource-key issues (missing keys, literal keys, duplicates)
    Check(CheckCommand),
    /// Rewrite literal keys to nameof, make format literals interpolated
    Fix(FixCommand),
    /// Rename a resource key in code, the default table and all culture tables
    Rename(RenameCommand),
    /// Initialize a new .resxlintrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_rules() {
        let args = Arguments::parse_from(["resxlint", "check", "missing-key", "literal-key"]);
        match args.command {
            Some(Command::Check(cmd)) => {
                assert_eq!(cmd.checks.len(), 2);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn parses_rename() {
        let args = Arguments::parse_from([
            "resxlint", "rename", "Old", "New", "--resources", "Resources", "--apply",
        ]);
        match args.command {
            Some(Command::Rename(cmd)) => {
                assert_eq!(cmd.old, "Old");
                assert_eq!(cmd.new, "New");
                assert_eq!(cmd.resources.as_deref(), Some("Resources"));
                assert!(cmd.apply);
            }
            other => panic!("expected rename, got {other:?}"),
        }
    }

    #[test]
    fn verbose_flag_is_read_through() {
        let args = Arguments::parse_from(["resxlint", "check", "-v"]);
        assert!(args.verbose());
        let args = Arguments::parse_from(["resxlint", "init"]);
        assert!(!args.verbose());
    }
}
