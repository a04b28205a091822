//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Every interactive prompt can be pre-answered with a flag; a prompt is
//! shown only when its flag is absent. Supplying `--search` switches the run
//! to non-interactive mode (see `Args::interactive`).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::LogLevel;

/// Rename all plain files in a directory by replacing the first occurrence
/// of a literal substring in each filename.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename files in a directory by literal substring substitution"
)]
pub struct Args {
    /// Target directory (prompted for when omitted).
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory_pos: Option<PathBuf>,

    /// Explicit directory option; overrides the positional.
    #[arg(
        long = "directory",
        short = 'C',
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        help = "Target directory (overrides positional)"
    )]
    pub directory: Option<PathBuf>,

    /// Literal substring to search for in filenames. Providing this flag
    /// makes the run non-interactive.
    #[arg(long, short = 's', value_name = "STR")]
    pub search: Option<String>,

    /// Replacement string; empty deletes the first match. Defaults to empty
    /// in non-interactive runs.
    #[arg(long, short = 'r', value_name = "STR")]
    pub replace: Option<String>,

    /// Skip the preview listing before renaming.
    #[arg(long)]
    pub no_preview: bool,

    /// Proceed without asking for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Skip the collision preflight and let renames overwrite existing
    /// targets (the historical behavior).
    #[arg(long)]
    pub force: bool,

    /// Show what would be renamed, but do not modify the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the computed plan as JSON and exit without renaming.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Effective directory: `--directory` if provided, else the positional.
    #[inline]
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory
            .clone()
            .or_else(|| self.directory_pos.clone())
    }

    /// Whether this run may prompt on stdin. Providing `--search` means the
    /// caller is scripting us; missing answers then take their defaults
    /// instead of blocking on a prompt.
    #[inline]
    pub fn interactive(&self) -> bool {
        self.search.is_none()
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
