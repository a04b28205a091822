//! Runtime configuration types.
//! - Config holds the resolved inputs for one rename run.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use crate::errors::ResubError;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Resolved inputs for one rename run. Built from CLI flags and interactive
/// prompt answers; nothing is persisted between invocations.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate plain files are renamed
    pub directory: PathBuf,
    /// Literal substring to search for in filenames
    pub search: String,
    /// Replacement for the first occurrence of `search` (may be empty)
    pub replacement: String,
    /// If true, print what would be renamed but do not touch the filesystem
    pub dry_run: bool,
    /// If true, skip the collision preflight and let renames clobber targets
    pub force: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            search: String::new(),
            replacement: String::new(),
            dry_run: false,
            force: false,
        }
    }
}

impl Config {
    /// Construct a Config with explicit inputs; other fields use defaults.
    pub fn new(
        directory: impl Into<PathBuf>,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            search: search.into(),
            replacement: replacement.into(),
            ..Default::default()
        }
    }

    /// Validate the run inputs before touching anything.
    ///
    /// - `directory` must exist, be a directory, and be readable.
    /// - `search` must be non-empty (an empty pattern would prepend the
    ///   replacement to every filename, which is never what the user meant).
    ///
    /// On success the directory is canonicalized in place so later rename
    /// paths are unambiguous.
    pub fn validate(&mut self) -> Result<()> {
        if !self.directory.exists() {
            return Err(ResubError::DirectoryNotFound(self.directory.clone()).into());
        }
        if !self.directory.is_dir() {
            return Err(ResubError::NotADirectory(self.directory.clone()).into());
        }

        // readability probe
        fs::read_dir(&self.directory).with_context(|| {
            format!(
                "Cannot read directory '{}'; check permissions",
                self.directory.display()
            )
        })?;

        if self.search.is_empty() {
            return Err(ResubError::EmptySearch.into());
        }

        // dunce keeps Windows paths free of \\?\ prefixes
        self.directory = dunce::canonicalize(&self.directory).with_context(|| {
            format!("Failed to canonicalize '{}'", self.directory.display())
        })?;
        debug!(directory = %self.directory.display(), "validated run inputs");
        Ok(())
    }
}
