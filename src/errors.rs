//! Typed error definitions for resub.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResubError {
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Search string must not be empty")]
    EmptySearch,

    #[error("Rename collision: {count} files would all be renamed to '{target}'")]
    DuplicateTarget { target: String, count: usize },

    #[error("Rename collision: '{original}' -> '{target}' would overwrite an existing file")]
    TargetExists { original: String, target: String },
}

impl ResubError {
    /// Stable short code for structured logging and scripted consumers.
    pub fn code(&self) -> &'static str {
        match self {
            ResubError::DirectoryNotFound(_) => "dir_not_found",
            ResubError::NotADirectory(_) => "not_a_directory",
            ResubError::EmptySearch => "empty_search",
            ResubError::DuplicateTarget { .. } => "duplicate_target",
            ResubError::TargetExists { .. } => "target_exists",
        }
    }
}
