//! Core library for `resub`.
//!
//! Renames the plain files inside one directory by replacing the first
//! occurrence of a search substring in each filename. The library splits the
//! work into a pure planning step (`plan`) and a filesystem step (`fs_ops`)
//! so the preview shown to the user and the renames actually performed can
//! never disagree.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;
pub mod plan;
pub mod prompt;

pub use config::{Config, LogLevel};
pub use errors::ResubError;
pub use fs_ops::{execute_renames, list_files};
pub use plan::{PlanItem, plan_renames};
