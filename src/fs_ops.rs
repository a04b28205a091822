//! Filesystem operations: one-level directory listing and sequential rename
//! execution. Listing is read-only; execution mutates the directory in place
//! with atomic renames and no rollback, so a mid-sequence failure leaves the
//! already-renamed files renamed.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::ResubError;
use crate::output as out;
use crate::plan::{self, PlanItem, plan_renames};

/// List the plain files immediately inside `directory`, in filesystem
/// listing order (not sorted). Subdirectories, symlinks and other special
/// entries are excluded; nothing is recursed into.
///
/// Entries with non-UTF-8 names are skipped with a warning: substitution is
/// a string operation and a lossy conversion would rename files to corrupted
/// names.
pub fn list_files(directory: &Path) -> Result<Vec<String>> {
    if !directory.exists() {
        return Err(ResubError::DirectoryNotFound(directory.to_path_buf()).into());
    }
    if !directory.is_dir() {
        return Err(ResubError::NotADirectory(directory.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to read directory '{}'", directory.display()))?;
        // symlinks are not followed, so is_file() here means a regular file
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_owned()),
            None => {
                warn!(path = %entry.path().display(), "Skipping file with non-UTF-8 name");
            }
        }
    }
    debug!(directory = %directory.display(), count = files.len(), "listed files");
    Ok(files)
}

/// List, plan, and perform every rename whose computed name differs.
///
/// The plan is re-derived here rather than threaded through from the
/// preview; `plan_renames` is pure, so both derivations agree. Returns the
/// number of renames performed (or that would be performed under dry-run).
pub fn execute_renames(cfg: &Config) -> Result<usize> {
    let files = list_files(&cfg.directory)?;
    let plan = plan_renames(&files, &cfg.search, &cfg.replacement);
    apply_plan(cfg, &plan)
}

/// Perform the changing items of an already-computed plan, sequentially and
/// in plan order. Unless `cfg.force` is set, the whole batch is refused
/// before any mutation if the plan contains destination collisions.
pub fn apply_plan(cfg: &Config, plan: &[PlanItem]) -> Result<usize> {
    if !cfg.force {
        plan::detect_collisions(plan)?;
    }

    let mut renamed = 0usize;
    for item in plan::changes(plan) {
        let src = cfg.directory.join(&item.original);
        let dest = cfg.directory.join(&item.renamed);

        if cfg.dry_run {
            out::user(&format!(
                "Dry-run: would rename: {} -> {}",
                item.original, item.renamed
            ));
            debug!(from = %item.original, to = %item.renamed, "dry-run rename");
            renamed += 1;
            continue;
        }

        fs::rename(&src, &dest).map_err(rename_error_with_hint(&src, &dest))?;
        out::user(&format!("Renamed: {} -> {}", item.original, item.renamed));
        debug!(from = %item.original, to = %item.renamed, "renamed file");
        renamed += 1;
    }

    info!(
        directory = %cfg.directory.display(),
        renamed,
        dry_run = cfg.dry_run,
        "rename pass finished"
    );
    Ok(renamed)
}

/// Adapter for `.map_err(...)` on rename calls: enriches the io::Error with
/// the paths involved plus a platform-aware hint.
fn rename_error_with_hint<'a>(
    src: &'a Path,
    dest: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let mut msg = format!(
            "Failed to rename '{}' -> '{}': {}",
            src.display(),
            dest.display(),
            e
        );

        #[cfg(unix)]
        if let Some(code) = e.raw_os_error() {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" — permission denied; check ownership and write permissions.");
                }
                libc::ENOENT => {
                    msg.push_str(" — source vanished between listing and renaming.");
                }
                libc::EISDIR | libc::ENOTEMPTY => {
                    msg.push_str(" — target is an existing directory.");
                }
                libc::EROFS => {
                    msg.push_str(" — read-only filesystem; cannot rename here.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" — resulting filename too long; shorten the replacement.");
                }
                _ => {}
            }
        }

        #[cfg(not(unix))]
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" — source vanished between listing and renaming.");
            }
            _ => {}
        }

        anyhow!(msg)
    }
}

/// Return true if any existing ancestor of `path` is a symlink. Used to
/// refuse file logging into symlinked locations.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
