//! Rename planning: the pure half of a run.
//!
//! A plan pairs each listed filename with the name it would get after
//! replacing the first occurrence of the search substring. Planning does no
//! I/O and is deterministic, so the preview shown to the user and the plan
//! the executor re-derives from the same inputs are always identical.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::errors::ResubError;

/// One `(original, renamed)` pair. `renamed == original` means the filename
/// does not contain the search string and the item will be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanItem {
    pub original: String,
    pub renamed: String,
}

impl PlanItem {
    /// Whether executing this item would actually rename anything.
    pub fn is_change(&self) -> bool {
        self.original != self.renamed
    }
}

/// Compute the rename plan for `files`, preserving their order.
///
/// Only the first (leftmost) occurrence of `search` is replaced, matching
/// the tool's documented semantics. With an empty `search`, `replacen`
/// inserts `replacement` before the first character, so every item becomes
/// `replacement + original`; callers are expected to reject empty search
/// strings before getting here.
pub fn plan_renames(files: &[String], search: &str, replacement: &str) -> Vec<PlanItem> {
    files
        .iter()
        .map(|name| PlanItem {
            original: name.clone(),
            renamed: name.replacen(search, replacement, 1),
        })
        .collect()
}

/// Iterate over the items that would actually change a filename.
pub fn changes(plan: &[PlanItem]) -> impl Iterator<Item = &PlanItem> {
    plan.iter().filter(|item| item.is_change())
}

/// Preflight the plan for destination collisions before any mutation.
///
/// Rejects the whole batch when:
/// - two or more changing items compute the same target name, or
/// - a changing item's target equals any currently listed filename other
///   than its own original. This also rejects rename chains (`a -> b` while
///   `b -> c`), whose outcome would depend on listing order.
pub fn detect_collisions(plan: &[PlanItem]) -> Result<(), ResubError> {
    let mut target_counts: HashMap<&str, usize> = HashMap::new();
    for item in changes(plan) {
        *target_counts.entry(item.renamed.as_str()).or_insert(0) += 1;
    }
    if let Some((target, count)) = target_counts.iter().find(|(_, c)| **c > 1) {
        return Err(ResubError::DuplicateTarget {
            target: (*target).to_string(),
            count: *count,
        });
    }

    let existing: HashSet<&str> = plan.iter().map(|item| item.original.as_str()).collect();
    for item in changes(plan) {
        if existing.contains(item.renamed.as_str()) {
            return Err(ResubError::TargetExists {
                original: item.original.clone(),
                target: item.renamed.clone(),
            });
        }
    }
    Ok(())
}
