//! Code-fix engine.
//!
//! Fixes convert issues into span-based text edits. Each fix can be
//! implemented for multiple issue types; the executor groups edits per
//! file, drops overlapping rewrites (outermost wins), and writes each file
//! once.
//!
//! - `edits`: edit representation and conflict-free application
//! - `symbolic_key`: literal key → `nameof(...)`
//! - `interpolation`: plain literal → interpolated literal
//! - `wrapper_call`: generic call / raw member → wrapper call
//! - `rename`: staged cross-file resource rename

pub mod edits;
pub mod interpolation;
pub mod rename;
pub mod symbolic_key;
pub mod wrapper_call;

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
pub use edits::{FileEdit, TextEdit, apply_edits};
pub use rename::{RenamePlan, plan_rename};

/// Statistics from running a fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of issues skipped (no payload, or overlapping edits).
    pub skipped: usize,
    /// Number of edits actually applied.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for FixStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Fix trait — converts issues into file edits.
///
/// An issue without a usable payload produces no edit; the executor counts
/// it as skipped.
pub trait Fix<I> {
    fn to_edits(issues: &[I]) -> Vec<FileEdit>;
}

/// Apply edits to the loaded project. With `apply == false` nothing is
/// written; the stats describe what would happen.
pub fn execute_edits(
    ctx: &AnalysisContext,
    edits: Vec<FileEdit>,
    processed: usize,
    apply: bool,
    cancel: &CancelToken,
) -> Result<FixStats> {
    let mut by_file: HashMap<&str, Vec<TextEdit>> = HashMap::new();
    for edit in &edits {
        by_file
            .entry(edit.file_path.as_str())
            .or_default()
            .push(edit.edit.clone());
    }

    let mut stats = FixStats {
        processed,
        skipped: processed.saturating_sub(edits.len()),
        ..Default::default()
    };

    for (rel_path, file_edits) in by_file {
        cancel.check()?;
        let file = ctx
            .files
            .iter()
            .find(|f| f.file.rel_path == rel_path)
            .with_context(|| format!("unknown file in fix: {rel_path}"))?;
        let (new_text, applied, dropped) = apply_edits(&file.file.text, &file_edits);
        stats.changes_applied += applied;
        stats.skipped += dropped;
        if applied == 0 {
            continue;
        }
        if apply {
            std::fs::write(&file.file.path, new_text)
                .with_context(|| format!("Failed to write file: {}", file.file.path.display()))?;
        }
        stats.files_modified += 1;
    }

    Ok(stats)
}
