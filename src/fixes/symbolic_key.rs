//! Literal key → symbolic reference.
//!
//! Rewrites the key argument to the `nameof(...)` payload the rule
//! computed. Issues without a replacement (no matching member) are skipped
//! — the diagnostic should not have offered a fix in that case.

use crate::fixes::{FileEdit, Fix};
use crate::issues::LiteralKeyIssue;

pub struct SymbolicKeyFix;

impl Fix<LiteralKeyIssue> for SymbolicKeyFix {
    fn to_edits(issues: &[LiteralKeyIssue]) -> Vec<FileEdit> {
        issues
            .iter()
            .filter_map(|issue| {
                let replacement = issue.replacement.as_ref()?;
                Some(FileEdit::new(
                    issue.context.location.file_path.clone(),
                    issue.span,
                    replacement.clone(),
                ))
            })
            .collect()
    }
}
