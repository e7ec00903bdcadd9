//! Plain literal → interpolated literal.
//!
//! Prepending `$` turns `"abc {1}"` into `$"abc {1}"` and `@"abc {1}"`
//! into `$@"abc {1}"` — same content, interpolation capability gained,
//! verbatim flavor preserved.

use crate::fixes::{FileEdit, Fix};
use crate::issues::FormatLiteralIssue;

pub struct InterpolationFix;

impl Fix<FormatLiteralIssue> for InterpolationFix {
    fn to_edits(issues: &[FormatLiteralIssue]) -> Vec<FileEdit> {
        issues
            .iter()
            .filter_map(|issue| {
                let replacement = make_interpolated(&issue.literal)?;
                Some(FileEdit::new(
                    issue.context.location.file_path.clone(),
                    issue.span,
                    replacement,
                ))
            })
            .collect()
    }
}

/// The interpolated spelling of a plain or verbatim literal.
pub fn make_interpolated(literal: &str) -> Option<String> {
    if literal.starts_with('"') || literal.starts_with("@\"") {
        Some(format!("${literal}"))
    } else {
        None
    }
}
