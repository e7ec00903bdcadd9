//! Generic call / raw member → wrapper call.
//!
//! Both rules carry the full replacement expression in their payload; the
//! fix is a straight span replacement.

use crate::fixes::{FileEdit, Fix};
use crate::issues::{PreferWrapperIssue, RawResourceIssue};

pub struct WrapperCallFix;

impl Fix<PreferWrapperIssue> for WrapperCallFix {
    fn to_edits(issues: &[PreferWrapperIssue]) -> Vec<FileEdit> {
        issues
            .iter()
            .map(|issue| {
                FileEdit::new(
                    issue.context.location.file_path.clone(),
                    issue.span,
                    issue.replacement.clone(),
                )
            })
            .collect()
    }
}

impl Fix<RawResourceIssue> for WrapperCallFix {
    fn to_edits(issues: &[RawResourceIssue]) -> Vec<FileEdit> {
        issues
            .iter()
            .map(|issue| {
                FileEdit::new(
                    issue.context.location.file_path.clone(),
                    issue.span,
                    issue.replacement.clone(),
                )
            })
            .collect()
    }
}
