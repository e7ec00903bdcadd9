//! Missing resource key detection.
//!
//! Fires when a call site's key is statically known (literal, `nameof`, or
//! accessor member) and the accessor type has no member with that name. A
//! key that cannot be extracted is skipped — that is not a pass, just not
//! this rule's business.

use crate::core::classify::CallSite;
use crate::core::context::AnalysisContext;
use crate::core::semantics::ProjectIndex;
use crate::issues::{MissingKeyIssue, Rule};

pub fn check_missing_keys(ctx: &AnalysisContext) -> Vec<MissingKeyIssue> {
    let mut issues = Vec::new();
    for file in &ctx.files {
        for site in &file.call_sites {
            let Some((key, offset)) = missing_key(site, &ctx.index) else {
                continue;
            };
            if file.is_suppressed(offset, Rule::MissingKey) {
                continue;
            }
            issues.push(MissingKeyIssue {
                context: file.source_context(offset),
                key,
                accessor: site.accessor.clone(),
            });
        }
    }
    issues
}

/// The key and diagnostic offset when a call site references a key that
/// does not exist.
fn missing_key(site: &CallSite, index: &ProjectIndex) -> Option<(String, usize)> {
    let key = site.key.known_key()?;
    let accessor = index.accessor_named(&site.accessor)?;
    if accessor.has_member(key) {
        return None;
    }
    let offset = site
        .key
        .span()
        .map(|s| s.start)
        .unwrap_or(site.span.start);
    Some((key.to_string(), offset))
}
