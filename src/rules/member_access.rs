//! Raw accessor member access detection.
//!
//! `Resources.Key` used as a string evaluates to the translation directly,
//! bypassing the wrapper's error handling. Fires only when a wrapper
//! actually exists to route through; `nameof(Resources.Key)` never
//! classifies as a member-access site in the first place.

use crate::core::classify::{CallSite, CallSiteKind};
use crate::core::context::AnalysisContext;
use crate::core::semantics::ProjectIndex;
use crate::issues::{RawResourceIssue, Rule};

pub fn check_raw_resource(ctx: &AnalysisContext) -> Vec<RawResourceIssue> {
    let mut issues = Vec::new();
    for file in &ctx.files {
        for site in &file.call_sites {
            let Some((member, replacement)) = raw_resource(site, &ctx.index) else {
                continue;
            };
            if file.is_suppressed(site.span.start, Rule::RawResource) {
                continue;
            }
            issues.push(RawResourceIssue {
                context: file.source_context(site.span.start),
                accessor: site.accessor.clone(),
                member,
                replacement,
                span: site.span,
            });
        }
    }
    issues
}

fn raw_resource(site: &CallSite, index: &ProjectIndex) -> Option<(String, String)> {
    let CallSiteKind::ResourceMemberAccess { member } = &site.kind else {
        return None;
    };
    let wrapper = index.wrapper_for(&site.accessor, false)?;
    let accessor = index.accessor_named(&site.accessor)?;
    let replacement = format!(
        "{}(nameof({}.{}))",
        wrapper.display_call(),
        accessor.display_name(),
        member
    );
    Some((member.clone(), replacement))
}
