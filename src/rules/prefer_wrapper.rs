//! Prefer the project wrapper over generic translate calls.
//!
//! A two-argument `Translator.Translate(Accessor.ResourceManager, key)` has
//! a shorter project-specific spelling when a compatible wrapper exists.
//! Calls passing explicit error handling (a third argument) are left alone:
//! the wrapper's defaulted second parameter is not equivalent then. Direct
//! resource-manager lookups are also left alone — they are a different
//! surface with different semantics.

use crate::core::classify::{CallSite, CallSiteKind, GenericTarget};
use crate::core::context::AnalysisContext;
use crate::core::data::Span;
use crate::core::semantics::ProjectIndex;
use crate::issues::{PreferWrapperIssue, Rule};

pub fn check_prefer_wrapper(ctx: &AnalysisContext) -> Vec<PreferWrapperIssue> {
    let mut issues = Vec::new();
    for file in &ctx.files {
        for site in &file.call_sites {
            let Some(replacement) = wrapper_replacement(site, &ctx.index, &file.file.text) else {
                continue;
            };
            if file.is_suppressed(site.span.start, Rule::PreferWrapper) {
                continue;
            }
            issues.push(PreferWrapperIssue {
                context: file.source_context(site.span.start),
                replacement,
                span: site.span,
            });
        }
    }
    issues
}

/// Replacement call text when a compatible wrapper exists, preserving the
/// original key argument text.
fn wrapper_replacement(site: &CallSite, index: &ProjectIndex, source: &str) -> Option<String> {
    let CallSiteKind::GenericTranslate { target, arg_count } = site.kind else {
        return None;
    };
    let returns_translation = match target {
        GenericTarget::Translate => false,
        GenericTarget::GetOrCreate => true,
        GenericTarget::ManagerLookup => return None,
    };
    if arg_count != 2 {
        return None;
    }
    let key_span: Span = site.key.span()?;
    let wrapper = index.wrapper_for(&site.accessor, returns_translation)?;
    Some(format!(
        "{}({})",
        wrapper.display_call(),
        key_span.text(source)
    ))
}
