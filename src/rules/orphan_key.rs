//! Culture-orphan detection.
//!
//! The default table is the canonical key universe; every culture variant
//! must be a subset of it. A key that exists only in a variant is dead
//! weight for translators and can never be resolved through the accessor.
//! Key existence is answered by the generated member set, so the default
//! table itself is not re-parsed here.

use crate::core::context::AnalysisContext;
use crate::core::data::{EntryContext, SourceLocation};
use crate::core::resources::{ResxDocument, find_default_resx};
use crate::issues::{CultureOrphanIssue, ParseErrorIssue};
use crate::rules::helpers::display_path;

pub fn check_culture_orphans(
    ctx: &AnalysisContext,
) -> (Vec<CultureOrphanIssue>, Vec<ParseErrorIssue>) {
    let mut issues = Vec::new();
    let mut parse_errors = Vec::new();

    for accessor in &ctx.index.accessors {
        let Some(default_path) = find_default_resx(accessor) else {
            continue;
        };
        for variant in ctx.variants.variants(&default_path).iter() {
            let table = match ResxDocument::load(variant) {
                Ok(table) => table,
                Err(err) => {
                    parse_errors.push(ParseErrorIssue {
                        file_path: display_path(ctx, variant),
                        error: format!("{err:#}"),
                    });
                    continue;
                }
            };
            for entry in table.entries() {
                if accessor.has_member(&entry.key) {
                    continue;
                }
                issues.push(CultureOrphanIssue {
                    context: EntryContext::new(
                        SourceLocation::new(display_path(ctx, variant), entry.line, 1),
                        entry.key.clone(),
                        entry.value.clone(),
                    ),
                    accessor: accessor.name.clone(),
                });
            }
        }
    }

    (issues, parse_errors)
}
