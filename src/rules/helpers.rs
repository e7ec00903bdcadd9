//! Shared plumbing for the rule modules.

use anyhow::Result;

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
use crate::core::resources::{ResxDocument, find_default_resx};
use crate::core::semantics::AccessorType;
use crate::issues::ParseErrorIssue;

/// A loaded default-culture table, or the parse error that surfaced while
/// loading it.
pub type TableResult<'a> = (&'a AccessorType, Result<ResxDocument, ParseErrorIssue>);

/// Load every accessor's default table (skipping accessors with no table on
/// disk). Malformed tables surface as parse-error issues, never as silent
/// skips.
pub fn load_default_tables<'a>(
    ctx: &'a AnalysisContext,
    cancel: &CancelToken,
) -> Result<Vec<TableResult<'a>>> {
    let mut tables = Vec::new();
    for accessor in &ctx.index.accessors {
        cancel.check()?;
        let Some(path) = find_default_resx(accessor) else {
            continue;
        };
        let loaded = ResxDocument::load(&path).map_err(|err| ParseErrorIssue {
            file_path: display_path(ctx, &path),
            error: format!("{err:#}"),
        });
        tables.push((accessor, loaded));
    }
    Ok(tables)
}

/// Root-relative display form of a path under the project root.
pub fn display_path(ctx: &AnalysisContext, path: &std::path::Path) -> String {
    path.strip_prefix(&ctx.root)
        .map(|rel| format!("./{}", rel.display()))
        .unwrap_or_else(|_| path.display().to_string())
}

/// Column (1-based) of a member name within its declaration line, for
/// caret placement in entry diagnostics.
pub fn member_col(source_line: &str, name: &str) -> usize {
    source_line
        .find(name)
        .map(|byte| source_line[..byte].chars().count() + 1)
        .unwrap_or(1)
}
