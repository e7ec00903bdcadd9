//! Span-based text edits.
//!
//! Edits are applied back-to-front so earlier spans stay valid. When edits
//! overlap (a wrapper replacement containing a key rewrite), the outermost
//! edit wins and the inner one is dropped.

use crate::core::data::Span;

/// Replace `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

/// An edit targeting a project file (root-relative path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdit {
    pub file_path: String,
    pub edit: TextEdit,
}

impl FileEdit {
    pub fn new(file_path: impl Into<String>, span: Span, replacement: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            edit: TextEdit {
                span,
                replacement: replacement.into(),
            },
        }
    }
}

/// Apply edits to `source`. Returns the new text, the number of edits
/// applied, and the number dropped (out of bounds or overlapping).
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> (String, usize, usize) {
    let mut sorted: Vec<&TextEdit> = edits
        .iter()
        .filter(|e| {
            e.span.start <= e.span.end
                && e.span.end <= source.len()
                && source.is_char_boundary(e.span.start)
                && source.is_char_boundary(e.span.end)
        })
        .collect();

    // Outermost-first within the same start offset.
    sorted.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut accepted: Vec<&TextEdit> = Vec::new();
    let mut last_end = 0usize;
    for edit in sorted {
        if accepted.is_empty() || edit.span.start >= last_end {
            last_end = edit.span.end;
            accepted.push(edit);
        }
    }
    let applied = accepted.len();
    let dropped = edits.len() - applied;

    let mut text = source.to_string();
    for edit in accepted.iter().rev() {
        text.replace_range(edit.span.start..edit.span.end, &edit.replacement);
    }
    (text, applied, dropped)
}
