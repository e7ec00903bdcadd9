//! Format placeholders in non-interpolated literals.
//!
//! A literal like `"abc {1}"` is almost always meant to be a format
//! template; the interpolated form `$"abc {1}"` is the same content with
//! interpolation capability. Interpolated and raw literals are skipped.

use crate::core::context::AnalysisContext;
use crate::core::syntax::expr::literal_content;
use crate::core::syntax::lexer::{StringFlavor, Token, TokenKind};
use crate::issues::{FormatLiteralIssue, Rule};
use crate::utils::has_positional_placeholder;

pub fn check_format_literals(ctx: &AnalysisContext) -> Vec<FormatLiteralIssue> {
    let mut issues = Vec::new();
    for file in &ctx.files {
        for token in &file.scan.string_literals {
            if !is_format_literal(token, &file.file.text) {
                continue;
            }
            if file.is_suppressed(token.span.start, Rule::FormatLiteral) {
                continue;
            }
            issues.push(FormatLiteralIssue {
                context: file.source_context(token.span.start),
                literal: token.text(&file.file.text).to_string(),
                span: token.span,
            });
        }
    }
    issues
}

/// A regular or verbatim (non-interpolated) literal containing a positional
/// placeholder.
fn is_format_literal(token: &Token, source: &str) -> bool {
    match token.kind {
        TokenKind::Str(StringFlavor::Regular) | TokenKind::Str(StringFlavor::Verbatim) => {
            literal_content(token, source).is_some_and(|content| has_positional_placeholder(&content))
        }
        _ => false,
    }
}
