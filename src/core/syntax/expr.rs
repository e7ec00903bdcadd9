//! Expression forms read out of the token stream.
//!
//! Candidates are the syntactic shapes the classifier looks at: invocations
//! of a dotted path, and bare dotted member paths. Arguments are reduced to
//! the handful of forms key extraction distinguishes — a string literal, a
//! `nameof(...)` reference, a plain path, a `.ToString()` call, or anything
//! else.

use crate::core::data::Span;
use crate::core::syntax::lexer::{StringFlavor, Token, TokenKind};

/// One argument of a candidate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub expr: ArgExpr,
    pub span: Span,
}

/// The statically recognized shape of an argument expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    /// A single string-literal token.
    Str { token: Token },
    /// `nameof(a)` / `nameof(a.b.c)` — the referenced path.
    NameOf { path: Vec<String>, span: Span },
    /// A bare dotted path: `key`, `Resources.Key`, `Properties.Resources.Key`.
    Path { segments: Vec<String>, span: Span },
    /// `path.ToString()` — a stringified symbol, never a symbolic key.
    Stringified { span: Span },
    /// Anything else (computed expression, lambda, interpolated string, …).
    Other { span: Span },
}

/// A candidate expression found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,
    /// Whole-expression span (callee through closing paren, or the path).
    pub span: Span,
    /// True when the candidate sits inside a `nameof(...)` argument.
    pub in_nameof: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateKind {
    Invocation {
        /// Dotted callee path, e.g. `["Translator", "Translate"]`.
        path: Vec<String>,
        path_span: Span,
        args: Vec<Argument>,
    },
    MemberPath {
        segments: Vec<String>,
        /// Span of each segment's identifier token.
        segment_spans: Vec<Span>,
    },
}

/// Read a dotted path starting at token `i`. Returns the segments, the span
/// of each segment token, and the index of the first token past the path.
pub fn read_path(
    tokens: &[Token],
    source: &str,
    i: usize,
) -> Option<(Vec<String>, Vec<Span>, usize)> {
    let first = tokens.get(i)?;
    if first.kind != TokenKind::Ident {
        return None;
    }
    let mut segments = vec![first.ident_text(source).to_string()];
    let mut spans = vec![first.span];
    let mut next = i + 1;
    while next + 1 < tokens.len()
        && tokens[next].is_punct('.')
        && tokens[next + 1].kind == TokenKind::Ident
    {
        segments.push(tokens[next + 1].ident_text(source).to_string());
        spans.push(tokens[next + 1].span);
        next += 2;
    }
    Some((segments, spans, next))
}

/// Index of the matching `)` for the `(` at `open`, balancing nested parens.
pub fn find_matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Split the tokens strictly between `(` and `)` into arguments at top-level
/// commas.
pub fn split_arguments(tokens: &[Token], source: &str) -> Vec<Argument> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut arg_start = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Punct('(') | TokenKind::Punct('[') | TokenKind::Punct('{') => depth += 1,
            TokenKind::Punct(')') | TokenKind::Punct(']') | TokenKind::Punct('}') => {
                depth = depth.saturating_sub(1)
            }
            TokenKind::Punct(',') if depth == 0 => {
                if let Some(arg) = parse_argument(&tokens[arg_start..i], source) {
                    args.push(arg);
                }
                arg_start = i + 1;
            }
            _ => {}
        }
    }
    if arg_start < tokens.len()
        && let Some(arg) = parse_argument(&tokens[arg_start..], source)
    {
        args.push(arg);
    }
    args
}

fn parse_argument(tokens: &[Token], source: &str) -> Option<Argument> {
    if tokens.is_empty() {
        return None;
    }
    let span = Span::new(tokens[0].span.start, tokens[tokens.len() - 1].span.end);
    Some(Argument {
        expr: parse_arg_expr(tokens, source, span),
        span,
    })
}

fn parse_arg_expr(tokens: &[Token], source: &str, span: Span) -> ArgExpr {
    // Single string literal.
    if tokens.len() == 1
        && let TokenKind::Str(_) = tokens[0].kind
    {
        return ArgExpr::Str { token: tokens[0] };
    }

    // nameof(path)
    if tokens.len() >= 4
        && tokens[0].is_ident(source, "nameof")
        && tokens[1].is_punct('(')
        && tokens[tokens.len() - 1].is_punct(')')
        && let Some((path, _, next)) = read_path(tokens, source, 2)
        && next == tokens.len() - 1
    {
        return ArgExpr::NameOf { path, span };
    }

    // Bare path, possibly ending in .ToString().
    if let Some((segments, _, next)) = read_path(tokens, source, 0) {
        if next == tokens.len() {
            return ArgExpr::Path { segments, span };
        }
        if next == tokens.len() - 2
            && segments.last().is_some_and(|s| s == "ToString")
            && segments.len() >= 2
            && tokens[next].is_punct('(')
            && tokens[next + 1].is_punct(')')
        {
            return ArgExpr::Stringified { span };
        }
    }

    ArgExpr::Other { span }
}

/// Decode the content of a string-literal token, if it is a form that can be
/// a static key (regular or verbatim, not interpolated/raw).
pub fn literal_content(token: &Token, source: &str) -> Option<String> {
    let text = token.text(source);
    match token.kind {
        TokenKind::Str(StringFlavor::Regular) => {
            let inner = text.strip_prefix('"')?.strip_suffix('"').unwrap_or(text);
            Some(unescape(inner))
        }
        TokenKind::Str(StringFlavor::Verbatim) => {
            let inner = text
                .strip_prefix("@\"")?
                .strip_suffix('"')
                .unwrap_or(text);
            Some(inner.replace("\"\"", "\""))
        }
        _ => None,
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            // Unknown escape: keep it verbatim rather than guessing.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
