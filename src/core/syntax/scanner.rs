//! Per-file candidate collection.
//!
//! One pass over the token stream produces everything the rules need from a
//! file: candidate invocations and member paths, every string-literal token,
//! and the suppression directives found in comments.

use std::collections::{HashMap, HashSet};

use crate::core::data::{LineIndex, Span};
use crate::core::syntax::expr::{
    Candidate, CandidateKind, find_matching_paren, read_path, split_arguments,
};
use crate::core::syntax::lexer::{ScannedSource, Token, TokenKind, scan_tokens};

const DISABLE_LINE: &str = "resxlint-disable-line";
const DISABLE_NEXT_LINE: &str = "resxlint-disable-next-line";

/// Lines on which rules are suppressed via disable comments.
///
/// `None` for a line means all suppressible rules are disabled there.
#[derive(Debug, Clone, Default)]
pub struct Suppressions {
    lines: HashMap<usize, Option<HashSet<String>>>,
}

impl Suppressions {
    pub fn is_suppressed(&self, line: usize, rule: &str) -> bool {
        match self.lines.get(&line) {
            Some(None) => true,
            Some(Some(rules)) => rules.contains(rule),
            None => false,
        }
    }

    fn disable(&mut self, line: usize, rules: Option<HashSet<String>>) {
        use std::collections::hash_map::Entry;
        match self.lines.entry(line) {
            Entry::Occupied(mut entry) => {
                let merged = match (entry.get_mut().take(), rules) {
                    (Some(mut existing), Some(new)) => {
                        existing.extend(new);
                        Some(existing)
                    }
                    // Either side disabling all rules wins.
                    _ => None,
                };
                *entry.get_mut() = merged;
            }
            Entry::Vacant(entry) => {
                entry.insert(rules);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything extracted from one source file in a single scan.
#[derive(Debug, Clone)]
pub struct FileScan {
    pub candidates: Vec<Candidate>,
    pub string_literals: Vec<Token>,
    pub suppressions: Suppressions,
    pub line_index: LineIndex,
}

/// Scan a file's text into candidates, literals and suppressions.
pub fn scan_file(source: &str) -> FileScan {
    let scanned = scan_tokens(source);
    let line_index = LineIndex::new(source);
    let suppressions = collect_suppressions(source, &scanned, &line_index);
    let string_literals = scanned
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Str(_)))
        .copied()
        .collect();
    let candidates = collect_candidates(&scanned.tokens, source);

    FileScan {
        candidates,
        string_literals,
        suppressions,
        line_index,
    }
}

fn collect_candidates(tokens: &[Token], source: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut nameof_spans: Vec<Span> = Vec::new();

    let mut i = 0usize;
    while i < tokens.len() {
        // A path can only start where the previous token is not a dot
        // (otherwise we would re-read the tail of an enclosing path).
        let starts_path = tokens[i].kind == TokenKind::Ident
            && (i == 0 || !tokens[i - 1].is_punct('.'));
        if !starts_path {
            i += 1;
            continue;
        }

        let Some((segments, segment_spans, next)) = read_path(tokens, source, i) else {
            i += 1;
            continue;
        };
        let path_span = Span::new(segment_spans[0].start, segment_spans[segments.len() - 1].end);

        if tokens.get(next).is_some_and(|t| t.is_punct('(')) {
            if let Some(close) = find_matching_paren(tokens, next) {
                let full_span = Span::new(path_span.start, tokens[close].span.end);
                if segments.len() == 1 && segments[0] == "nameof" {
                    nameof_spans.push(full_span);
                } else {
                    let args = split_arguments(&tokens[next + 1..close], source);
                    candidates.push(Candidate {
                        kind: CandidateKind::Invocation {
                            path: segments,
                            path_span,
                            args,
                        },
                        span: full_span,
                        in_nameof: false,
                    });
                }
            }
            // Keep scanning inside the argument list for nested candidates.
            i = next + 1;
        } else {
            if segments.len() >= 2 {
                candidates.push(Candidate {
                    kind: CandidateKind::MemberPath {
                        segments,
                        segment_spans,
                    },
                    span: path_span,
                    in_nameof: false,
                });
            }
            i = next;
        }
    }

    for candidate in &mut candidates {
        candidate.in_nameof = nameof_spans
            .iter()
            .any(|n| candidate.span.start >= n.start && candidate.span.end <= n.end);
    }

    candidates
}

fn collect_suppressions(
    source: &str,
    scanned: &ScannedSource,
    line_index: &LineIndex,
) -> Suppressions {
    let mut suppressions = Suppressions::default();
    for comment in &scanned.comments {
        let text = comment
            .span
            .text(source)
            .trim_start_matches('/')
            .trim_start_matches('*')
            .trim_end_matches('/')
            .trim_end_matches('*')
            .trim();
        let (directive, offset) = if let Some(rest) = text.strip_prefix(DISABLE_NEXT_LINE) {
            (rest, 1)
        } else if let Some(rest) = text.strip_prefix(DISABLE_LINE) {
            (rest, 0)
        } else {
            continue;
        };

        let rules: HashSet<String> = directive
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();
        let (line, _) = line_index.location(source, comment.span.start);
        suppressions.disable(
            line + offset,
            if rules.is_empty() { None } else { Some(rules) },
        );
    }
    suppressions
}
