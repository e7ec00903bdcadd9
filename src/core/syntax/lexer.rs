//! C# token scanner.
//!
//! Produces a flat token stream with byte spans. Only the token shapes the
//! classifier cares about are distinguished; everything else comes out as
//! single-character punctuation. Comments are collected separately so the
//! suppression scanner can see them while expression reading skips them.
//!
//! String literals carry their flavor so the interpolation fix can preserve
//! it (`"…"`, `@"…"`, `$"…"`, `$@"…"`, `"""…"""`).

use crate::core::data::Span;

/// Flavor of a C# string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFlavor {
    /// `"abc"` with backslash escapes.
    Regular,
    /// `@"abc"` with doubled-quote escapes.
    Verbatim,
    /// `$"abc {x}"`.
    Interpolated,
    /// `$@"abc {x}"` or `@$"abc {x}"`.
    InterpolatedVerbatim,
    /// `"""abc"""` (C# 11 raw strings, interpolated or not).
    Raw,
}

impl StringFlavor {
    /// True when the literal already supports interpolation holes.
    pub fn is_interpolated(&self) -> bool {
        matches!(
            self,
            StringFlavor::Interpolated | StringFlavor::InterpolatedVerbatim
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword, including `@verbatim` identifiers.
    Ident,
    /// String literal of any flavor.
    Str(StringFlavor),
    /// Character literal.
    Char,
    /// Numeric literal.
    Number,
    /// A single punctuation character.
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Raw token text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Identifier text with any `@` verbatim prefix stripped.
    pub fn ident_text<'a>(&self, source: &'a str) -> &'a str {
        self.text(source).trim_start_matches('@')
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn is_ident(&self, source: &str, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.ident_text(source) == name
    }
}

/// A comment with its span (text includes the `//` or `/*` markers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub span: Span,
}

/// Token stream plus comments for one file.
#[derive(Debug, Clone)]
pub struct ScannedSource {
    pub tokens: Vec<Token>,
    pub comments: Vec<Comment>,
}

/// Scan C# source into tokens. Never fails: unrecognized bytes become
/// punctuation tokens, unterminated literals run to end of input.
pub fn scan_tokens(source: &str) -> ScannedSource {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
    comments: Vec<Comment>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            tokens: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn run(mut self) -> ScannedSource {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let b = self.bytes[self.pos];
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.pos += 1;
                }
                b'/' if self.peek(1) == Some(b'/') => {
                    self.skip_line();
                    self.comments.push(Comment {
                        span: Span::new(start, self.pos),
                    });
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    self.pos += 2;
                    while self.pos < self.bytes.len() {
                        if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                    self.comments.push(Comment {
                        span: Span::new(start, self.pos),
                    });
                }
                // Preprocessor directive: skip the rest of the line.
                b'#' => self.skip_line(),
                b'"' => self.string_literal(start, false, false),
                b'\'' => self.char_literal(start),
                b'@' | b'$' => self.at_or_dollar(start),
                b'_' => self.identifier(start),
                b'0'..=b'9' => self.number(start),
                _ if b < 0x80 && (b as char).is_ascii_alphabetic() => self.identifier(start),
                _ if b >= 0x80 => {
                    let c = self.current_char();
                    if c.is_alphabetic() {
                        self.identifier(start);
                    } else {
                        self.pos += c.len_utf8();
                        self.push(TokenKind::Punct(c), start);
                    }
                }
                _ => {
                    self.pos += 1;
                    self.push(TokenKind::Punct(b as char), start);
                }
            }
        }

        ScannedSource {
            tokens: self.tokens,
            comments: self.comments,
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn current_char(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.pos),
        });
    }

    fn skip_line(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    /// `@` and `$` start verbatim identifiers or prefixed string literals.
    fn at_or_dollar(&mut self, start: usize) {
        let first = self.bytes[self.pos];
        let second = self.peek(1);
        match (first, second) {
            (b'@', Some(b'"')) => {
                self.pos += 1;
                self.string_literal(start, true, false);
            }
            (b'$', Some(b'"')) => {
                self.pos += 1;
                self.string_literal(start, false, true);
            }
            (b'@', Some(b'$')) | (b'$', Some(b'@')) if self.peek(2) == Some(b'"') => {
                self.pos += 2;
                self.string_literal(start, true, true);
            }
            (b'@', Some(c)) if c == b'_' || (c as char).is_ascii_alphabetic() || c >= 0x80 => {
                self.pos += 1;
                self.identifier(start);
            }
            _ => {
                self.pos += 1;
                self.push(TokenKind::Punct(first as char), start);
            }
        }
    }

    fn identifier(&mut self, start: usize) {
        while self.pos < self.bytes.len() {
            let c = self.current_char();
            if c == '_' || c.is_alphanumeric() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        self.push(TokenKind::Ident, start);
    }

    fn number(&mut self, start: usize) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else if b == b'.' && self.peek(1).is_some_and(|d| d.is_ascii_digit()) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.push(TokenKind::Number, start);
    }

    fn char_literal(&mut self, start: usize) {
        self.pos += 1; // opening '
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b'\'' => {
                    self.pos += 1;
                    break;
                }
                b'\n' => break, // unterminated
                _ => self.pos += 1,
            }
        }
        self.push(TokenKind::Char, start);
    }

    /// Called with `self.pos` at the opening quote; `start` covers prefixes.
    fn string_literal(&mut self, start: usize, verbatim: bool, interpolated: bool) {
        // Raw string: three or more quotes in a row.
        if self.peek(1) == Some(b'"') && self.peek(2) == Some(b'"') {
            self.raw_string(start);
            return;
        }

        self.pos += 1; // opening quote
        if verbatim {
            self.verbatim_body(interpolated);
        } else {
            self.regular_body(interpolated);
        }

        let flavor = match (verbatim, interpolated) {
            (false, false) => StringFlavor::Regular,
            (true, false) => StringFlavor::Verbatim,
            (false, true) => StringFlavor::Interpolated,
            (true, true) => StringFlavor::InterpolatedVerbatim,
        };
        self.push(TokenKind::Str(flavor), start);
    }

    fn regular_body(&mut self, interpolated: bool) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return;
                }
                b'{' if interpolated => {
                    if self.peek(1) == Some(b'{') {
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        self.interpolation_hole();
                    }
                }
                b'\n' => return, // unterminated
                _ => self.pos += 1,
            }
        }
    }

    fn verbatim_body(&mut self, interpolated: bool) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'"' => {
                    if self.peek(1) == Some(b'"') {
                        self.pos += 2; // doubled quote escape
                    } else {
                        self.pos += 1;
                        return;
                    }
                }
                b'{' if interpolated => {
                    if self.peek(1) == Some(b'{') {
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        self.interpolation_hole();
                    }
                }
                _ => self.pos += 1,
            }
        }
    }

    /// Skip a `{…}` interpolation hole, balancing braces and stepping over
    /// nested string literals so an embedded `"}"` does not end the hole.
    fn interpolation_hole(&mut self) {
        let mut depth = 1usize;
        while self.pos < self.bytes.len() && depth > 0 {
            match self.bytes[self.pos] {
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' => {
                    depth -= 1;
                    self.pos += 1;
                }
                b'"' => {
                    self.pos += 1;
                    self.regular_body(false);
                }
                b'\'' => {
                    let start = self.pos;
                    self.char_literal(start);
                    self.tokens.pop(); // char_literal pushed a token we don't want
                }
                _ => self.pos += 1,
            }
        }
    }

    fn raw_string(&mut self, start: usize) {
        let mut quotes = 0;
        while self.peek(quotes) == Some(b'"') {
            quotes += 1;
        }
        self.pos += quotes;
        // Find a closing run of the same length.
        loop {
            match self.bytes[self.pos..].iter().position(|&b| b == b'"') {
                Some(i) => {
                    self.pos += i;
                    let mut run = 0;
                    while self.peek(run) == Some(b'"') {
                        run += 1;
                    }
                    self.pos += run;
                    if run >= quotes {
                        break;
                    }
                }
                None => {
                    self.pos = self.bytes.len();
                    break;
                }
            }
        }
        self.push(TokenKind::Str(StringFlavor::Raw), start);
    }
}
