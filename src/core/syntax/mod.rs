//! Lightweight C# syntax layer.
//!
//! The analyzer does not need a full C# front end: it recognizes candidate
//! expressions (invocations of translate methods, accessor member accesses,
//! string literals) and reads just enough structure out of them to classify
//! call sites. The layer is split into:
//!
//! - `lexer`: token scanner with byte spans and string-literal flavors
//! - `expr`: dotted paths, argument lists and key-argument expression forms
//! - `scanner`: per-file candidate collection plus suppression comments

pub mod expr;
pub mod lexer;
pub mod scanner;

pub use expr::{ArgExpr, Candidate, CandidateKind};
pub use lexer::{ScannedSource, StringFlavor, Token, TokenKind, scan_tokens};
pub use scanner::{FileScan, Suppressions, scan_file};
