//! Issue types for resource-key analysis results.
//!
//! Each issue is self-contained with everything needed by:
//! - the reporter, to display it (severity, location, message, details)
//! - the fix engine, to rewrite it (spans and replacement payloads)

use enum_dispatch::enum_dispatch;

use crate::core::data::{EntryContext, SourceContext, Span};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    LiteralKey,
    PreferWrapper,
    RawResource,
    DuplicateValue,
    KeyConvention,
    CultureOrphan,
    FormatLiteral,
    ParseError,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::MissingKey => "missing-key",
            Rule::LiteralKey => "literal-key",
            Rule::PreferWrapper => "prefer-wrapper",
            Rule::RawResource => "raw-resource",
            Rule::DuplicateValue => "duplicate-value",
            Rule::KeyConvention => "key-convention",
            Rule::CultureOrphan => "culture-orphan",
            Rule::FormatLiteral => "format-literal",
            Rule::ParseError => "parse-error",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Issue Types - Call Sites (SourceContext)
// ============================================================

/// Key used at a call site but missing from the accessor's member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    /// The key that has no matching member.
    pub key: String,
    /// Accessor type the key was checked against.
    pub accessor: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key passed as a literal, foreign member access or `ToString()` call
/// instead of a symbolic reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralKeyIssue {
    pub context: SourceContext,
    /// The key text, when statically known (a literal).
    pub key: Option<String>,
    /// Accessor type in scope at the call site.
    pub accessor: String,
    /// Replacement expression (`nameof(Resources.Key)`), present only when
    /// a matching member exists — the fix precondition.
    pub replacement: Option<String>,
    /// Span of the key argument to rewrite.
    pub span: Span,
}

impl LiteralKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LiteralKey
    }
}

/// Generic translate call where a project wrapper exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferWrapperIssue {
    pub context: SourceContext,
    /// Minimally qualified replacement call, e.g.
    /// `Translate.Key(nameof(Resources.Key))`.
    pub replacement: String,
    /// Span of the whole invocation to rewrite.
    pub span: Span,
}

impl PreferWrapperIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PreferWrapper
    }
}

/// Raw accessor member used as a string, bypassing the wrapper's error
/// handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResourceIssue {
    pub context: SourceContext,
    pub accessor: String,
    pub member: String,
    /// Replacement call, e.g. `Translate.Key(nameof(Resources.Key))`.
    pub replacement: String,
    /// Span of the member access to rewrite.
    pub span: Span,
}

impl RawResourceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::RawResource
    }
}

/// Non-interpolated string literal containing a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLiteralIssue {
    pub context: SourceContext,
    /// Raw literal text, e.g. `@"abc {1}"`.
    pub literal: String,
    /// Span of the literal token.
    pub span: Span,
}

impl FormatLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::FormatLiteral
    }
}

// ============================================================
// Issue Types - Resource Tables (EntryContext)
// ============================================================

/// Two or more entries in the default table share an identical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValueIssue {
    pub context: EntryContext,
    /// The other keys carrying the same value.
    pub duplicates: Vec<String>,
}

impl DuplicateValueIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateValue
    }
}

/// Generated member name does not match the name derived from its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConventionIssue {
    pub context: EntryContext,
    /// The name the key should have — consumed by the rename fix.
    pub suggested: String,
}

impl KeyConventionIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::KeyConvention
    }
}

/// Key present in a culture variant but not in the default key universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureOrphanIssue {
    pub context: EntryContext,
    /// Accessor whose member set defines the key universe.
    pub accessor: String,
}

impl CultureOrphanIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::CultureOrphan
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be read or scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A resource-key issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    LiteralKey(LiteralKeyIssue),
    PreferWrapper(PreferWrapperIssue),
    RawResource(RawResourceIssue),
    DuplicateValue(DuplicateValueIssue),
    KeyConvention(KeyConventionIssue),
    CultureOrphan(CultureOrphanIssue),
    FormatLiteral(FormatLiteralIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::LiteralKey(_) => LiteralKeyIssue::severity(),
            Issue::PreferWrapper(_) => PreferWrapperIssue::severity(),
            Issue::RawResource(_) => RawResourceIssue::severity(),
            Issue::DuplicateValue(_) => DuplicateValueIssue::severity(),
            Issue::KeyConvention(_) => KeyConventionIssue::severity(),
            Issue::CultureOrphan(_) => CultureOrphanIssue::severity(),
            Issue::FormatLiteral(_) => FormatLiteralIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::LiteralKey(_) => LiteralKeyIssue::rule(),
            Issue::PreferWrapper(_) => PreferWrapperIssue::rule(),
            Issue::RawResource(_) => RawResourceIssue::rule(),
            Issue::DuplicateValue(_) => DuplicateValueIssue::rule(),
            Issue::KeyConvention(_) => KeyConventionIssue::rule(),
            Issue::CultureOrphan(_) => CultureOrphanIssue::rule(),
            Issue::FormatLiteral(_) => FormatLiteralIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has a source line for context display).
    Source(&'a SourceContext),
    /// Resource-entry location in a generated file.
    Entry(&'a EntryContext),
    /// File-level only (for parse errors).
    File { path: &'a str },
}

/// Trait implemented by all issue types for a consistent reporting
/// interface. Uses `enum_dispatch` for zero-cost dispatch on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, literal, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("no member {}.{}", self.accessor, self.key))
    }
}

impl Report for LiteralKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => "non-symbolic key".to_string(),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        self.replacement
            .as_ref()
            .map(|replacement| format!("use {}", replacement))
    }
}

impl Report for PreferWrapperIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.replacement.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("call {}", self.replacement))
    }
}

impl Report for RawResourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("{}.{}", self.accessor, self.member)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("use {}", self.replacement))
    }
}

impl Report for FormatLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.literal.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("make the literal interpolated".to_string())
    }
}

impl Report for DuplicateValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") also the value of: {}",
            self.context.value,
            self.duplicates.join(", ")
        ))
    }
}

impl Report for KeyConventionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("expected name {}", self.suggested))
    }
}

impl Report for CultureOrphanIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") not a key of {}",
            self.context.value, self.accessor
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => &ctx.location.file_path,
            ReportLocation::Entry(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            ReportLocation::Entry(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.col,
            ReportLocation::Entry(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
