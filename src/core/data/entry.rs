//! Resource-entry context for the table rules.
//!
//! The table rules (`duplicate-value`, `key-convention`) report against the
//! generated accessor file rather than a call site, so their context carries
//! the key/value pair alongside the member's declaration location.

use crate::core::data::SourceLocation;

/// A resource entry anchored at its generated member declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    /// Location of the generated member declaration (designer file).
    pub location: SourceLocation,
    /// The resource key (= generated member name).
    pub key: String,
    /// The default-culture value.
    pub value: String,
    /// Declaration line text, for the report excerpt. Empty when unknown.
    pub source_line: String,
}

impl EntryContext {
    pub fn new(
        location: SourceLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
            source_line: String::new(),
        }
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = source_line.into();
        self
    }
}
