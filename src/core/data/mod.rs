//! Core data types used across all analysis phases.
//!
//! - `source`: source code location types (`Span`, `SourceLocation`,
//!   `SourceContext`, `LineIndex`)
//! - `entry`: resource-table entry context for the table rules

pub mod entry;
pub mod source;

pub use entry::EntryContext;
pub use source::{LineIndex, SourceContext, SourceLocation, Span};
