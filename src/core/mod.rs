//! Core analysis engine.
//!
//! The pipeline: `context` loads the project (collection), `syntax` +
//! `classify` turn each file into call sites (extraction), and the rule
//! modules consume the shared context (analysis). `resources` models the
//! resx tables, `semantics` the symbol index, `cancel` the cooperative
//! cancellation threaded through the entry points.

pub mod cancel;
pub mod classify;
pub mod context;
pub mod data;
pub mod resources;
pub mod semantics;
pub mod syntax;

pub use cancel::CancelToken;
pub use classify::{CallSite, CallSiteKind, GenericTarget, KeyArgument, NonSymbolicReason};
pub use context::{AnalysisContext, AnalyzedFile, SourceFile};
pub use data::{EntryContext, LineIndex, SourceContext, SourceLocation, Span};
pub use resources::{ResxDocument, ResxEntry, VariantCache};
pub use semantics::{AccessorMember, AccessorType, ProjectIndex, WrapperMethod};
