//! Resource table model.
//!
//! `.resx` documents are read for the table rules and mutated only by the
//! rename fix. Key existence at call sites is answered by the generated
//! accessor surface, not by these files.

pub mod discovery;
pub mod resx;

pub use discovery::{VariantCache, enumerate_culture_variants, find_default_resx};
pub use resx::{ResxDocument, ResxEntry};
