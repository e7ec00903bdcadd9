//! resxlint - resource-key checker for C# projects
//!
//! resxlint is a CLI tool and library for checking how C# code uses
//! strongly-typed resx resources (generated accessor classes plus XML
//! resource tables). It flags missing keys, literal keys that should be
//! `nameof` references, generic translate calls that bypass project
//! wrappers, stale key names, and duplicate neutral values — and can
//! rewrite call sites and rename keys across code and every culture table.
//!
//! ## Module Structure
//!
//! - `cli`: command-line interface layer (commands and reporting)
//! - `config`: configuration file loading and parsing
//! - `core`: analysis engine (syntax scan, symbol index, classification)
//! - `fixes`: mechanical rewrites for fixable issues
//! - `issues`: issue type definitions and reporting
//! - `rules`: detection rules for resource-key issues
//! - `utils`: shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod fixes;
pub mod issues;
pub mod rules;
pub mod utils;
