//! Parsing and validation for `ctorgen.toml`.
//!
//! A manifest declares the types to generate, each with its attribute list,
//! reader visibility and binding strategy. Errors are [`miette`] diagnostics
//! that point at the offending part of the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, NameIssue, Result};
pub use manifest::{
    BindingChoice, CtorgenToml, DEFAULT_OUTPUT_PATH, Manifest, OutputConfig, TypeConfig,
};
