//! Rust source generation for ctorgen constructors.
//!
//! A [`TypeDef`] renders a constructor as a plain Rust struct with a `new`
//! function and one reader per attribute. A [`Generator`] collects type
//! definitions into a single file.
//!
//! - [`ast`]: Rust syntax builders (Struct, Impl, Fn)
//! - [`builder`]: fragments and the indented writer

pub mod ast;
pub mod builder;
mod file;
mod generator;
mod type_def;

pub use file::{File, WriteResult};
pub use generator::{GENERATED_HEADER, Generator};
pub use type_def::TypeDef;
