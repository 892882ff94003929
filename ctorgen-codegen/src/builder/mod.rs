//! Code generation building blocks.
//!
//! - [`CodeFragment`] and [`Renderable`]: what AST nodes lower to
//! - [`CodeBuilder`]: turns fragments into indented text
//! - [`Indent`]: one level of indentation

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
