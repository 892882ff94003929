//! Builders for the Rust items ctorgen emits: structs, impl blocks and
//! functions. Each lowers to [`CodeFragment`]s.

mod fns;
mod impls;
mod structs;
mod vis;

pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use vis::Vis;

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// `<A, B>`, or nothing when there are no parameters.
fn generic_list(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

/// Doc lines followed by `#[...]` attribute lines.
fn preamble<'a>(
    doc: Option<&str>,
    attrs: impl IntoIterator<Item = &'a String>,
) -> Vec<CodeFragment> {
    let mut out = doc.map(CodeFragment::docs).unwrap_or_default();
    out.extend(attrs.into_iter().map(|a| CodeFragment::line(format!("#[{}]", a))));
    out
}

fn render(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::rust();
    builder.emit(node);
    builder.build()
}
