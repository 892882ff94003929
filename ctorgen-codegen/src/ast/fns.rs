//! Functions and their parameters.

use std::fmt;

use super::{Vis, generic_list, preamble, render};
use crate::builder::{CodeFragment, Renderable};

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A receiver such as `&self`.
    Receiver(&'static str),
    Typed { name: String, ty: String },
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::Typed {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn self_ref() -> Self {
        Self::Receiver("&self")
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver(receiver) => f.write_str(receiver),
            Self::Typed { name, ty } => write!(f, "{}: {}", name, ty),
        }
    }
}

/// A function item with a braced body. Public unless told otherwise.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    vis: Vis,
    doc: Option<String>,
    attrs: Vec<String>,
    generics: Vec<String>,
    inputs: Vec<Param>,
    output: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Vis::Public,
            doc: None,
            attrs: Vec::new(),
            generics: Vec::new(),
            inputs: Vec::new(),
            output: None,
            body: Vec::new(),
        }
    }

    pub fn vis(mut self, vis: Vis) -> Self {
        self.vis = vis;
        self
    }

    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// An outer attribute, without `#[` `]`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.inputs.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.output = Some(ty.into());
        self
    }

    /// Append one statement or expression line to the body.
    pub fn line(mut self, code: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(code));
        self
    }

    /// Append a nested fragment, such as a braced block, to the body.
    pub fn block(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(Param::to_string).collect();
        let mut sig = format!(
            "{}fn {}{}({})",
            self.vis.prefix(),
            self.name,
            generic_list(&self.generics),
            inputs.join(", ")
        );
        if let Some(ty) = &self.output {
            sig.push_str(" -> ");
            sig.push_str(ty);
        }
        sig.push_str(" {");
        sig
    }

    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out = preamble(self.doc.as_deref(), &self.attrs);
        out.push(CodeFragment::braced(self.signature(), self.body.clone()));
        out
    }
}
