//! Structs with named fields.

use super::{Vis, generic_list, preamble, render};
use crate::builder::{CodeFragment, Renderable};

/// A named field. Public unless told otherwise.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    vis: Vis,
    doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            vis: Vis::Public,
            doc: None,
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

    fn lower(&self) -> Vec<CodeFragment> {
        let mut out = preamble(self.doc.as_deref(), None);
        out.push(CodeFragment::line(format!(
            "{}{}: {},",
            self.vis.prefix(),
            self.name,
            self.ty
        )));
        out
    }
}

/// A struct item. An empty field list renders as `struct Name {}`.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    vis: Vis,
    doc: Option<String>,
    derives: Vec<String>,
    generics: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Vis::Public,
            doc: None,
            derives: Vec::new(),
            generics: Vec::new(),
            fields: Vec::new(),
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

    /// Traits for a single `#[derive(...)]` line.
    pub fn derives<S: Into<String>>(mut self, traits: impl IntoIterator<Item = S>) -> Self {
        self.derives.extend(traits.into_iter().map(Into::into));
        self
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(self, fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().fold(self, Self::field)
    }

    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let derive = (!self.derives.is_empty()).then(|| format!("derive({})", self.derives.join(", ")));
        let mut out = preamble(self.doc.as_deref(), &derive);

        let head = format!(
            "{}struct {}{}",
            self.vis.prefix(),
            self.name,
            generic_list(&self.generics)
        );
        if self.fields.is_empty() {
            out.push(CodeFragment::line(head + " {}"));
        } else {
            let body = self.fields.iter().flat_map(Field::lower).collect();
            out.push(CodeFragment::braced(head + " {", body));
        }
        out
    }
}
