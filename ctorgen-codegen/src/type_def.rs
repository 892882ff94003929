//! Static Rust rendering of a constructor applied to a struct.
//!
//! Each attribute becomes an `Option<V>` field, so an attribute that received
//! no argument is `None`. The constructor body follows the binding strategy:
//!
//! - splat: positional values are zipped against the fields in order;
//! - hash: entries are matched by key, unknown keys fall through;
//! - kwargs: a companion `<Name>Args` struct carries the named arguments.
//!
//! Readers return `Option<&V>` with the Rust visibility mapped from the
//! constructor's [`Visibility`](ctorgen_core::Visibility).

use ctorgen_core::{Binding, Constructor};

use crate::{
    ast::{Field, Fn, Impl, Param, Struct, Vis},
    builder::{CodeFragment, Renderable},
};

/// Name of the generic value parameter used when no concrete type is set.
const VALUE_PARAM: &str = "V";

const DERIVES: [&str; 3] = ["Debug", "Clone", "PartialEq"];

/// A [`Constructor`] applied to a named Rust struct.
#[derive(Debug, Clone)]
pub struct TypeDef {
    name: String,
    constructor: Constructor,
    value_type: Option<String>,
    doc: Option<String>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            constructor,
            value_type: None,
            doc: None,
        }
    }

    /// Use a concrete type for every attribute instead of a generic `V`.
    pub fn value_type(mut self, ty: impl Into<String>) -> Self {
        self.value_type = Some(ty.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    /// Name of the named-argument struct generated for kwargs binding.
    pub fn args_name(&self) -> String {
        format!("{}Args", self.name)
    }

    fn attributes(&self) -> impl Iterator<Item = &str> {
        self.constructor.attributes().iter()
    }

    fn is_generic(&self) -> bool {
        self.value_type.is_none() && !self.constructor.attributes().is_empty()
    }

    fn generics(&self) -> Vec<String> {
        if self.is_generic() {
            vec![VALUE_PARAM.to_string()]
        } else {
            Vec::new()
        }
    }

    fn value_ty(&self) -> &str {
        self.value_type.as_deref().unwrap_or(VALUE_PARAM)
    }

    /// `Name` or `Name<V>`.
    fn applied(&self, name: &str) -> String {
        if self.is_generic() {
            format!("{}<{}>", name, VALUE_PARAM)
        } else {
            name.to_string()
        }
    }

    fn storage(&self) -> Struct {
        let ty = format!("Option<{}>", self.value_ty());
        let fields = self
            .attributes()
            .map(|name| Field::new(name, ty.clone()).vis(Vis::Private));

        let s = Struct::new(&self.name)
            .derives(DERIVES)
            .fields(fields);
        let s = self.generics().into_iter().fold(s, Struct::generic);

        match &self.doc {
            Some(doc) => s.doc(doc),
            None => s,
        }
    }

    fn args_struct(&self) -> Struct {
        let ty = format!("Option<{}>", self.value_ty());
        let s = Struct::new(self.args_name())
            .doc(format!("Named arguments for [`{}::new`].", self.name))
            .derives(DERIVES)
            .fields(self.attributes().map(|name| Field::new(name, ty.clone())));
        self.generics().into_iter().fold(s, Struct::generic)
    }

    fn args_default(&self) -> Impl {
        let default = Fn::new("default")
            .vis(Vis::Private)
            .returns("Self")
            .block(self.struct_literal("", "", |_| "None".to_string()));
        let i = Impl::new(self.applied(&self.args_name()))
            .for_trait("Default")
            .method(default);
        self.generics().into_iter().fold(i, Impl::generic)
    }

    /// `<lead>Self {`, one `name: value,` line per attribute, then `}<trail>`.
    fn struct_literal(
        &self,
        lead: &str,
        trail: &str,
        mut value: impl FnMut(&str) -> String,
    ) -> CodeFragment {
        CodeFragment::Block {
            header: format!("{}Self {{", lead),
            body: self
                .attributes()
                .map(|name| CodeFragment::line(format!("{}: {},", name, value(name))))
                .collect(),
            close: Some(format!("}}{}", trail)),
        }
    }

    fn key_match(&self) -> CodeFragment {
        let arms = self
            .attributes()
            .map(|name| CodeFragment::line(format!("\"{}\" => this.{} = Some(value),", name, name)))
            .chain([CodeFragment::line("_ => {}")])
            .collect();
        CodeFragment::braced(
            "for (key, value) in map {",
            vec![CodeFragment::braced("match key.as_ref() {", arms)],
        )
    }

    fn constructor_fn(&self) -> Fn {
        let ctor = Fn::new("new").returns("Self");
        if self.constructor.attributes().is_empty() {
            return ctor.line("Self {}");
        }

        let value_ty = self.value_ty();
        match self.constructor.binding() {
            Binding::Splat => ctor
                .doc(
                    "Bind positional values to attributes in order.\n\n\
                     Missing values leave attributes unset and surplus values are dropped.",
                )
                .param(Param::new(
                    "args",
                    format!("impl IntoIterator<Item = {}>", value_ty),
                ))
                .line("let mut args = args.into_iter();")
                .block(self.struct_literal("", "", |_| "args.next()".to_string())),
            Binding::Hash => ctor
                .doc("Assign entries whose key names an attribute. Other entries are ignored.")
                .generic("K: AsRef<str>")
                .param(Param::new(
                    "map",
                    format!("impl IntoIterator<Item = (K, {})>", value_ty),
                ))
                .block(self.struct_literal("let mut this = ", ";", |_| "None".to_string()))
                .block(self.key_match())
                .line("this"),
            Binding::Kwargs => ctor
                .doc("Assign the named arguments that were provided.")
                .param(Param::new("args", self.applied(&self.args_name())))
                .block(self.struct_literal("", "", |name| format!("args.{}", name))),
        }
    }

    fn readers(&self) -> Vec<Fn> {
        let vis = Vis::from(self.constructor.visibility());
        self.attributes()
            .map(|name| {
                let reader = Fn::new(name)
                    .vis(vis)
                    .param(Param::self_ref())
                    .returns(format!("Option<&{}>", self.value_ty()))
                    .line(format!("self.{}.as_ref()", name));
                if vis.is_public() {
                    reader
                } else {
                    reader.attr("allow(dead_code)")
                }
            })
            .collect()
    }

    fn methods(&self) -> Impl {
        let i = Impl::new(self.applied(&self.name))
            .method(self.constructor_fn())
            .methods(self.readers());
        self.generics().into_iter().fold(i, Impl::generic)
    }
}

impl Renderable for TypeDef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.storage().to_fragments();

        if self.constructor.binding() == Binding::Kwargs
            && !self.constructor.attributes().is_empty()
        {
            fragments.push(CodeFragment::Blank);
            fragments.extend(self.args_struct().to_fragments());
            fragments.push(CodeFragment::Blank);
            fragments.extend(self.args_default().to_fragments());
        }

        fragments.push(CodeFragment::Blank);
        fragments.extend(self.methods().to_fragments());
        fragments
    }
}
