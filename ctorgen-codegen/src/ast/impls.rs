//! Rust impl block builder.

use super::{Fn, generic_list, render};
use crate::builder::{CodeFragment, Renderable};

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Vec<String>,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    /// Create an impl block for `type_name`, including any type arguments
    /// (e.g. `"Controller<V>"`).
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: Vec::new(),
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Declare a generic parameter on the impl (`impl<V> ...`).
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    fn header(&self) -> String {
        let generics = generic_list(&self.generics);
        match &self.trait_name {
            Some(trait_name) => format!(
                "impl{} {} for {} {{",
                generics, trait_name, self.type_name
            ),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }

    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect();

        vec![CodeFragment::braced(self.header(), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Param, Vis};

    #[test]
    fn test_empty_impl() {
        let i = Impl::new("Foo").build();
        assert_eq!(i, "impl Foo {\n}\n");
    }

    #[test]
    fn test_generic_impl() {
        let i = Impl::new("Controller<V>")
            .generic("V")
            .method(
                Fn::new("request")
                    .vis(Vis::Private)
                    .param(Param::self_ref())
                    .returns("Option<&V>")
                    .line("self.request.as_ref()"),
            )
            .build();
        assert_eq!(
            i,
            "impl<V> Controller<V> {\n    fn request(&self) -> Option<&V> {\n        self.request.as_ref()\n    }\n}\n"
        );
    }

    #[test]
    fn test_impl_for_trait() {
        let i = Impl::new("ControllerArgs<V>")
            .generic("V")
            .for_trait("Default")
            .method(Fn::new("default").vis(Vis::Private).returns("Self"))
            .build();
        assert!(i.starts_with("impl<V> Default for ControllerArgs<V> {"));
        assert!(i.contains("    fn default() -> Self {"));
    }

    #[test]
    fn test_blank_line_between_methods() {
        let i = Impl::new("Foo")
            .method(Fn::new("bar"))
            .method(Fn::new("baz"))
            .build();
        assert!(i.contains("    pub fn bar() {\n    }\n\n    pub fn baz() {\n    }\n"));
    }
}
