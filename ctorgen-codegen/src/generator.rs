use std::path::PathBuf;

use eyre::Result;

use crate::{
    File, TypeDef, WriteResult,
    builder::{CodeBuilder, CodeFragment, Indent},
};

/// Header written at the top of generated files unless overridden.
pub const GENERATED_HEADER: &str = "// Code generated by ctorgen. DO NOT EDIT.";

/// Renders a set of [`TypeDef`]s into a single Rust source file.
///
/// ```
/// use ctorgen_codegen::{Generator, TypeDef};
/// use ctorgen_core::{Visibility, splat};
///
/// let code = Generator::new([TypeDef::new("Point", splat(["x", "y"], Visibility::Public))])
///     .header("// points")
///     .render();
/// assert!(code.starts_with("// points\n\n#[derive(Debug, Clone, PartialEq)]\npub struct Point<V> {"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    types: Vec<TypeDef>,
    header: String,
    indent: Indent,
}

impl Generator {
    pub fn new(types: impl IntoIterator<Item = TypeDef>) -> Self {
        Self {
            types: types.into_iter().collect(),
            header: GENERATED_HEADER.to_string(),
            indent: Indent::RUST,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    /// Render the header followed by each type, separated by blank lines.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        for line in self.header.lines() {
            builder.write(&CodeFragment::line(line));
        }
        for def in &self.types {
            builder.write(&CodeFragment::Blank).emit(def);
        }
        builder.build()
    }

    /// The file that [`generate`](Self::generate) would write.
    pub fn preview(&self, path: impl Into<PathBuf>) -> File {
        File::new(path, self.render())
    }

    /// Render and write the generated source to `path`.
    pub fn generate(&self, path: impl Into<PathBuf>) -> Result<WriteResult> {
        self.preview(path).write()
    }
}
