//! Writes code fragments as indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates [`CodeFragment`]s into source text, tracking block depth.
///
/// ```
/// use ctorgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.write(&CodeFragment::braced(
///     "fn main() {",
///     vec![CodeFragment::line("println!(\"Hello, world!\");")],
/// ));
///
/// assert_eq!(builder.build(), "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write(&fragment);
        }
        self
    }

    /// Write a single fragment at the current depth.
    pub fn write(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(text) => self.line(text),
            // blank lines carry no trailing whitespace
            CodeFragment::Blank => self.out.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(header);
                self.depth += 1;
                for inner in body {
                    self.write(inner);
                }
                self.depth -= 1;
                if let Some(close) = close {
                    self.line(close);
                }
            }
            CodeFragment::RustDoc(text) if text.is_empty() => self.line("///"),
            CodeFragment::RustDoc(text) => self.line(&format!("/// {}", text)),
        }
        self
    }

    pub fn build(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.indent.write(&mut self.out, self.depth);
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
