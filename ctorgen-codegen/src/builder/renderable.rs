//! The fragment IR that AST nodes lower to.

/// A piece of generated code, independent of indentation.
///
/// AST nodes lower themselves to fragments; [`CodeBuilder`](super::CodeBuilder)
/// decides how deep each line is indented.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// One `///` line; empty text renders a bare `///`.
    RustDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// One doc fragment per line of `text`.
    pub fn docs(text: &str) -> Vec<Self> {
        text.lines().map(|l| Self::RustDoc(l.to_string())).collect()
    }
}

/// Types that lower to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
