//! Indentation units.

use std::iter::repeat_n;

/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// rustfmt's default.
    pub const RUST: Self = Self::Spaces(4);

    /// `0` selects tabs; any other width is that many spaces.
    pub fn from_width(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }

    /// Append `depth` levels of indentation to `out`.
    pub fn write(&self, out: &mut String, depth: usize) {
        match *self {
            Self::Tab => out.extend(repeat_n('\t', depth)),
            Self::Spaces(width) => out.extend(repeat_n(' ', depth * usize::from(width))),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}
