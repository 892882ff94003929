//! Where reports go.

use std::fmt;

/// One line of report output, described by role rather than layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Heading(&'a str),
    Item(&'a str),
    Added(&'a str),
    Warning(&'a str),
    /// A labelled horizontal rule around preformatted content.
    Rule(&'a str),
    Text(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Heading(name) => write!(f, "{}:", name),
            Line::Item(text) => write!(f, "  - {}", text),
            Line::Added(text) => write!(f, "  + {}", text),
            Line::Warning(msg) => write!(f, "warning: {}", msg),
            Line::Rule(label) => write!(f, "── {} ──", label),
            Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

pub trait Output {
    fn emit(&mut self, line: Line<'_>);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal; warnings go to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn emit(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Records rendered lines, for asserting on report output in tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn emit(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}
