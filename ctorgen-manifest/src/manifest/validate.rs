//! Name checks and span lookup for manifest diagnostics.

use miette::SourceSpan;

use crate::{
    Result,
    error::{NameIssue, SourceContext},
};

/// The part of the manifest being validated: the whole file, or one
/// `[section.name]` table inside it.
///
/// Span lookups inside a table start at its header, so an attribute that
/// appears in several types resolves to the entry of the table at hand.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    table: Option<Table<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct Table<'a> {
    section: &'a str,
    name: &'a str,
    /// Offset of the `[section.name]` header, if the table is written that way.
    header: Option<usize>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            table: None,
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Narrow to the `[section.name]` table.
    pub fn table(&self, section: &'a str, name: &'a str) -> Self {
        let header = self.source.src().find(&format!("[{}.{}]", section, name));
        Self {
            source: self.source,
            table: Some(Table {
                section,
                name,
                header,
            }),
        }
    }

    /// `kind`, qualified by the table when there is one, e.g.
    /// "attribute in 'types.Controller'".
    pub fn describe(&self, kind: &str) -> String {
        match self.table {
            Some(t) => format!("{} in '{}.{}'", kind, t.section, t.name),
            None => kind.to_string(),
        }
    }

    fn search_from(&self) -> usize {
        self.table.and_then(|t| t.header).unwrap_or(0)
    }

    /// Where `name` appears: quoted inside the current table, otherwise as a
    /// table name anywhere in the file.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        if self.table.is_some()
            && let Some(span) = find_quoted_span(src, name, self.search_from())
        {
            return Some(span);
        }
        find_name_span(src, name)
    }

    /// The `nth` (zero-based) quoted occurrence of `name` in the current table.
    pub fn find_nth_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        let src = self.source.src();
        let mut found = find_quoted_span(src, name, self.search_from())?;
        for _ in 0..nth {
            found = find_quoted_span(src, name, found.offset() + found.len())?;
        }
        Some(found)
    }

    /// The `key` of a `key = value` line inside the `[section]` table.
    pub fn key_span(&self, section: &str, key: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let header = format!("[{}]", section);
        let mut offset = src.find(&header)? + header.len();
        for line in src[offset..].split_inclusive('\n') {
            let trimmed = line.trim_start();
            if trimmed.starts_with('[') {
                break;
            }
            if let Some(rest) = trimmed.strip_prefix(key)
                && rest.trim_start().starts_with('=')
            {
                let at = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((at, key.len())));
            }
            offset += line.len();
        }
        None
    }

    /// The table name inside its header, e.g. `Controller` in
    /// `[types.Controller]`.
    pub fn header_span(&self) -> Option<SourceSpan> {
        let t = self.table?;
        let at = t.header? + t.section.len() + 2;
        Some(SourceSpan::from((at, t.name.len())))
    }

    /// Reject names that cannot become Rust identifiers.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let issue = if is_rust_keyword(name) {
            NameIssue::Keyword
        } else if let Some(reason) = validate_identifier(name) {
            NameIssue::Malformed(reason)
        } else {
            return Ok(());
        };
        Err(self
            .source
            .invalid_name(name, self.describe(kind), issue, self.find_span(name)))
    }
}

/// Strict, reserved and weak keywords, sorted for binary search.
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn",
    "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move",
    "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "try", "type", "typeof", "union", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.binary_search(&name).is_ok()
}

/// `name` as the last or a middle segment of a dotted table header, falling
/// back to its first quoted occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    [']', '.']
        .iter()
        .find_map(|end| src.find(&format!(".{}{}", name, end)))
        .map(|dot| SourceSpan::from((dot + 1, name.len())))
        .or_else(|| find_quoted_span(src, name, 0))
}

/// The first `"name"` or `'name'` at or after `from`, excluding the quotes.
pub(crate) fn find_quoted_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let rest = src.get(from..)?;
    ['"', '\'']
        .iter()
        .filter_map(|q| rest.find(&format!("{q}{name}{q}")))
        .min()
        .map(|at| SourceSpan::from((from + at + 1, name.len())))
}

/// Why `name` is not an ASCII identifier, or `None` if it is one.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let Some(first) = name.chars().next() else {
        return Some("is empty");
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        Some("must start with a letter or underscore")
    } else if name == "_" {
        Some("is a lone underscore")
    } else if !name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Some("contains characters other than letters, digits and underscores")
    } else {
        None
    }
}
