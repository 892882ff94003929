use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Manifest errors are boxed; the diagnostic variants carry the whole source.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Why a type or attribute name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameIssue {
    /// A Rust keyword.
    Keyword,
    /// Clashes with a generated item, e.g. an attribute called `new`.
    Generated,
    /// Not a Rust identifier.
    Malformed(&'static str),
    /// Hides a name the generated code uses unqualified, e.g. `Option`.
    Shadows,
    /// Same name as the `<Name>Args` struct of a kwargs type.
    ArgsStruct,
    /// The type would contain itself through its `value_type`.
    Recursive,
}

impl NameIssue {
    fn reason(self) -> &'static str {
        match self {
            NameIssue::Keyword => "is a Rust keyword",
            NameIssue::Generated => "collides with the generated constructor",
            NameIssue::Malformed(reason) => reason,
            NameIssue::Shadows => "shadows a name the generated code relies on",
            NameIssue::ArgsStruct => "collides with the arguments struct of a kwargs type",
            NameIssue::Recursive => "contains itself through its value_type",
        }
    }

    fn hint(self, name: &str) -> String {
        match self {
            NameIssue::Keyword | NameIssue::Generated => {
                format!("pick another name, e.g. '{}_value'", name)
            }
            NameIssue::Malformed(_) => {
                "names use letters, digits and underscores and do not start with a digit"
                    .to_string()
            }
            NameIssue::Shadows => format!("pick another name, e.g. '{}Type'", name),
            NameIssue::ArgsStruct => {
                "rename this type or change the other type's binding".to_string()
            }
            NameIssue::Recursive => {
                format!("use another value_type, or add indirection such as 'Box<{}>'", name)
            }
        }
    }
}

/// The manifest text and its file name, shared by every diagnostic.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn invalid(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_name(
        &self,
        name: &str,
        kind: impl Into<String>,
        issue: NameIssue,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named(),
            span,
            name: name.to_string(),
            kind: kind.into(),
            issue,
            reason: issue.reason(),
            hint: issue.hint(name),
        })
    }

    pub fn duplicate_attribute(
        &self,
        name: &str,
        type_name: &str,
        first: SourceSpan,
        second: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateAttribute {
            src: self.named(),
            first,
            second,
            name: name.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'ctorgen init' to create a ctorgen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ctorgen.toml")]
    #[diagnostic(code(ctorgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize manifest")]
    #[diagnostic(code(ctorgen::serialize_error))]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ctorgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{kind} name '{name}' {reason}")]
    #[diagnostic(code(ctorgen::invalid_name), help("{hint}"))]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        name: String,
        /// e.g. "type" or "attribute in 'types.Controller'"
        kind: String,
        issue: NameIssue,
        reason: &'static str,
        hint: String,
    },

    #[error("duplicate attribute '{name}' in type '{type_name}'")]
    #[diagnostic(
        code(ctorgen::duplicate_attribute),
        help("each attribute of a type must be listed once")
    )]
    DuplicateAttribute {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first: SourceSpan,
        #[label("declared again here")]
        second: SourceSpan,
        name: String,
        type_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let ctx = SourceContext::new("", "ctorgen.toml");
        let err = ctx.invalid_name("fn", "type", NameIssue::Keyword, None);
        assert_eq!(err.to_string(), "type name 'fn' is a Rust keyword");
    }

    #[test]
    fn test_diagnostic_source_is_named_after_file() {
        let ctx = SourceContext::new("indent = 3", "config/ctorgen.toml");
        match *ctx.invalid("bad indent", None) {
            Error::Validation { src, .. } => assert_eq!(src.name(), "config/ctorgen.toml"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_recursive_hint_suggests_box() {
        let ctx = SourceContext::new("", "ctorgen.toml");
        let err = ctx.invalid_name("Node", "type", NameIssue::Recursive, None);
        assert_eq!(err.to_string(), "type name 'Node' contains itself through its value_type");
        assert!(NameIssue::Recursive.hint("Node").contains("Box<Node>"));
    }

    #[test]
    fn test_keyword_hint_suggests_suffix() {
        assert_eq!(NameIssue::Keyword.hint("type"), "pick another name, e.g. 'type_value'");
    }
}
