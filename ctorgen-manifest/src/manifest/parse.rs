//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use ctorgen_core::Binding;

use super::{Manifest, TypeConfig, validate::ParseContext};
use crate::{
    Error, NameIssue, Result,
    error::SourceContext,
};

/// Indent widths accepted in `[output] indent`; 0 selects tabs.
const INDENT_WIDTHS: &[u8] = &[0, 2, 4, 8];

/// Attribute names that would collide with generated items.
const RESERVED_ATTRIBUTES: &[&str] = &["new"];

/// Names generated code refers to without a path.
const RELIED_ON: &[&str] = &["Default", "None", "Option", "Some", "str"];

/// Type parameter of generated structs without a `value_type`.
const VALUE_PARAM: &str = "V";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "ctorgen.toml")
    }
}

impl Manifest {
    /// Parse a ctorgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a ctorgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &ParseContext::new(&source))?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    if !INDENT_WIDTHS.contains(&manifest.output.indent) {
        return Err(ctx.source().invalid(
            format!(
                "indent must be 0 (tabs), 2, 4 or 8, got {}",
                manifest.output.indent
            ),
            ctx.key_span("output", "indent"),
        ));
    }

    for (name, config) in &manifest.types {
        ctx.validate_name(name, "type")?;
        validate_type_name(ctx, manifest, name, config)?;
        let type_ctx = ctx.table("types", name);
        validate_type(&type_ctx, name, config)?;
    }
    Ok(())
}

/// Reject type names that would make the generated file fail to compile.
fn validate_type_name(
    ctx: &ParseContext<'_>,
    manifest: &Manifest,
    name: &str,
    config: &TypeConfig,
) -> Result<()> {
    let shadows_param = name == VALUE_PARAM && config.value_type.is_none();
    let issue = if RELIED_ON.contains(&name) || shadows_param {
        NameIssue::Shadows
    } else if is_recursive(manifest, name) {
        NameIssue::Recursive
    } else if manifest.types.iter().any(|(other, other_config)| {
        other_config.constructor().binding() == Binding::Kwargs
            && name.strip_suffix("Args") == Some(other.as_str())
    }) {
        NameIssue::ArgsStruct
    } else {
        return Ok(());
    };
    Err(ctx
        .source()
        .invalid_name(name, ctx.describe("type"), issue, ctx.find_span(name)))
}

/// Whether following `value_type` through declared types leads back to `name`.
fn is_recursive(manifest: &Manifest, name: &str) -> bool {
    let mut current = name;
    for _ in 0..manifest.types.len() {
        let next = manifest
            .get(current)
            .and_then(|config| config.value_type.as_deref())
            .map(str::trim);
        match next {
            Some(next) if next == name => return true,
            Some(next) if manifest.types.contains_key(next) => current = next,
            _ => return false,
        }
    }
    false
}

fn validate_type(ctx: &ParseContext<'_>, name: &str, config: &TypeConfig) -> Result<()> {
    if config.attributes.is_empty() {
        return Err(ctx.source().invalid(
            format!("type '{}' declares no attributes", name),
            ctx.header_span(),
        ));
    }

    let mut seen = HashSet::new();
    for attribute in &config.attributes {
        ctx.validate_name(attribute, "attribute")?;

        if RESERVED_ATTRIBUTES.contains(&attribute.as_str()) {
            return Err(ctx.source().invalid_name(
                attribute,
                ctx.describe("attribute"),
                NameIssue::Generated,
                ctx.find_span(attribute),
            ));
        }

        if !seen.insert(attribute.as_str()) {
            let source = ctx.source();
            return Err(
                match (ctx.find_nth_span(attribute, 0), ctx.find_nth_span(attribute, 1)) {
                    (Some(first), Some(second)) => {
                        source.duplicate_attribute(attribute, name, first, second)
                    }
                    _ => source.invalid(
                        format!("duplicate attribute '{}' in type '{}'", attribute, name),
                        None,
                    ),
                },
            );
        }
    }

    if let Some(ty) = &config.value_type
        && ty.trim().is_empty()
    {
        return Err(ctx.source().invalid(
            format!("type '{}' has an empty value_type", name),
            ctx.header_span(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ctorgen_core::Visibility;

    use super::*;
    use crate::manifest::BindingChoice;

    fn parse_err(src: &str) -> Error {
        *Manifest::from_str(src).unwrap_err()
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [output]
            path = "src/models.rs"
            header = "// models"
            indent = 2

            [types.Controller]
            description = "Handles requests"
            attributes = ["request", "response"]

            [types.Config]
            attributes = ["host", "port"]
            visibility = "public"
            binding = "hash"
            value_type = "String"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.output.path, PathBuf::from("src/models.rs"));
        assert_eq!(manifest.output.header.as_deref(), Some("// models"));
        assert_eq!(manifest.output.indent, 2);

        let names: Vec<_> = manifest.types.keys().map(String::as_str).collect();
        assert_eq!(names, ["Controller", "Config"]);

        let controller = manifest.get("Controller").unwrap();
        assert_eq!(controller.visibility, Visibility::Private);
        assert_eq!(controller.binding, BindingChoice::Default);
        assert_eq!(controller.description.as_deref(), Some("Handles requests"));

        let config = manifest.get("Config").unwrap();
        assert_eq!(config.visibility, Visibility::Public);
        assert_eq!(config.binding, BindingChoice::Hash);
        assert_eq!(config.value_type.as_deref(), Some("String"));
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.is_empty());
        assert_eq!(manifest.output.path, PathBuf::from("src/generated.rs"));
        assert_eq!(manifest.output.header, None);
        assert_eq!(manifest.output.indent, 4);
    }

    #[test]
    fn test_unknown_binding_is_parse_error() {
        let err = parse_err("[types.A]\nattributes = [\"x\"]\nbinding = \"varargs\"\n");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse_err("[types.A]\nattributes = [\"x\"]\nreaders = true\n");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_type_name() {
        let err = parse_err("[types.struct]\nattributes = [\"x\"]\n");
        match err {
            Error::InvalidName {
                name, kind, issue, ..
            } => {
                assert_eq!(name, "struct");
                assert_eq!(kind, "type");
                assert_eq!(issue, NameIssue::Keyword);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_keyword_attribute() {
        let err = parse_err("[types.A]\nattributes = [\"type\"]\n");
        match err {
            Error::InvalidName { name, kind, .. } => {
                assert_eq!(name, "type");
                assert_eq!(kind, "attribute in 'types.A'");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_attribute_identifier() {
        let err = parse_err("[types.A]\nattributes = [\"my-field\"]\n");
        assert!(matches!(
            err,
            Error::InvalidName {
                issue: NameIssue::Malformed(_),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_attributes() {
        let err = parse_err("[types.A]\nattributes = []\n");
        match err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "type 'A' declares no attributes");
                assert_eq!(span.map(|s| s.offset()), Some(7));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reserved_attribute_name() {
        let err = parse_err("[types.A]\nattributes = [\"new\"]\n");
        match err {
            Error::InvalidName { issue, span, .. } => {
                assert_eq!(issue, NameIssue::Generated);
                assert_eq!(span.map(|s| s.offset()), Some(25));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_attribute() {
        let err = parse_err("[types.A]\nattributes = [\"x\", \"y\", \"x\"]\n");
        match err {
            Error::DuplicateAttribute {
                name,
                type_name,
                first,
                second,
                ..
            } => {
                assert_eq!(name, "x");
                assert_eq!(type_name, "A");
                assert!(first.offset() < second.offset());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_indent() {
        let err = parse_err("[output]\nindent = 3\n");
        match err {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("got 3"));
                assert_eq!(span.map(|s| s.offset()), Some(9));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_indent_points_into_output_table() {
        let src = "[types.A]\nattributes = [\"indent\"]\n\n[output]\nindent = 12\n";
        match parse_err(src) {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("got 12"));
                assert_eq!(span.map(|s| s.offset()), src.find("indent = 12"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn type_name_issue(src: &str) -> (String, NameIssue) {
        match parse_err(src) {
            Error::InvalidName {
                name, kind, issue, ..
            } => {
                assert_eq!(kind, "type");
                (name, issue)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_type_shadowing_prelude_names() {
        for name in ["Option", "Some", "None", "Default", "str"] {
            let src = format!("[types.{}]\nattributes = [\"x\"]\nbinding = \"kwargs\"\n", name);
            assert_eq!(type_name_issue(&src), (name.to_string(), NameIssue::Shadows));
        }
    }

    #[test]
    fn test_type_named_like_value_param() {
        let (_, issue) = type_name_issue("[types.V]\nattributes = [\"x\"]\n");
        assert_eq!(issue, NameIssue::Shadows);

        let concrete = Manifest::from_str("[types.V]\nattributes = [\"x\"]\nvalue_type = \"u8\"\n");
        assert!(concrete.is_ok());
    }

    #[test]
    fn test_type_colliding_with_args_struct() {
        let src = r#"
[types.Foo]
attributes = ["x"]
binding = "kwargs"

[types.FooArgs]
attributes = ["y"]
"#;
        assert_eq!(
            type_name_issue(src),
            ("FooArgs".to_string(), NameIssue::ArgsStruct)
        );

        let splat = src.replace("binding = \"kwargs\"", "binding = \"splat\"");
        assert!(Manifest::from_str(&splat).is_ok());
    }

    #[test]
    fn test_self_referential_value_type() {
        let src = "[types.String]\nattributes = [\"x\"]\nvalue_type = \"String\"\n";
        assert_eq!(
            type_name_issue(src),
            ("String".to_string(), NameIssue::Recursive)
        );
    }

    #[test]
    fn test_mutually_recursive_value_types() {
        let src = r#"
[types.A]
attributes = ["b"]
value_type = "B"

[types.B]
attributes = ["a"]
value_type = "A"
"#;
        assert_eq!(type_name_issue(src), ("A".to_string(), NameIssue::Recursive));

        let boxed = src.replace("value_type = \"A\"", "value_type = \"Box<A>\"");
        assert!(Manifest::from_str(&boxed).is_ok());
    }

    #[test]
    fn test_empty_value_type() {
        let err = parse_err("[types.A]\nattributes = [\"x\"]\nvalue_type = \" \"\n");
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_starter_serializes_to_valid_manifest() {
        let starter = Manifest::starter(
            "Controller",
            TypeConfig::new(["request", "response"]).binding(BindingChoice::Kwargs),
        );
        let content = starter.to_toml_string().unwrap();
        let parsed = Manifest::from_str(&content).unwrap();

        assert_eq!(parsed.output, starter.output);
        assert_eq!(parsed.get("Controller"), starter.get("Controller"));
    }
}
