//! Generate operation - Rust code from the manifest.

use std::path::Path;

use ctorgen_codegen::{Generator, TypeDef, WriteResult, builder::Indent};
use ctorgen_manifest::{CtorgenToml, Manifest};
use eyre::{Context, Result};

use super::list::summarize_all;
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file, overriding `[output] path`.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(file: &CtorgenToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = file.manifest();
    let generator = generator(manifest);
    let path = match opts.output {
        Some(path) => path.to_path_buf(),
        None => file.output_path(),
    };

    let result = if opts.dry_run {
        let preview = generator.preview(&path);
        GenerationResult::Preview {
            content: preview.content().to_string(),
            path,
        }
    } else {
        let written = generator
            .generate(&path)
            .wrap_err("Failed to generate code")?;
        match written {
            WriteResult::Written => GenerationResult::Written(path),
            WriteResult::Unchanged => GenerationResult::Unchanged(path),
        }
    };

    Ok(GenerateReport {
        types: summarize_all(manifest),
        result,
    })
}

/// Build the code generator for every type in the manifest.
pub(crate) fn generator(manifest: &Manifest) -> Generator {
    let types = manifest.types.iter().map(|(name, config)| {
        let def = TypeDef::new(name, config.constructor());
        let def = match &config.value_type {
            Some(ty) => def.value_type(ty),
            None => def,
        };
        match &config.description {
            Some(doc) => def.doc(doc),
            None => def,
        }
    });

    let generator = Generator::new(types).indent(Indent::from_width(manifest.output.indent));
    match &manifest.output.header {
        Some(header) => generator.header(header),
        None => generator,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[output]
path = "out/models.rs"
header = "// models"

[types.Controller]
description = "Handles requests"
attributes = ["request", "response"]
"#;

    fn open(temp: &TempDir) -> CtorgenToml {
        let path = temp.path().join("ctorgen.toml");
        fs::write(&path, MANIFEST).unwrap();
        CtorgenToml::open(&path).unwrap()
    }

    #[test]
    fn test_generate_writes_relative_to_manifest() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        let report = generate(
            &file,
            GenerateOptions {
                output: None,
                dry_run: false,
            },
        )
        .unwrap();

        let path = temp.path().join("out/models.rs");
        assert!(matches!(&report.result, GenerationResult::Written(p) if *p == path));
        let code = fs::read_to_string(&path).unwrap();
        assert!(code.starts_with("// models\n\n/// Handles requests\n"));
        assert!(code.contains("pub struct Controller<V> {"));
    }

    #[test]
    fn test_second_generate_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);
        let opts = || GenerateOptions {
            output: None,
            dry_run: false,
        };

        generate(&file, opts()).unwrap();
        let report = generate(&file, opts()).unwrap();

        assert!(matches!(report.result, GenerationResult::Unchanged(_)));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);
        let output = temp.path().join("elsewhere.rs");

        let report = generate(
            &file,
            GenerateOptions {
                output: Some(&output),
                dry_run: true,
            },
        )
        .unwrap();

        match report.result {
            GenerationResult::Preview { path, content } => {
                assert_eq!(path, output);
                assert!(content.contains("impl<V> Controller<V> {"));
            }
            other => panic!("expected preview, got {:?}", other),
        }
        assert!(!output.exists());
    }
}
