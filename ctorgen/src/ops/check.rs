//! Check operation - manifest validation and style lints.

use ctorgen_manifest::{CtorgenToml, Manifest};

use super::list::summarize_all;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already rejected invalid manifests; this collects naming-style
/// warnings and summarizes the declared types.
pub fn check(file: &CtorgenToml) -> CheckReport {
    let manifest = file.manifest();
    CheckReport {
        config_path: file.path().to_path_buf(),
        warnings: lint(manifest),
        types: summarize_all(manifest),
    }
}

fn lint(manifest: &Manifest) -> Vec<String> {
    let mut warnings = Vec::new();
    for (name, config) in &manifest.types {
        if !is_upper_camel_case(name) {
            warnings.push(format!("type '{}' should be UpperCamelCase", name));
        }
        for attribute in &config.attributes {
            if !is_snake_case(attribute) {
                warnings.push(format!(
                    "attribute '{}' of '{}' should be snake_case",
                    attribute, name
                ));
            }
        }
    }
    warnings
}

fn is_upper_camel_case(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase()) && !name.contains('_')
}

fn is_snake_case(name: &str) -> bool {
    !name.chars().any(|c| c.is_ascii_uppercase())
}
