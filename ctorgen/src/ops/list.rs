//! List operation - type summaries from the manifest.

use ctorgen_manifest::{Manifest, TypeConfig};

use crate::reports::{ListReport, TypeSummary};

/// Execute the list operation.
pub fn list(manifest: &Manifest) -> ListReport {
    ListReport {
        types: summarize_all(manifest),
    }
}

pub(crate) fn summarize_all(manifest: &Manifest) -> Vec<TypeSummary> {
    manifest
        .types
        .iter()
        .map(|(name, config)| summarize(name, config))
        .collect()
}

fn summarize(name: &str, config: &TypeConfig) -> TypeSummary {
    let constructor = config.constructor();
    TypeSummary {
        name: name.to_string(),
        binding: constructor.binding().to_string(),
        visibility: constructor.visibility().to_string(),
        attributes: constructor.attributes().names().to_vec(),
        value_type: config.value_type.clone(),
        description: config.description.clone(),
    }
}
