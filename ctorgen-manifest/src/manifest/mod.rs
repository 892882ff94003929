//! Manifest types and parsing for ctorgen.toml files.

mod file;
mod output;
mod parse;
mod types;
mod validate;

pub use file::CtorgenToml;
use indexmap::IndexMap;
pub use output::{DEFAULT_OUTPUT_PATH, OutputConfig};
use serde::{Deserialize, Serialize};
pub use types::{BindingChoice, TypeConfig};

use crate::{Error, Result};

/// Root manifest for ctorgen.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how generated code is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Types to generate, in declaration order
    #[serde(default)]
    pub types: IndexMap<String, TypeConfig>,
}

impl Manifest {
    /// A manifest declaring a single type.
    pub fn starter(name: impl Into<String>, config: TypeConfig) -> Self {
        let mut types = IndexMap::new();
        types.insert(name.into(), config);
        Self {
            output: OutputConfig::default(),
            types,
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeConfig> {
        self.types.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Serialize the manifest back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}
