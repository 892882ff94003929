use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Generated file location used when `[output] path` is omitted.
pub const DEFAULT_OUTPUT_PATH: &str = "src/generated.rs";

const DEFAULT_INDENT: u8 = 4;

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the generated Rust file, relative to the manifest
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Header comment replacing the default generated-code notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Indent width in spaces, or 0 for tabs
    #[serde(default = "default_indent")]
    pub indent: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            header: None,
            indent: DEFAULT_INDENT,
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_indent() -> u8 {
    DEFAULT_INDENT
}
