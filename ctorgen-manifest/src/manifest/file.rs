use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A ctorgen.toml file with both raw content and parsed manifest.
pub struct CtorgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CtorgenToml {
    /// Open and parse a ctorgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest, against which output paths resolve.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Output path from `[output] path`, resolved against [`base_dir`](Self::base_dir).
    pub fn output_path(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.output.path)
    }
}
