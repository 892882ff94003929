use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already had this content and was not touched.
    Unchanged,
}

/// Generated source bound for a path.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn is_current(&self) -> bool {
        fs::read_to_string(&self.path).is_ok_and(|on_disk| on_disk == self.content)
    }

    /// Write the content, creating missing parent directories. Up-to-date
    /// files are left alone so their mtime does not change.
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_current() {
            return Ok(WriteResult::Unchanged);
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}
