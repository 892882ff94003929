//! Check command report data structures.

use std::path::PathBuf;

use super::{
    TypeSummary, plural,
    output::{Line, Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Style warnings that do not block generation.
    pub warnings: Vec<String>,
    pub types: Vec<TypeSummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.emit(Line::Warning(warning));
        }
        if !self.warnings.is_empty() {
            out.emit(Line::Blank);
        }

        out.emit(Line::Text(&format!("✓ {} is valid", self.config_path.display())));
        out.emit(Line::Blank);
        out.emit(Line::Text(&format!("  {}:", plural(self.types.len(), "type"))));
        for summary in &self.types {
            out.emit(Line::Text(&format!("    {}", summary.signature())));
        }
    }
}
