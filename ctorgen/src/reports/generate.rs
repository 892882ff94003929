//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    TypeSummary, plural,
    output::{Line, Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub types: Vec<TypeSummary>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The output file was (re)written.
    Written(PathBuf),
    /// The output file was already up to date.
    Unchanged(PathBuf),
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let path = match &self.result {
            GenerationResult::Preview { path, content } => {
                out.emit(Line::Rule(&path.display().to_string()));
                out.emit(Line::Text(content.trim_end()));
                out.emit(Line::Rule("Summary"));
                let summary = format!("{} would be generated", plural(self.types.len(), "type"));
                out.emit(Line::Text(&summary));
                return;
            }
            GenerationResult::Written(path) | GenerationResult::Unchanged(path) => path,
        };

        out.emit(Line::Heading(&format!("Types ({})", self.types.len())));
        for summary in &self.types {
            out.emit(Line::Item(&summary.signature()));
        }
        out.emit(Line::Blank);

        let shown = path.display().to_string();
        if let GenerationResult::Written(_) = self.result {
            out.emit(Line::Heading("Generated"));
            out.emit(Line::Added(&shown));
        } else {
            out.emit(Line::Text(&format!("{} is up to date", shown)));
        }
    }
}
