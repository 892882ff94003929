//! List command report data structures.

use serde::Serialize;

use super::output::{Line, Output, Report};

/// One manifest type, with its binding resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSummary {
    pub name: String,
    /// Binding the constructor actually uses (`default` resolved)
    pub binding: String,
    pub visibility: String,
    pub attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeSummary {
    /// `Name(a, b) [splat, private]`
    pub fn signature(&self) -> String {
        format!(
            "{}({}) [{}, {}]",
            self.name,
            self.attributes.join(", "),
            self.binding,
            self.visibility
        )
    }
}

/// Report data for the list command.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListReport {
    pub types: Vec<TypeSummary>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.types.is_empty() {
            out.emit(Line::Text("No types defined"));
            return;
        }

        out.emit(Line::Heading("Types"));
        for summary in &self.types {
            let item = match &summary.description {
                Some(desc) => format!("{} - {}", summary.signature(), desc),
                None => summary.signature(),
            };
            out.emit(Line::Item(&item));
        }
    }
}
