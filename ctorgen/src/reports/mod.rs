//! Report data structures for commands.
//!
//! Commands build reports, then render them line by line to an output.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use list::{ListReport, TypeSummary};
pub use output::{Report, TerminalOutput};

/// `1 type`, `2 types`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
