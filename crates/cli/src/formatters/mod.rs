//! Output formatters for showcase reports
//!
//! Text output is meant for reading in a terminal; JSON output carries the
//! same comparisons plus a summary for scripts.

use crate::showcase::{Comparison, Report};
use genops_core::{Result, SequenceExt};
use serde::Serialize;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Blocks of heading, custom line and builtin line, then a summary line
pub fn render_text(report: &Report) -> String {
    let mut sections = report.comparisons.transform(render_comparison);
    sections.push(format!(
        "{} of {} comparisons match",
        report.matching(),
        report.len()
    ));
    sections.join("\n\n")
}

fn render_comparison(comparison: &Comparison) -> String {
    let marker = if comparison.matches { "" } else { " (MISMATCH)" };
    format!(
        "{}{marker}\n  custom:  {}\n  builtin: {}",
        comparison.name, comparison.custom, comparison.builtin
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    all_match: bool,
    matching: usize,
    total: usize,
    comparisons: &'a [Comparison],
}

/// Pretty-printed JSON with a summary ahead of the comparisons
pub fn render_json(report: &Report) -> Result<String> {
    let document = JsonReport {
        all_match: report.all_match(),
        matching: report.matching(),
        total: report.len(),
        comparisons: &report.comparisons,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
