//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use cover::{CoverArray, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders a single value.
///
/// Human output prints scalars bare and containers as indented JSON; JSON
/// output is always compact JSON.
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String, serde_json::Error> {
    match (format, value) {
        (OutputFormat::Json, _) => serde_json::to_string(value),
        (OutputFormat::Human, Value::Cover(cover)) => serde_json::to_string_pretty(cover),
        (OutputFormat::Human, Value::Null) => Ok("null".to_string()),
        (OutputFormat::Human, scalar) => Ok(scalar.to_string()),
    }
}

/// Renders a whole document
pub fn render_document(doc: &CoverArray, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => serde_json::to_string_pretty(doc),
        OutputFormat::Json => serde_json::to_string(doc),
    }
}

/// Formats a table with aligned columns in human-readable format.
///
/// Cells beyond the header count are dropped. Returns an empty string when
/// there are no rows.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}
