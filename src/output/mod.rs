//! Output formatting for subnet reports.
//!
//! This module handles formatting reports for display:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal table output with colors

mod csv;
mod json;
mod terminal;

pub use csv::render_csv;
pub use json::render_json;
pub use terminal::{format_field, render_mask_options, render_table};

use crate::cli::OutputFormat;
use crate::models::SubnetReport;
use itertools::Itertools;
use std::error::Error;

/// Render reports in the requested format.
pub fn render(
    reports: &[SubnetReport],
    format: &OutputFormat,
    color: bool,
) -> Result<String, Box<dyn Error>> {
    let output = match format {
        OutputFormat::Table => reports
            .iter()
            .map(|report| render_table(report, color))
            .join("\n\n"),
        OutputFormat::Json => render_json(reports)?,
        OutputFormat::Csv => render_csv(reports),
    };
    Ok(output)
}
