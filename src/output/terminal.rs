//! Terminal output utilities.
//!
//! Renders reports as the `Key: value` result table and provides the field
//! formatting helper shared with the CSV output.

use crate::models::SubnetReport;
use crate::processing::mask_options;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render one report as aligned `Key: value` lines.
pub fn render_table(report: &SubnetReport, color: bool) -> String {
    let entries = report.entries();
    let width = entries.iter().map(|(key, _)| key.len() + 1).max().unwrap_or(0);

    entries
        .iter()
        .map(|(key, value)| {
            let label = format!("{:<width$}", format!("{key}:"));
            if color {
                format!("{} {}", label.as_str().bold(), value.as_str().cyan())
            } else {
                format!("{label} {value}")
            }
        })
        .join("\n")
}

/// Render the mask selection table, one `mask /prefix` per line.
pub fn render_mask_options() -> String {
    mask_options().iter().map(|option| option.to_string()).join("\n")
}
