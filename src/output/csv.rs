//! CSV output formatting for subnet reports.

use crate::models::{SubnetReport, REPORT_KEYS};
use itertools::Itertools;

use super::terminal::format_field;

/// Render reports as CSV, one header line plus one row per report.
///
/// Every field is quoted and columns are padded to line up.
pub fn render_csv(reports: &[SubnetReport]) -> String {
    log::debug!("render_csv() rows={}", reports.len());

    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|report| report.entries().into_iter().map(|(_, value)| value).collect())
        .collect();

    // quoted width of the widest header or value per column
    let widths: Vec<usize> = REPORT_KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| {
            rows.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(key.len()))
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let header = REPORT_KEYS
        .iter()
        .zip(&widths)
        .map(|(key, width)| format_field(key, *width))
        .join(",");

    std::iter::once(header)
        .chain(rows.iter().map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(value, width)| format_field(value, *width))
                .join(",")
        }))
        .join("\n")
}
