//! Assertions over written summary output.

use anyhow::{Context, Result};
use egmlog_types::SummaryRow;
use predicates::prelude::*;

/// Predicate matching text that begins with the summary header line.
pub fn starts_with_summary_header() -> impl Predicate<str> {
    predicate::str::starts_with(SummaryRow::COLUMNS.join(","))
}

/// Data lines of a written summary CSV (header excluded).
pub fn summary_data_lines(csv: &str) -> Result<Vec<&str>> {
    let mut lines = csv.lines();
    let header = lines.next().context("Summary output is empty")?;

    if !starts_with_summary_header().eval(header) {
        anyhow::bail!("Unexpected summary header: {}", header);
    }

    Ok(lines.filter(|line| !line.is_empty()).collect())
}

/// Assert a written summary CSV holds `expected` data rows.
pub fn assert_summary_row_count(csv: &str, expected: usize) -> Result<()> {
    let rows = summary_data_lines(csv)?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} summary rows, got {}", expected, rows.len());
    }

    Ok(())
}
