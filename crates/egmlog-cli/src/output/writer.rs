use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use egmlog_types::{LogEntry, SummaryRow};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fixed leading columns of the raw extraction.
pub const RAW_COLUMNS: [&str; 6] = [
    "Date",
    "Time",
    "MessageType",
    "MessageSender",
    "RawMessage",
    "ActionType",
];

/// Where one input file's outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub raw: PathBuf,
    pub summary: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<base><suffix>.<ext>` for both outputs.
    pub fn new(dir: &Path, base: &str, config: &Config, format: OutputFormat) -> Self {
        let ext = format.extension();
        Self {
            raw: dir.join(format!("{}{}.{}", base, config.raw_suffix, ext)),
            summary: dir.join(format!("{}{}.{}", base, config.summary_suffix, ext)),
        }
    }
}

/// Attribute keys across all entries: sorted within an entry, first-seen
/// across entries.
pub fn attribute_columns(entries: &[LogEntry]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for entry in entries {
        for key in entry.attributes.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }
    keys
}

pub fn write_raw_csv<W: Write>(writer: W, entries: &[LogEntry]) -> Result<()> {
    let keys = attribute_columns(entries);
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(RAW_COLUMNS.iter().copied().chain(keys.iter().copied()))?;

    for entry in entries {
        let fixed = [
            entry.date.as_str(),
            entry.time.as_str(),
            entry.message_type.as_str(),
            entry.sender.as_str(),
            entry.raw_message.as_str(),
            entry.action_type.as_str(),
        ];
        let attrs = keys.iter().map(|key| entry.attr(key).unwrap_or_default());
        wtr.write_record(fixed.into_iter().chain(attrs))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the summary with its header even when there are no rows.
pub fn write_summary_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(SummaryRow::COLUMNS)?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write, T: Serialize>(mut writer: W, items: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, items)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write both outputs for one input file.
pub fn write_outputs(
    paths: &OutputPaths,
    format: OutputFormat,
    entries: &[LogEntry],
    rows: &[SummaryRow],
) -> Result<()> {
    let raw = create(&paths.raw)?;
    let summary = create(&paths.summary)?;

    match format {
        OutputFormat::Csv => {
            write_raw_csv(raw, entries)
                .with_context(|| format!("Failed to write {}", paths.raw.display()))?;
            write_summary_csv(summary, rows)
                .with_context(|| format!("Failed to write {}", paths.summary.display()))?;
        }
        OutputFormat::Json => {
            write_json(raw, entries)
                .with_context(|| format!("Failed to write {}", paths.raw.display()))?;
            write_json(summary, rows)
                .with_context(|| format!("Failed to write {}", paths.summary.display()))?;
        }
    }

    Ok(())
}
