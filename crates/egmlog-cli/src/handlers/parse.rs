use crate::config::Config;
use crate::output::{FileReport, OutputPaths, Reporter, RunTotals, write_outputs};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use egmlog_parser::{discover_log_files, read_log_file};
use std::path::Path;

pub fn handle(folder: &Path, config: &Config, format: OutputFormat, verbose: bool) -> Result<()> {
    let files = discover_log_files(folder, &config.extension)
        .with_context(|| format!("Failed to read log folder {}", folder.display()))?;

    if files.is_empty() {
        println!(
            "No .{} files found in {}",
            config.extension.trim_start_matches('.'),
            folder.display()
        );
        return Ok(());
    }

    let output_dir = config.output_dir.as_deref().unwrap_or(folder);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output folder {}", output_dir.display()))?;

    let reporter = Reporter::new(verbose);
    let mut totals = RunTotals::default();

    for path in &files {
        match process_file(path, output_dir, config, format) {
            Ok(report) => {
                reporter.file(&report);
                totals.add(&report);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), "skipping file: {:#}", e);
                totals.failed += 1;
            }
        }
    }

    reporter.totals(&totals);

    if totals.failed == files.len() {
        anyhow::bail!("All {} log files in {} failed", files.len(), folder.display());
    }

    Ok(())
}

fn process_file(
    path: &Path,
    output_dir: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<FileReport> {
    let tokenized =
        read_log_file(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let rows = egmlog_engine::summarize(&tokenized.entries, &config.timezone);

    let base = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {}", path.display()))?;
    let paths = OutputPaths::new(output_dir, &base, config, format);

    write_outputs(&paths, format, &tokenized.entries, &rows)?;
    tracing::debug!(
        raw = %paths.raw.display(),
        summary = %paths.summary.display(),
        "wrote outputs"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        entries: tokenized.entries.len(),
        skipped_lines: tokenized.skipped,
        rows,
    })
}
