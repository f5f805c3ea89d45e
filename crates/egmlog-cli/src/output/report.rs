use egmlog_engine::SummaryRowExt;
use egmlog_types::SummaryRow;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// What happened to one input file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub entries: usize,
    pub skipped_lines: usize,
    pub rows: Vec<SummaryRow>,
}

impl FileReport {
    pub fn rapid_spins(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(|row| row.is_rapid_spin())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub processed: usize,
    pub failed: usize,
    pub records: usize,
    pub rapid_spins: usize,
}

impl RunTotals {
    pub fn add(&mut self, report: &FileReport) {
        self.processed += 1;
        self.records += report.rows.len();
        self.rapid_spins += report.rapid_spins().count();
    }
}

/// Terminal progress for `egmlog parse`.
pub struct Reporter {
    verbose: bool,
    color: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn file(&self, report: &FileReport) {
        let name = report
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.path.display().to_string());

        println!(
            "{}: {} entries ({} lines skipped), {} records, {} rapid spins",
            name,
            report.entries,
            report.skipped_lines,
            report.rows.len(),
            report.rapid_spins().count()
        );

        if !self.verbose {
            return;
        }

        for row in report.rapid_spins() {
            let line = format!(
                "  rapid spin {} {} {} (after {})",
                row.date, row.game_start, row.title, row.time_between_spins
            );
            if self.color {
                println!("{}", line.red().bold());
            } else {
                println!("{}", line);
            }
        }
    }

    pub fn totals(&self, totals: &RunTotals) {
        println!(
            "Processed {} files: {} records, {} rapid spins, {} failed",
            totals.processed, totals.records, totals.rapid_spins, totals.failed
        );
    }
}
