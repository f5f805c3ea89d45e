// Engine module - Session reconstruction over tokenized log entries
// This layer sits between tokenized entries (types) and CLI output

pub mod cache;
pub mod export;
pub mod format;
pub mod session;

pub use cache::{EntryCache, scan_backward_for, scan_forward_for};
pub use export::{RecordExportExt, SummaryRowExt, flatten};
pub use session::{PassState, reconstruct};

use egmlog_types::{LogEntry, SessionRecord, SummaryRow};

// Façade API - Stable public interface for CLI layer

/// Reconstruct games, cash-outs and insertions from one file's entries.
pub fn reconstruct_sessions(entries: &[LogEntry]) -> Vec<SessionRecord> {
    let cache = EntryCache::new(entries);
    reconstruct(&cache)
}

/// Reconstruct and flatten to display rows using `tz_label` for times.
pub fn summarize(entries: &[LogEntry], tz_label: &str) -> Vec<SummaryRow> {
    flatten(&reconstruct_sessions(entries), tz_label)
}
