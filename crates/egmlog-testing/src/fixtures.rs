//! Synthetic terminal logs.
//!
//! `LogScript` writes lines in the terminal's header shape with a clock that
//! advances after every event, so tests describe *what happened* and the
//! timestamps fall out of the step size.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use egmlog_types::LogEntry;
use std::fs;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S,%3f";

/// Builder for a terminal log.
///
/// # Example
/// ```
/// use egmlog_testing::LogScript;
///
/// let lines = LogScript::new()
///     .event("Meters summary: CurrentPlayableAmount=500")
///     .event("--Beginning game: title=Foo denom=25")
///     .lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[1].starts_with("2024-03-01 10:00:01,000 INFO"));
/// ```
#[derive(Debug, Clone)]
pub struct LogScript {
    clock: NaiveDateTime,
    step: TimeDelta,
    lines: Vec<String>,
}

impl Default for LogScript {
    fn default() -> Self {
        Self::new()
    }
}

impl LogScript {
    /// Start at 2024-03-01 10:00:00,000 with a one second step.
    pub fn new() -> Self {
        let clock = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .expect("valid fixture start");

        Self {
            clock,
            step: TimeDelta::seconds(1),
            lines: Vec::new(),
        }
    }

    /// Start at an explicit `YYYY-MM-DD HH:MM:SS` instant.
    pub fn starting_at(date: &str, time: &str) -> Self {
        let clock = NaiveDateTime::parse_from_str(
            &format!("{} {}", date, time),
            "%Y-%m-%d %H:%M:%S",
        )
        .expect("valid fixture start");

        Self {
            clock,
            ..Self::new()
        }
    }

    /// Change the gap inserted after each subsequent event.
    pub fn step_millis(mut self, millis: i64) -> Self {
        self.step = TimeDelta::milliseconds(millis);
        self
    }

    /// Move the clock forward without writing anything.
    pub fn wait_millis(mut self, millis: i64) -> Self {
        self.clock += TimeDelta::milliseconds(millis);
        self
    }

    /// Append a `GameManager` INFO line carrying `message`, then advance.
    pub fn event(self, message: &str) -> Self {
        self.line_from("INFO", "GameManager", message)
    }

    /// Append a line from an explicit type and sender, then advance.
    pub fn line_from(mut self, message_type: &str, sender: &str, message: &str) -> Self {
        self.lines.push(format!(
            "{} {} {}  {}| {}",
            self.clock.format(DATE_FORMAT),
            self.clock.format(TIME_FORMAT),
            message_type,
            sender,
            message
        ));
        self.clock += self.step;
        self
    }

    /// Append a line that does not have the header shape.
    pub fn noise(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// Tokenize the script the same way a file on disk would be.
    pub fn entries(&self) -> Vec<LogEntry> {
        egmlog_parser::tokenize_lines(&self.lines).entries
    }

    pub fn contents(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the script to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.contents())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
