//! Display formatting for summary fields.
//!
//! Every helper degrades to a blank (or unchanged) value on bad input so a
//! single malformed attribute never drops a record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use egmlog_types::LogEntry;

/// Time-of-day format used by the terminal logs (`HH:MM:SS,mmm`)
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S,%3f";

const LOG_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_TIME_FORMAT: &str = "%I:%M:%S,%3f %p";

/// Format minor units (cents) as dollars: `"1050"` → `"$10.50"`.
///
/// Returns an empty string when the input is not an integer.
pub fn format_currency(minor_units: &str) -> String {
    let Ok(value) = minor_units.trim().parse::<i64>() else {
        return String::new();
    };

    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    format!("${}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Render a log time as 12-hour clock time with a timezone label.
///
/// `"13:05:09,042"` with `"EST"` becomes `"01:05:09,042 PM EST"`. Input that
/// does not parse is returned unchanged.
pub fn to_12_hour(time: &str, tz_label: &str) -> String {
    match NaiveTime::parse_from_str(time, LOG_TIME_FORMAT) {
        Ok(parsed) => format!("{} {}", parsed.format(DISPLAY_TIME_FORMAT), tz_label),
        Err(_) => time.to_string(),
    }
}

/// Combine a log date and time into a single timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, LOG_DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, LOG_TIME_FORMAT).ok()?;
    Some(date.and_time(time))
}

/// Elapsed time from one entry to another, on full date-times.
///
/// `None` when either side does not parse.
pub fn duration_between(start: &LogEntry, end: &LogEntry) -> Option<TimeDelta> {
    let start = parse_timestamp(&start.date, &start.time)?;
    let end = parse_timestamp(&end.date, &end.time)?;
    Some(end - start)
}

/// Format an elapsed span as `HH:MM:SS,mmm`.
///
/// Hours are total elapsed hours and are not wrapped at 24. Negative spans
/// are not meaningful here and render blank.
pub fn format_duration(delta: TimeDelta) -> String {
    if delta < TimeDelta::zero() {
        return String::new();
    }

    let total_ms = delta.num_milliseconds();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Parse a `HH:MM:SS,mmm` duration display back into a span.
pub fn parse_duration(display: &str) -> Option<TimeDelta> {
    let (clock, millis) = display.trim().split_once(',')?;
    let mut parts = clock.splitn(3, ':');

    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = parts.next()?.parse().ok()?;
    let millis: i64 = millis.parse().ok()?;

    Some(
        TimeDelta::hours(hours)
            + TimeDelta::minutes(minutes)
            + TimeDelta::seconds(seconds)
            + TimeDelta::milliseconds(millis),
    )
}
