//! Flattening of reconstructed records into display rows.
//!
//! Implemented as extension traits over the record and row types, so all
//! display formatting stays in this crate.

use crate::format::{format_currency, format_duration, parse_duration, to_12_hour};
use chrono::TimeDelta;
use egmlog_types::{
    CashOut, GameSession, Insertion, InsertionKind, InsertionStatus, SessionRecord, SummaryRow,
};

/// Flatten records in order.
pub fn flatten(records: &[SessionRecord], tz_label: &str) -> Vec<SummaryRow> {
    records.iter().map(|record| record.to_row(tz_label)).collect()
}

/// Extension trait for `SessionRecord` producing the display schema.
pub trait RecordExportExt {
    /// Render into a `SummaryRow`, formatting times with `tz_label`.
    fn to_row(&self, tz_label: &str) -> SummaryRow;
}

impl RecordExportExt for SessionRecord {
    fn to_row(&self, tz_label: &str) -> SummaryRow {
        match self {
            SessionRecord::Game(game) => game_row(game, tz_label),
            SessionRecord::CashOut(cash) => cash_out_row(cash, tz_label),
            SessionRecord::Insertion(insertion) => insertion_row(insertion, tz_label),
        }
    }
}

/// Extension trait for presentation flags on a flattened row.
pub trait SummaryRowExt {
    /// Time Between Spins under one second
    fn is_rapid_spin(&self) -> bool;
}

impl SummaryRowExt for SummaryRow {
    fn is_rapid_spin(&self) -> bool {
        parse_duration(&self.time_between_spins)
            .is_some_and(|gap| gap >= TimeDelta::zero() && gap < TimeDelta::seconds(1))
    }
}

fn currency_or_blank(minor_units: Option<&String>) -> String {
    minor_units.map(|v| format_currency(v)).unwrap_or_default()
}

fn duration_or_blank(delta: Option<TimeDelta>) -> String {
    delta.map(format_duration).unwrap_or_default()
}

/// `"<prefix> <rest>"`, or just `rest` when there is no prefix.
fn prefixed(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{} {}", prefix, rest)
    }
}

fn game_row(game: &GameSession, tz_label: &str) -> SummaryRow {
    let mut row = SummaryRow {
        date: game.date.clone(),
        game_start: to_12_hour(&game.started_at, tz_label),
        title: game.title.clone(),
        denom: format_currency(&game.denom),
        line_count: game.line_count.clone().unwrap_or_default(),
        bets_per_line: game.bet_per_line.clone().unwrap_or_default(),
        starting_balance: currency_or_blank(game.starting_balance.as_ref()),
        ..SummaryRow::default()
    };

    if let Some(outcome) = &game.outcome {
        row.bet_amount = format_currency(&outcome.wagered);
        row.win_amount = format_currency(&outcome.won);
        row.ending_balance = currency_or_blank(outcome.ending_balance.as_ref());
        row.game_end = to_12_hour(&outcome.ended_at, tz_label);
        row.time_between_spins = duration_or_blank(outcome.since_previous);
        row.length_of_game = duration_or_blank(outcome.length);
    }

    row
}

fn cash_out_row(cash: &CashOut, tz_label: &str) -> SummaryRow {
    let action_type = match &cash.completed_at {
        Some(_) => prefixed(
            &currency_or_blank(cash.amount.as_ref()),
            &format!(
                "Voucher Cashout, Val-ID: {}",
                cash.validation_id.as_deref().unwrap_or_default()
            ),
        ),
        None => String::new(),
    };

    SummaryRow {
        date: cash.date.clone(),
        game_start: to_12_hour(&cash.started_at, tz_label),
        starting_balance: currency_or_blank(cash.starting_balance.as_ref()),
        // A completed cash-out empties the credit meter
        ending_balance: format_currency("0"),
        game_end: cash
            .completed_at
            .as_deref()
            .map(|t| to_12_hour(t, tz_label))
            .unwrap_or_default(),
        action_type,
        ..SummaryRow::default()
    }
}

fn insertion_row(insertion: &Insertion, tz_label: &str) -> SummaryRow {
    let starting_balance = currency_or_blank(insertion.starting_balance.as_ref());

    let (value, status, game_end) = match &insertion.outcome {
        Some(outcome) => {
            let value = match &outcome.status {
                InsertionStatus::Accepted { value } => format_currency(value),
                InsertionStatus::Rejected => String::new(),
            };
            (
                value,
                outcome.status.to_string(),
                to_12_hour(&outcome.at, tz_label),
            )
        }
        None => (String::new(), String::new(), String::new()),
    };

    let accepted = matches!(
        insertion.outcome.as_ref().map(|o| &o.status),
        Some(InsertionStatus::Accepted { .. })
    );
    let ending_balance = if accepted {
        value.clone()
    } else {
        starting_balance.clone()
    };

    let mut action_type = prefixed(&value, &format!("{} Inserted/{}", insertion.kind, status));
    if insertion.kind == InsertionKind::Voucher
        && let Some(id) = insertion.validation_id.as_deref().filter(|id| !id.is_empty())
    {
        action_type.push_str(&format!(", Val-ID: {}", id));
    }

    SummaryRow {
        date: insertion.date.clone(),
        game_start: to_12_hour(&insertion.started_at, tz_label),
        starting_balance,
        ending_balance,
        game_end,
        action_type,
        ..SummaryRow::default()
    }
}
