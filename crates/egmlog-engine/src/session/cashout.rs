use super::actions::{CASHOUT_COMPLETE, TICKET_OUT_REQUEST, TICKET_OUT_SUCCESS};
use super::starting_balance;
use crate::cache::{EntryCache, scan_forward_for};
use egmlog_types::{CashOut, LogEntry};

fn is_cash_out_line(entry: &LogEntry) -> bool {
    matches!(
        entry.action_type.as_str(),
        TICKET_OUT_REQUEST | TICKET_OUT_SUCCESS | CASHOUT_COMPLETE
    )
}

/// Assemble the cash-out started by the `Cashout initiated.` entry at `at`.
///
/// The scan collects the ticket amount and validation id until
/// `Cashout complete.`; without a completion the record keeps whatever was
/// captured.
pub(super) fn build_cash_out(cache: &EntryCache<'_>, at: usize) -> CashOut {
    let trigger = &cache[at];

    let mut cash = CashOut {
        date: trigger.date.clone(),
        started_at: trigger.time.clone(),
        starting_balance: starting_balance(cache, at),
        ..CashOut::default()
    };

    let mut cursor = at + 1;
    while let Some((entry, idx)) = scan_forward_for(cache, cursor, is_cash_out_line) {
        match entry.action_type.as_str() {
            TICKET_OUT_REQUEST => cash.amount = Some(entry.amount("amt")),
            TICKET_OUT_SUCCESS => {
                let id = entry.attr("validation").unwrap_or_default();
                cash.validation_id = Some(id.to_string());
            }
            _ => {
                cash.completed_at = Some(entry.time.clone());
                break;
            }
        }
        cursor = idx + 1;
    }

    if cash.completed_at.is_none() {
        tracing::trace!(index = at, "cash-out reached end of file without completion");
    }

    cash
}
