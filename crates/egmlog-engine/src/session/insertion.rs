use super::actions::{NOTE_ACCEPTED, NOTE_REJECTED, TICKET_ACCEPTED, TICKET_REJECTED};
use super::starting_balance;
use crate::cache::{EntryCache, scan_forward_for};
use egmlog_types::{Insertion, InsertionKind, InsertionOutcome, InsertionStatus};

/// Outcome actions and value attribute for each insertion kind.
fn outcome_actions(kind: InsertionKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        InsertionKind::Voucher => (TICKET_ACCEPTED, TICKET_REJECTED, "value"),
        InsertionKind::Bill => (NOTE_ACCEPTED, NOTE_REJECTED, "valueCents"),
    }
}

/// Assemble the insertion started by the `Ticket inserted` / `Note inserted`
/// entry at `at`. The first accept or reject outcome after it settles the
/// record.
pub(super) fn build_insertion(cache: &EntryCache<'_>, at: usize, kind: InsertionKind) -> Insertion {
    let trigger = &cache[at];
    let (accepted, rejected, value_key) = outcome_actions(kind);

    let outcome = scan_forward_for(cache, at + 1, |e| {
        e.action_type.contains(accepted) || e.action_type.contains(rejected)
    })
    .map(|(entry, _)| {
        let status = if entry.action_type.contains(accepted) {
            InsertionStatus::Accepted {
                value: entry.amount(value_key),
            }
        } else {
            InsertionStatus::Rejected
        };

        InsertionOutcome {
            status,
            at: entry.time.clone(),
        }
    });

    let validation_id = match kind {
        InsertionKind::Voucher => trigger.attr("validation#").map(str::to_string),
        InsertionKind::Bill => None,
    };

    Insertion {
        date: trigger.date.clone(),
        kind,
        started_at: trigger.time.clone(),
        starting_balance: starting_balance(cache, at),
        validation_id,
        outcome,
    }
}
