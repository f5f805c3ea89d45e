//! Action types recognized by the session builder.

use egmlog_types::InsertionKind;

pub const METERS_SUMMARY: &str = "Meters summary";
pub const CURRENT_PLAYABLE_AMOUNT: &str = "CurrentPlayableAmount";

// Game
pub const BEGIN_GAME: &str = "--Beginning game";
pub const END_OF_GAME: &str = "End of game";
pub const GAME_END: &str = "sasEngine.gameEnd";

// Cash-out
pub const CASHOUT_INITIATED: &str = "Cashout initiated.";
pub const TICKET_OUT_REQUEST: &str = "SAS TicketOut request";
pub const TICKET_OUT_SUCCESS: &str = "SAS TicketOut response - Success";
pub const CASHOUT_COMPLETE: &str = "Cashout complete.";

// Bill / voucher insertion
pub const TICKET_INSERTED: &str = "Ticket inserted";
pub const NOTE_INSERTED: &str = "Note inserted";
pub const TICKET_ACCEPTED: &str = "Ticket accepted";
pub const TICKET_REJECTED: &str = "Ticket rejected";
pub const NOTE_ACCEPTED: &str = "Note accepted";
pub const NOTE_REJECTED: &str = "Note rejected";

/// An action that starts a multi-line correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Game,
    CashOut,
    Insertion(InsertionKind),
}

impl Trigger {
    pub fn classify(action: &str) -> Option<Self> {
        match action {
            BEGIN_GAME => Some(Trigger::Game),
            CASHOUT_INITIATED => Some(Trigger::CashOut),
            TICKET_INSERTED | NOTE_INSERTED => {
                Some(Trigger::Insertion(InsertionKind::from_action(action)))
            }
            _ => None,
        }
    }
}
