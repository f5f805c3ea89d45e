use chrono::TimeDelta;
use std::fmt;

// ==========================================
// Reconstructed events
// ==========================================
//
// Monetary values are kept as the raw minor-unit strings found in the log
// and times as the raw `HH:MM:SS,mmm` strings. Display formatting happens
// only when a record is flattened into a `SummaryRow`.

/// One reconstructed event: a game, a cash-out or a bill/voucher insertion.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionRecord {
    Game(GameSession),
    CashOut(CashOut),
    Insertion(Insertion),
}

impl SessionRecord {
    /// Whether the terminating event of this record was found.
    pub fn is_complete(&self) -> bool {
        match self {
            SessionRecord::Game(game) => game.outcome.is_some(),
            SessionRecord::CashOut(cash) => cash.completed_at.is_some(),
            SessionRecord::Insertion(insertion) => insertion.outcome.is_some(),
        }
    }
}

// --- Game ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSession {
    pub date: String,
    pub title: String,
    /// Denomination in minor units (blank if the trigger had none)
    pub denom: String,
    pub started_at: String,
    /// Balance from the nearest preceding meter reading
    pub starting_balance: Option<String>,
    pub line_count: Option<String>,
    pub bet_per_line: Option<String>,
    /// Set once `sasEngine.gameEnd` is seen
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameOutcome {
    pub ended_at: String,
    pub wagered: String,
    pub won: String,
    /// Balance from the first meter reading after the game ended
    pub ending_balance: Option<String>,
    pub length: Option<TimeDelta>,
    /// Gap between the previous completed game's end and this game's start
    pub since_previous: Option<TimeDelta>,
}

// --- Cash-out ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CashOut {
    pub date: String,
    pub started_at: String,
    pub starting_balance: Option<String>,
    pub amount: Option<String>,
    pub validation_id: Option<String>,
    pub completed_at: Option<String>,
}

// --- Bill / voucher insertion ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionKind {
    Voucher,
    Bill,
}

impl InsertionKind {
    /// Classify an insertion trigger: tickets are vouchers, everything else
    /// is a bill.
    pub fn from_action(action: &str) -> Self {
        if action.contains("Ticket") {
            InsertionKind::Voucher
        } else {
            InsertionKind::Bill
        }
    }
}

impl fmt::Display for InsertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertionKind::Voucher => write!(f, "Voucher"),
            InsertionKind::Bill => write!(f, "Bill"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionStatus {
    /// Accepted, with the credited value in minor units
    Accepted { value: String },
    Rejected,
}

impl fmt::Display for InsertionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertionStatus::Accepted { .. } => write!(f, "Accepted"),
            InsertionStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionOutcome {
    pub status: InsertionStatus,
    pub at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    pub date: String,
    pub kind: InsertionKind,
    pub started_at: String,
    pub starting_balance: Option<String>,
    /// Voucher validation number; bills never carry one
    pub validation_id: Option<String>,
    pub outcome: Option<InsertionOutcome>,
}
