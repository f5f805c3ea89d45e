use serde::{Deserialize, Serialize};

/// Flattened display row for one reconstructed event.
///
/// Every field is display text and blank when not populated. Field order
/// is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "GameStart")]
    pub game_start: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Denom")]
    pub denom: String,
    #[serde(rename = "# of Lines")]
    pub line_count: String,
    #[serde(rename = "Bets Per Line")]
    pub bets_per_line: String,
    #[serde(rename = "Starting Balance")]
    pub starting_balance: String,
    #[serde(rename = "Bet Amount")]
    pub bet_amount: String,
    #[serde(rename = "Win Amount")]
    pub win_amount: String,
    #[serde(rename = "Ending Balance")]
    pub ending_balance: String,
    #[serde(rename = "GameEnd")]
    pub game_end: String,
    #[serde(rename = "Time Between Spins")]
    pub time_between_spins: String,
    #[serde(rename = "Length of Game")]
    pub length_of_game: String,
    #[serde(rename = "Action Type")]
    pub action_type: String,
}

impl SummaryRow {
    /// Column headers, in output order.
    pub const COLUMNS: [&'static str; 14] = [
        "Date",
        "GameStart",
        "Title",
        "Denom",
        "# of Lines",
        "Bets Per Line",
        "Starting Balance",
        "Bet Amount",
        "Win Amount",
        "Ending Balance",
        "GameEnd",
        "Time Between Spins",
        "Length of Game",
        "Action Type",
    ];

    /// Cell values in column order.
    pub fn cells(&self) -> [&str; 14] {
        [
            self.date.as_str(),
            self.game_start.as_str(),
            self.title.as_str(),
            self.denom.as_str(),
            self.line_count.as_str(),
            self.bets_per_line.as_str(),
            self.starting_balance.as_str(),
            self.bet_amount.as_str(),
            self.win_amount.as_str(),
            self.ending_balance.as_str(),
            self.game_end.as_str(),
            self.time_between_spins.as_str(),
            self.length_of_game.as_str(),
            self.action_type.as_str(),
        ]
    }
}
