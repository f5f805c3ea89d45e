use super::actions::Trigger;
use super::cashout::build_cash_out;
use super::game::{GameScan, build_game};
use super::insertion::build_insertion;
use crate::cache::EntryCache;
use chrono::NaiveDateTime;
use egmlog_types::SessionRecord;

/// State carried from one trigger to the next during a single file's pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassState {
    /// End of the most recently completed game
    pub last_game_end: Option<NaiveDateTime>,
}

/// Walk one file's entries and assemble a record for every trigger.
///
/// Records come out in trigger order. After a game, the pass resumes right
/// after the entry where the game's own scan stopped; anything that scan
/// walked over is not dispatched again, including other triggers.
pub fn reconstruct(cache: &EntryCache<'_>) -> Vec<SessionRecord> {
    let mut records = Vec::new();
    let mut state = PassState::default();
    let mut cursor = 0;

    while cursor < cache.len() {
        let entry = &cache[cursor];

        match Trigger::classify(&entry.action_type) {
            Some(Trigger::Game) => {
                let GameScan {
                    game,
                    stopped_at,
                    state: next_state,
                } = build_game(cache, cursor, state);

                records.push(SessionRecord::Game(game));
                state = next_state;
                cursor = stopped_at;
            }
            Some(Trigger::CashOut) => {
                records.push(SessionRecord::CashOut(build_cash_out(cache, cursor)));
            }
            Some(Trigger::Insertion(kind)) => {
                records.push(SessionRecord::Insertion(build_insertion(cache, cursor, kind)));
            }
            None => {}
        }

        cursor += 1;
    }

    let incomplete = records.iter().filter(|r| !r.is_complete()).count();
    tracing::debug!(
        entries = cache.len(),
        records = records.len(),
        incomplete,
        "reconstructed sessions"
    );

    records
}
