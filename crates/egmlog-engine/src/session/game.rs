use super::actions::{CURRENT_PLAYABLE_AMOUNT, END_OF_GAME, GAME_END, METERS_SUMMARY};
use super::assembler::PassState;
use super::starting_balance;
use crate::cache::{EntryCache, scan_forward_for};
use crate::format::{duration_between, parse_timestamp};
use egmlog_types::{GameOutcome, GameSession, LogEntry};

pub(super) struct GameScan {
    pub game: GameSession,
    /// Index where the forward scan stopped: the `sasEngine.gameEnd` entry,
    /// or the cache length when the game never ended
    pub stopped_at: usize,
    pub state: PassState,
}

fn is_game_line(entry: &LogEntry) -> bool {
    entry.is_action(END_OF_GAME) || entry.is_action(GAME_END)
}

/// Assemble the game started by the `--Beginning game` entry at `at`.
pub(super) fn build_game(cache: &EntryCache<'_>, at: usize, mut state: PassState) -> GameScan {
    let trigger = &cache[at];

    let mut game = GameSession {
        date: trigger.date.clone(),
        title: trigger.attr("title").unwrap_or_default().to_string(),
        denom: trigger.attr("denom").unwrap_or_default().to_string(),
        started_at: trigger.time.clone(),
        starting_balance: starting_balance(cache, at),
        ..GameSession::default()
    };

    let mut cursor = at;
    while let Some((entry, idx)) = scan_forward_for(cache, cursor, is_game_line) {
        if entry.is_action(END_OF_GAME) {
            game.line_count = Some(entry.attr("#lines").unwrap_or_default().to_string());
            game.bet_per_line = Some(entry.attr("bet_per_line").unwrap_or_default().to_string());
            cursor = idx + 1;
            continue;
        }

        let ending_balance = scan_forward_for(cache, idx + 1, |e| e.is_action(METERS_SUMMARY))
            .map(|(meter, _)| meter.amount(CURRENT_PLAYABLE_AMOUNT));

        let since_previous = state
            .last_game_end
            .zip(parse_timestamp(&trigger.date, &trigger.time))
            .map(|(last, started)| started - last);
        if let Some(ended) = parse_timestamp(&entry.date, &entry.time) {
            state.last_game_end = Some(ended);
        }

        game.outcome = Some(GameOutcome {
            ended_at: entry.time.clone(),
            wagered: entry.amount("amountWagered"),
            won: entry.amount("amountWon"),
            ending_balance,
            length: duration_between(trigger, entry),
            since_previous,
        });

        return GameScan {
            game,
            stopped_at: idx,
            state,
        };
    }

    tracing::trace!(
        index = at,
        time = %trigger.time,
        "game reached end of file without sasEngine.gameEnd"
    );

    GameScan {
        game,
        stopped_at: cache.len(),
        state,
    }
}
