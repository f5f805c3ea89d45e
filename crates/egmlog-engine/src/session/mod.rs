pub mod actions;
pub mod assembler;
mod cashout;
mod game;
mod insertion;

pub use actions::Trigger;
pub use assembler::{PassState, reconstruct};

use crate::cache::EntryCache;
use actions::CURRENT_PLAYABLE_AMOUNT;

/// Playable balance from the nearest meter reading before `at`.
fn starting_balance(cache: &EntryCache<'_>, at: usize) -> Option<String> {
    cache
        .meter_before(at)
        .map(|meter| meter.amount(CURRENT_PLAYABLE_AMOUNT))
}
