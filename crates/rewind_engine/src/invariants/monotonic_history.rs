//! Monotonic history: each entry adds exactly one mark to its predecessor.

use super::super::{Cell, GameEngine};
use super::Invariant;

/// Invariant: every step fills exactly one empty cell and touches nothing else.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameEngine> for MonotonicHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().windows(2).all(|pair| {
            let mut changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(before, after)| before != after);

            matches!(
                (changed.next(), changed.next()),
                (Some((Cell::Empty, Cell::Occupied(_))), None)
            )
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one empty cell of its predecessor"
    }
}
