//! Mark balance: X is never behind O and never more than one ahead.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: on every board, `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().all(|board| {
            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Every board has as many X marks as O marks, or one more"
    }
}
