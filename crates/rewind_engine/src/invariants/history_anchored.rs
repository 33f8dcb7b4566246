//! History anchoring: non-empty, rooted at the empty board, index in range.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: history starts with the empty board and the index points into it.
pub struct HistoryAnchoredInvariant;

impl Invariant<GameEngine> for HistoryAnchoredInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        history.first() == Some(&Board::new()) && engine.current_index() < history.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the current index is within it"
    }
}
