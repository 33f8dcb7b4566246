//! Alternating turns: X places on odd-numbered entries, O on even ones.

use super::super::{Cell, GameEngine, Mark};
use super::Invariant;

/// Invariant: the mark added by entry `i` belongs to the player whose turn
/// it was at entry `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        (1..history.len()).all(|i| {
            let Some(cell) = engine.played_cell(i) else {
                return false;
            };
            history[i].get(cell) == Some(Cell::Occupied(Mark::for_ply(i - 1)))
        })
    }

    fn description() -> &'static str {
        "Marks alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_played_engine_holds() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2] {
            engine.apply_move(cell).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_first_violates() {
        let mut engine = GameEngine::new();
        let mut board = engine.history[0];
        board.set(Position::Center, Cell::Occupied(Mark::O));
        engine.history.push(board);
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
