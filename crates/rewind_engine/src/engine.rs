//! The game engine: move application and linear time-travel history.

use super::error::{EngineError, IllegalMoveReason};
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules::{calculate_winner, is_board_full};
use super::state::GameState;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with move history and time-travel.
///
/// History always starts with the empty board. Moves are applied to the
/// board at `current_index`; any entries after it are discarded first, so
/// the history stays linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) current_index: usize,
}

impl GameEngine {
    /// Creates an engine holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_index: 0,
        }
    }

    /// Returns the derived state of the viewed board.
    pub fn state(&self) -> GameState {
        GameState::derive(self.current_board(), self.current_index, self.history.len())
    }

    /// Returns every board snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the viewed board.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the viewed board.
    pub fn current_board(&self) -> Board {
        self.history[self.current_index]
    }

    /// Returns the mark to play on the viewed board.
    pub fn next_mark(&self) -> Mark {
        Mark::for_ply(self.current_index)
    }

    /// Places the next mark at `cell_index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if the index is off the board,
    /// the viewed board is already won or full, or the cell is occupied.
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<GameState, EngineError> {
        let pos = Position::from_index(cell_index).ok_or_else(|| {
            warn!(cell_index, "Move rejected: off the board");
            EngineError::illegal(IllegalMoveReason::CellOutOfRange(cell_index))
        })?;
        self.play(pos)
    }

    /// Places the next mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn play(&mut self, pos: Position) -> Result<GameState, EngineError> {
        let board = self.current_board();

        if calculate_winner(&board).is_some() || is_board_full(&board) {
            warn!(position = %pos, "Move rejected: game already decided");
            return Err(EngineError::illegal(IllegalMoveReason::GameDecided));
        }

        if !board.is_empty(pos) {
            warn!(position = %pos, "Move rejected: cell occupied");
            return Err(EngineError::illegal(IllegalMoveReason::CellOccupied(
                pos.to_index(),
            )));
        }

        let mark = self.next_mark();
        let next = board.with_mark(pos, mark);

        let discarded = self.history.len() - (self.current_index + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.history.truncate(self.current_index + 1);
        self.history.push(next);
        self.current_index += 1;

        assert_invariants(self);

        let state = self.state();
        debug!(%mark, position = %pos, status = ?state.status(), "Move applied");
        Ok(state)
    }

    /// Views the board at history `index`.
    ///
    /// History is not truncated; that happens on the next move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfRange`] if `index` is not in history.
    /// - [`EngineError::GameAlreadyDecided`] if the last board in history
    ///   has a winner. The lockout looks at the last board, not the target,
    ///   so once a game is won no entry can be revisited until a reset.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn jump_to(&mut self, index: usize) -> Result<GameState, EngineError> {
        let len = self.history.len();
        if index >= len {
            warn!(index, len, "Jump rejected: out of range");
            return Err(EngineError::OutOfRange { index, len });
        }

        let last = self.history[len - 1];
        if calculate_winner(&last).is_some() {
            warn!(index, "Jump rejected: last board has a winner");
            return Err(EngineError::GameAlreadyDecided);
        }

        self.current_index = index;
        debug!(index, "Jumped");
        Ok(self.state())
    }

    /// Clears history back to the empty board.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> GameState {
        info!(moves = self.history.len() - 1, "Resetting game");
        self.history.clear();
        self.history.push(Board::new());
        self.current_index = 0;
        self.state()
    }

    /// Returns the cell filled by the move that produced `history[index]`.
    ///
    /// `None` for the initial board or an index outside history.
    pub fn played_cell(&self, index: usize) -> Option<usize> {
        if index == 0 {
            return None;
        }
        let before = self.history.get(index - 1)?;
        let after = self.history.get(index)?;
        before
            .cells()
            .iter()
            .zip(after.cells())
            .position(|(b, a)| b != a)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameStatus};

    fn engine_after(moves: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &cell in moves {
            engine.apply_move(cell).expect("legal move");
        }
        engine
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.current_board(), Board::new());
        assert_eq!(engine.next_mark(), Mark::X);
    }

    #[test]
    fn test_marks_alternate() {
        let engine = engine_after(&[4, 0]);
        let board = engine.current_board();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(engine.next_mark(), Mark::X);
    }

    #[test]
    fn test_out_of_range_cell() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_move(9),
            Err(EngineError::illegal(IllegalMoveReason::CellOutOfRange(9)))
        );
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut engine = engine_after(&[4]);
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(4),
            Err(EngineError::illegal(IllegalMoveReason::CellOccupied(4)))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(8),
            Err(EngineError::illegal(IllegalMoveReason::GameDecided))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut engine = engine_after(&[0, 1, 2, 3]);
        engine.jump_to(1).unwrap();
        assert_eq!(engine.history().len(), 5);

        let state = engine.apply_move(8).unwrap();
        assert_eq!(engine.history().len(), 3);
        assert_eq!(state.current_index(), 2);
        // Index 1 was X's move, so O plays next.
        assert_eq!(state.board().get(8), Some(Cell::Occupied(Mark::O)));
        assert_eq!(state.board().get(1), Some(Cell::Empty));
    }

    #[test]
    fn test_jump_does_not_truncate() {
        let mut engine = engine_after(&[0, 1, 2]);
        let state = engine.jump_to(0).unwrap();
        assert_eq!(state.history_len(), 4);
        assert!(state.x_is_next());
        assert!(state.is_time_travelling());
        assert_eq!(engine.jump_to(3).unwrap().board(), &engine.history()[3]);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut engine = engine_after(&[0]);
        assert_eq!(
            engine.jump_to(2),
            Err(EngineError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_jump_locked_after_win() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        assert_eq!(engine.jump_to(0), Err(EngineError::GameAlreadyDecided));
        assert_eq!(engine.jump_to(5), Err(EngineError::GameAlreadyDecided));
        assert_eq!(engine.current_index(), 5);
    }

    #[test]
    fn test_jump_allowed_after_draw() {
        let mut engine = engine_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(engine.state().status(), GameStatus::Drawn);
        let state = engine.jump_to(2).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        let state = engine.reset_game();
        assert_eq!(state.history_len(), 1);
        assert_eq!(state.current_index(), 0);
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_played_cell() {
        let engine = engine_after(&[4, 0, 8]);
        assert_eq!(engine.played_cell(0), None);
        assert_eq!(engine.played_cell(1), Some(4));
        assert_eq!(engine.played_cell(2), Some(0));
        assert_eq!(engine.played_cell(3), Some(8));
        assert_eq!(engine.played_cell(4), None);
    }
}
