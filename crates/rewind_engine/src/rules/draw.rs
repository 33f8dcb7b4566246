//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::calculate_winner;
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
#[instrument(skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_board_full(board) && calculate_winner(board).is_none()
}
