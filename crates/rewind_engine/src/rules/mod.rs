//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from the
//! engine's history so hosts and tests can apply them to any board.

mod draw;
mod win;

pub use draw::{is_board_full, is_draw};
pub use win::{WINNING_LINES, Win, calculate_winner};
