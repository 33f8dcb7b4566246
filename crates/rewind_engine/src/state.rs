//! Derived, read-only view of a game.

use super::rules::{Win, calculate_winner, is_board_full};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Status of the board being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A line is complete.
    Won(Win),
    /// Board full, no line complete.
    Drawn,
}

impl GameStatus {
    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Snapshot of everything a presentation layer needs to render a game.
///
/// Computed from the engine's history and current index on demand; never
/// stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_index: usize,
    history_len: usize,
    x_is_next: bool,
    winner: Option<Win>,
    is_draw: bool,
}

impl GameState {
    /// Derives the state for `board` viewed at `current_index`.
    pub(crate) fn derive(board: Board, current_index: usize, history_len: usize) -> Self {
        let winner = calculate_winner(&board);
        Self {
            board,
            current_index,
            history_len,
            x_is_next: current_index % 2 == 0,
            winner,
            is_draw: winner.is_none() && is_board_full(&board),
        }
    }

    /// The board being viewed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the viewed board in history.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of entries in history.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// True when X is to move on the viewed board.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The mark to move on the viewed board.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// The completed line, if any.
    pub fn winner(&self) -> Option<Win> {
        self.winner
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(win) => GameStatus::Won(win),
            None if self.is_draw => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// True when viewing an earlier entry than the last one.
    pub fn is_time_travelling(&self) -> bool {
        self.current_index + 1 < self.history_len
    }
}
