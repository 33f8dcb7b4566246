//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: the winning mark and the three cell indices it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Win {
    mark: Mark,
    line: [usize; 3],
}

impl Win {
    /// The winning mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The winning line, as listed in [`WINNING_LINES`].
    pub fn line(&self) -> [usize; 3] {
        self.line
    }

    /// Returns true if `index` is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Finds the first line in [`WINNING_LINES`] held entirely by one mark.
///
/// Lines are scanned in table order, so a board holding two complete lines
/// reports the earlier one.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Win> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(Win::new(mark, [a, b, c]))
        }
        _ => None,
    })
}
