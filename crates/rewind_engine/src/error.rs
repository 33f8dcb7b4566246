//! Engine error types.
//!
//! Every error is recoverable: a rejected call leaves the engine exactly as
//! it was.

use serde::{Deserialize, Serialize};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The cell index is outside 0-8.
    #[display("cell {} is off the board (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The viewed board is already won or full.
    #[display("the game is already decided")]
    GameDecided,
}

/// Error returned by [`GameEngine`](crate::GameEngine) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum EngineError {
    /// A move could not be applied.
    #[display("Illegal move: {}", reason)]
    IllegalMove {
        /// What made the move illegal.
        reason: IllegalMoveReason,
    },

    /// A history index does not exist.
    #[display("History index {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Time-travel is locked because the last board in history has a winner.
    #[display("The game is over, you cannot go back")]
    GameAlreadyDecided,
}

impl EngineError {
    /// Shorthand for an [`EngineError::IllegalMove`].
    pub fn illegal(reason: IllegalMoveReason) -> Self {
        Self::IllegalMove { reason }
    }
}

impl std::error::Error for EngineError {}
