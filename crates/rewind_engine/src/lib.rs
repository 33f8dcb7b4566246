//! Pure tic-tac-toe game-state engine.
//!
//! The engine owns a linear history of board snapshots and a pointer into
//! it. Moves append to the history, jumps move the pointer, and everything
//! else (winner, draw, whose turn) is derived from the board being viewed.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: pure functions over a board ([`calculate_winner`], [`is_board_full`])
//! - **Engine**: [`GameEngine`] with move application and time-travel
//! - **Invariants**: checkable properties of an engine's history
//!
//! # Example
//!
//! ```
//! use rewind_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell).unwrap();
//! }
//! let state = engine.state();
//! assert!(matches!(state.status(), GameStatus::Won(win) if win.mark() == Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use engine::GameEngine;
pub use error::{EngineError, IllegalMoveReason};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryAnchoredInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant, MonotonicHistoryInvariant,
};
pub use position::Position;
pub use rules::{WINNING_LINES, Win, calculate_winner, is_board_full, is_draw};
pub use state::{GameState, GameStatus};
pub use types::{Board, Cell, Mark};
