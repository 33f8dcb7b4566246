//! Terminal host for the rewind tic-tac-toe engine.
//!
//! The engine ([`rewind_engine`]) is pure and synchronous. This crate adds
//! everything a player needs around it:
//!
//! - **Config**: TOML file, environment override, CLI flags
//! - **Commands**: parsing of interactive input lines
//! - **Render**: text board with winning-line highlight, or JSON state
//! - **Session**: the input loop and the auto-reset timer for finished games

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use config::{ConfigError, HostConfig, OutputFormat};
pub use session::{Flow, Reply, Session, run};

// Re-export engine types for hosts and tests
pub use rewind_engine::{
    Board, Cell, EngineError, EngineInvariants, GameEngine, GameState, GameStatus,
    IllegalMoveReason, Invariant, InvariantSet, Mark, Position, WINNING_LINES, Win,
    calculate_winner, is_board_full, is_draw,
};
