//! Text and JSON rendering of engine state.

use rewind_engine::{Cell, GameEngine, GameState, GameStatus, Position};
use tracing::instrument;

/// Renders the board, bracketing the cells of a winning line.
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
#[instrument(skip(state))]
pub fn render_board(state: &GameState) -> String {
    let win = state.winner();
    let board = state.board();

    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let symbol = match board.get(index) {
                        Some(Cell::Occupied(mark)) => mark.to_string(),
                        _ => index.to_string(),
                    };
                    if win.is_some_and(|w| w.contains(index)) {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

/// One-line status: winner, draw, or whose turn it is.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(win) => format!("Winner: {}", win.mark()),
        GameStatus::Drawn => "Draw!".to_string(),
        GameStatus::InProgress => format!("Next player: {}", state.next_mark()),
    }
}

/// Board plus status, with a note when viewing an earlier entry.
pub fn render_text(state: &GameState) -> String {
    let mut out = render_board(state);
    out.push('\n');
    out.push_str(&status_line(state));
    if state.is_time_travelling() {
        out.push_str(&format!(
            " (viewing move #{} of {})",
            state.current_index(),
            state.history_len() - 1
        ));
    }
    out
}

/// Serializes the state as a single JSON line.
pub fn render_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Label for a history entry: `Go to game start` or `Go to move #n`.
pub fn history_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}

/// Lists history entries, marking the one being viewed.
#[instrument(skip(engine))]
pub fn render_history(engine: &GameEngine) -> String {
    let board_at = engine.history();
    (0..board_at.len())
        .map(|index| {
            let cursor = if index == engine.current_index() { '>' } else { ' ' };
            let detail = engine
                .played_cell(index)
                .and_then(|cell| {
                    let mark = board_at[index].get(cell)?.mark()?;
                    let pos = Position::from_index(cell)?;
                    Some(format!(" ({mark} at {pos})"))
                })
                .unwrap_or_default();
            format!("{cursor} {index}. {}{detail}", history_label(index))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_after(moves: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &cell in moves {
            engine.apply_move(cell).unwrap();
        }
        engine
    }

    #[test]
    fn test_empty_board() {
        let state = GameEngine::new().state();
        assert_eq!(
            render_board(&state),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
        assert_eq!(status_line(&state), "Next player: X");
    }

    #[test]
    fn test_winning_line_bracketed() {
        let state = engine_after(&[0, 3, 1, 4, 2]).state();
        let board = render_board(&state);
        assert!(board.starts_with("[X]|[X]|[X]\n"));
        assert!(board.contains(" O | O | 5 "));
        assert_eq!(status_line(&state), "Winner: X");
    }

    #[test]
    fn test_draw_status() {
        let state = engine_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).state();
        assert_eq!(status_line(&state), "Draw!");
        assert!(!render_board(&state).contains('['));
    }

    #[test]
    fn test_time_travel_note() {
        let mut engine = engine_after(&[4, 0]);
        let state = engine.jump_to(1).unwrap();
        assert!(render_text(&state).ends_with("Next player: O (viewing move #1 of 2)"));
    }

    #[test]
    fn test_history_listing() {
        let mut engine = engine_after(&[4, 0]);
        engine.jump_to(1).unwrap();
        assert_eq!(
            render_history(&engine),
            "  0. Go to game start\n> 1. Go to move #1 (X at Center)\n  2. Go to move #2 (O at Top-left)"
        );
    }

    #[test]
    fn test_json_fields() {
        let state = engine_after(&[0, 3, 1, 4, 2]).state();
        let value: serde_json::Value = serde_json::from_str(&render_json(&state).unwrap()).unwrap();
        assert_eq!(value["current_index"], 5);
        assert_eq!(value["x_is_next"], false);
        assert_eq!(value["winner"]["mark"], "X");
        assert_eq!(value["winner"]["line"], serde_json::json!([0, 1, 2]));
        assert_eq!(value["is_draw"], false);
    }
}
