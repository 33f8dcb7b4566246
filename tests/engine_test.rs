//! Tests for the game engine's public contract.

use rewind_tictactoe::{
    Board, Cell, EngineError, GameEngine, GameStatus, IllegalMoveReason, Mark, Position,
    calculate_winner, is_board_full,
};

fn play_all(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &cell in moves {
        engine.apply_move(cell).expect("Valid move");
    }
    engine
}

#[test]
fn test_five_moves_no_winner() {
    let engine = play_all(&[4, 0, 1, 3, 5]);
    let board = engine.current_board();

    let o = Cell::Occupied(Mark::O);
    let x = Cell::Occupied(Mark::X);
    let e = Cell::Empty;
    assert_eq!(board, Board::from_cells([o, x, e, o, x, x, e, e, e]));
    assert_eq!(calculate_winner(&board), None);
    assert!(!is_board_full(&board));
    assert_eq!(engine.state().status(), GameStatus::InProgress);
    assert_eq!(engine.next_mark(), Mark::O);
}

#[test]
fn test_top_row_win() {
    let engine = play_all(&[0, 3, 1, 4, 2]);
    let win = calculate_winner(&engine.current_board()).expect("X should win");
    assert_eq!(win.mark(), Mark::X);
    assert_eq!(win.line(), [0, 1, 2]);

    let state = engine.state();
    assert_eq!(state.winner(), Some(win));
    assert!(!state.is_draw());
    assert!(state.status().is_terminal());
}

#[test]
fn test_full_board_draw() {
    let engine = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let board = engine.current_board();
    assert!(is_board_full(&board));
    assert_eq!(calculate_winner(&board), None);

    let state = engine.state();
    assert!(state.is_draw());
    assert_eq!(state.status(), GameStatus::Drawn);
}

#[test]
fn test_move_on_drawn_board_rejected() {
    let mut engine = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = engine.clone();
    assert_eq!(
        engine.apply_move(0),
        Err(EngineError::illegal(IllegalMoveReason::GameDecided))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_move_after_win_rejected() {
    let mut engine = play_all(&[0, 3, 1, 4, 2]);
    let before = engine.clone();
    let result = engine.apply_move(5);
    assert!(matches!(result, Err(EngineError::IllegalMove { .. })));
    assert_eq!(engine, before);
}

#[test]
fn test_occupied_cell_rejection_is_idempotent() {
    let mut engine = play_all(&[4, 0]);
    let before = engine.clone();
    for _ in 0..3 {
        assert_eq!(
            engine.apply_move(0),
            Err(EngineError::illegal(IllegalMoveReason::CellOccupied(0)))
        );
        assert_eq!(engine, before);
    }
}

#[test]
fn test_jump_locked_once_last_board_won() {
    let mut engine = play_all(&[0, 3, 1, 4, 2]);
    for index in 0..engine.history().len() {
        assert_eq!(engine.jump_to(index), Err(EngineError::GameAlreadyDecided));
    }
    assert_eq!(engine.current_index(), 5);
}

#[test]
fn test_jump_range_checked_before_lockout() {
    let mut engine = play_all(&[0, 3, 1, 4, 2]);
    assert_eq!(
        engine.jump_to(6),
        Err(EngineError::OutOfRange { index: 6, len: 6 })
    );
}

#[test]
fn test_time_travel_then_branch() {
    let mut engine = play_all(&[0, 3, 1, 4]);

    // Go back to before O's first move and take a different line.
    let state = engine.jump_to(1).unwrap();
    assert!(!state.x_is_next());
    assert_eq!(engine.history().len(), 5);

    engine.play(Position::Center).unwrap();
    assert_eq!(engine.history().len(), 3);
    assert_eq!(
        engine.current_board().cell(Position::Center),
        Cell::Occupied(Mark::O)
    );
    assert_eq!(engine.current_board().cell(Position::MiddleLeft), Cell::Empty);
}

#[test]
fn test_jump_to_later_entry_restores_it() {
    let mut engine = play_all(&[0, 3, 1]);
    let last = engine.current_board();
    engine.jump_to(0).unwrap();
    assert_eq!(engine.current_board(), Board::new());
    engine.jump_to(3).unwrap();
    assert_eq!(engine.current_board(), last);
}

#[test]
fn test_reset_from_any_state() {
    for moves in [&[][..], &[4, 0][..], &[0, 3, 1, 4, 2][..]] {
        let mut engine = play_all(moves);
        if engine.history().len() > 2 && !engine.state().status().is_terminal() {
            engine.jump_to(1).unwrap();
        }
        let state = engine.reset_game();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.x_is_next());
    }
}
