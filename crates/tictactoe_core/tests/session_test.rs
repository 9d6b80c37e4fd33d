//! Tests for turn order, win and draw detection.

use tictactoe_core::{Board, Cell, Mark, MoveError, RoundOutcome, Session, Status};

/// X:0, O:1, X:2, O:4, X:3, O:5, X:7, O:6, X:8 fills the board without a line.
const DRAW_SEQUENCE: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

fn play_all(board: &mut Board, session: &mut Session, moves: &[usize]) -> Vec<RoundOutcome> {
    moves
        .iter()
        .map(|&index| session.play_round(board, index).expect("legal move"))
        .collect()
}

#[test]
fn test_odd_turns_place_x_even_turns_place_o() {
    let mut board = Board::new();
    let mut session = Session::new();

    for (turn, &index) in DRAW_SEQUENCE.iter().enumerate() {
        assert_eq!(usize::from(session.turn()), turn + 1);
        session.play_round(&mut board, index).unwrap();

        let expected = if turn % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(board.field(index), Some(Cell::Marked(expected)));
    }
}

#[test]
fn test_row_win_on_fifth_move() {
    let mut board = Board::new();
    let mut session = Session::new();

    let outcomes = play_all(&mut board, &mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes.last(),
        Some(&RoundOutcome::Won {
            mark: Mark::X,
            line: [0, 1, 2],
        })
    );
    assert!(outcomes[..4].iter().all(|o| !o.is_terminal()));
    assert!(session.is_over());
}

#[test]
fn test_diagonal_win_on_fifth_move() {
    let mut board = Board::new();
    let mut session = Session::new();

    let outcomes = play_all(&mut board, &mut session, &[0, 1, 4, 2, 8]);

    assert_eq!(outcomes[4].to_string(), "Player X has won!");
    assert_eq!(outcomes[4].winner(), Some(Mark::X));
    assert!(session.is_over());
}

#[test]
fn test_o_can_win() {
    let mut board = Board::new();
    let mut session = Session::new();

    let outcomes = play_all(&mut board, &mut session, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(
        outcomes[5],
        RoundOutcome::Won {
            mark: Mark::O,
            line: [2, 4, 6],
        }
    );
}

#[test]
fn test_win_on_ninth_move_is_not_a_draw() {
    let mut board = Board::new();
    let mut session = Session::new();

    // X completes the left column with the last free cell.
    let outcomes = play_all(&mut board, &mut session, &[0, 1, 3, 4, 5, 2, 7, 8, 6]);

    assert_eq!(outcomes[8].winner(), Some(Mark::X));
    assert!(outcomes[..8].iter().all(|o| !o.is_terminal()));
}

#[test]
fn test_draw_reported_exactly_on_ninth_move() {
    let mut board = Board::new();
    let mut session = Session::new();

    for (i, &index) in DRAW_SEQUENCE.iter().enumerate() {
        let outcome = session.play_round(&mut board, index).unwrap();
        if i < 8 {
            assert!(matches!(outcome, RoundOutcome::NextTurn(_)), "move {}", i + 1);
            assert!(!session.is_over(), "move {}", i + 1);
        } else {
            assert_eq!(outcome, RoundOutcome::Draw);
            assert_eq!(outcome.to_string(), "It's a draw!");
            assert!(session.is_over());
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_next_turn_messages_alternate() {
    let mut board = Board::new();
    let mut session = Session::new();

    let outcomes = play_all(&mut board, &mut session, &[4, 0]);

    assert_eq!(outcomes[0].to_string(), "Player O's turn");
    assert_eq!(outcomes[1].to_string(), "Player X's turn");
}

#[test]
fn test_moves_after_game_over_are_refused() {
    let mut board = Board::new();
    let mut session = Session::new();
    play_all(&mut board, &mut session, &DRAW_SEQUENCE);
    let before = board.clone();

    assert_eq!(session.play_round(&mut board, 0), Err(MoveError::GameOver));
    assert_eq!(board, before);
    assert_eq!(session.status(), Status::Over);
}

#[test]
fn test_session_and_board_resets_are_independent() {
    let mut board = Board::new();
    let mut session = Session::new();
    play_all(&mut board, &mut session, &[0, 3, 1, 4, 2]);

    session.reset();
    assert_eq!(session.turn(), 1);
    assert!(!session.is_over());
    assert!(!board.is_empty(0), "session reset must not clear the board");

    board.reset();
    assert_eq!(board, Board::new());

    // Fully restored: the same win replays identically.
    let outcomes = play_all(&mut board, &mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(outcomes[4].winner(), Some(Mark::X));
}

#[test]
fn test_is_over_is_idempotent() {
    let mut board = Board::new();
    let mut session = Session::new();
    session.play_round(&mut board, 4).unwrap();

    for _ in 0..5 {
        assert!(!session.is_over());
    }
}
