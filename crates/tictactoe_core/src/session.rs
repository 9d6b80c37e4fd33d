//! Turn order and terminal-state tracking.

use crate::error::MoveError;
use crate::outcome::{RoundOutcome, Status};
use crate::rules;
use crate::types::{BOARD_SIZE, Board, Mark, Player};
use tracing::{debug, info, instrument, warn};

/// Last turn of a game; a move on this turn without a win is a draw.
pub const LAST_TURN: u8 = BOARD_SIZE as u8;

/// Turn order and game-over status for one game.
///
/// The session does not own the board; it is handed the board on every
/// round. The active player is derived from turn parity: odd turns
/// belong to X, even turns to O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    player_x: Player,
    player_o: Player,
    turn: u8,
    status: Status,
}

impl Session {
    /// Creates a session at turn 1 with X to move.
    pub fn new() -> Self {
        Self {
            player_x: Player::new(Mark::X),
            player_o: Player::new(Mark::O),
            turn: 1,
            status: Status::Ongoing,
        }
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Only the lines that pass through `index` are checked for a win.
    /// If none is complete and this was the ninth turn the game is a
    /// draw; otherwise the turn advances.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::OutOfBounds`] for indices outside `0..9`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// On error neither the board nor the session changes.
    #[instrument(skip(self, board), fields(turn = self.turn, mark = %self.current_mark()))]
    pub fn play_round(&mut self, board: &mut Board, index: usize) -> Result<RoundOutcome, MoveError> {
        if self.is_over() {
            warn!(index, "Move submitted after game over");
            return Err(MoveError::GameOver);
        }

        if board.field(index).is_some_and(|cell| !cell.is_empty()) {
            warn!(index, "Move submitted to occupied field");
            return Err(MoveError::CellOccupied { index });
        }

        let mark = self.current_mark();
        board.set_field(index, mark).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected by board");
        })?;

        if let Some(line) = rules::winning_line(board, index, mark) {
            self.status = Status::Over;
            info!(%mark, ?line, "Game won");
            return Ok(RoundOutcome::Won { mark, line });
        }

        if self.turn == LAST_TURN {
            self.status = Status::Over;
            info!("Game drawn");
            return Ok(RoundOutcome::Draw);
        }

        self.turn += 1;
        let next = self.current_mark();
        debug!(turn = self.turn, next = %next, "Turn advanced");
        Ok(RoundOutcome::NextTurn(next))
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    /// Returns the terminal status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the current turn (1-9).
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        if self.turn % 2 == 1 {
            &self.player_x
        } else {
            &self.player_o
        }
    }

    /// Returns the mark of the player whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.current_player().mark()
    }

    /// Returns both players, X first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.player_x, &self.player_o]
    }

    /// Restarts turn order at turn 1 and re-opens the game.
    ///
    /// The board is not touched; use [`Game::reset`](crate::Game::reset)
    /// to restore both together.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.turn = 1;
        self.status = Status::Ongoing;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.turn(), 1);
        assert_eq!(session.status(), Status::Ongoing);
        assert_eq!(session.current_mark(), Mark::X);
        assert!(!session.is_over());
    }

    #[test]
    fn test_turn_parity() {
        let mut board = Board::new();
        let mut session = Session::new();

        for index in 0..4 {
            let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(session.current_mark(), expected);
            session.play_round(&mut board, [0, 1, 5, 3][index]).unwrap();
        }
        assert_eq!(session.turn(), 5);
        assert_eq!(board.field(0).and_then(|c| c.mark()), Some(Mark::X));
        assert_eq!(board.field(1).and_then(|c| c.mark()), Some(Mark::O));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut board = Board::new();
        let mut session = Session::new();
        session.play_round(&mut board, 4).unwrap();

        let (board_before, session_before) = (board.clone(), session.clone());
        assert_eq!(
            session.play_round(&mut board, 4),
            Err(MoveError::CellOccupied { index: 4 })
        );
        assert_eq!(
            session.play_round(&mut board, 42),
            Err(MoveError::OutOfBounds { index: 42 })
        );
        assert_eq!(board, board_before);
        assert_eq!(session, session_before);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut board = Board::new();
        let mut session = Session::new();
        for index in [0, 3, 1, 4] {
            session.play_round(&mut board, index).unwrap();
        }
        assert!(matches!(
            session.play_round(&mut board, 2),
            Ok(RoundOutcome::Won { mark: Mark::X, .. })
        ));

        assert_eq!(session.play_round(&mut board, 8), Err(MoveError::GameOver));
        assert!(board.is_empty(8));
    }

    #[test]
    fn test_reset_leaves_board() {
        let mut board = Board::new();
        let mut session = Session::new();
        session.play_round(&mut board, 0).unwrap();
        session.reset();

        assert_eq!(session.turn(), 1);
        assert!(!session.is_over());
        assert!(!board.is_empty(0));
    }
}
