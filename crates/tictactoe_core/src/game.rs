//! The game aggregate: one board, one session, one presenter.

use crate::error::MoveError;
use crate::invariants::{GameInvariants, GameView, InvariantSet};
use crate::outcome::{RoundOutcome, Status};
use crate::session::Session;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Receives the outcome of every round.
///
/// This is the outbound seam towards whatever renders the game.
pub trait Presenter {
    /// Called exactly once per accepted move, and once after each reset.
    fn present(&mut self, outcome: &RoundOutcome);
}

/// Discards every outcome.
impl Presenter for () {
    fn present(&mut self, _outcome: &RoundOutcome) {}
}

/// Records outcomes in order.
impl Presenter for Vec<RoundOutcome> {
    fn present(&mut self, outcome: &RoundOutcome) {
        self.push(*outcome);
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, outcome: &RoundOutcome) {
        (**self).present(outcome);
    }
}

/// Serializable picture of a game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells in row-major order.
    pub cells: [Cell; 9],
    /// Current turn (1-9).
    pub turn: u8,
    /// Terminal status.
    pub status: Status,
    /// Mark to move next (meaningless once over).
    pub current: Mark,
}

/// A complete game: board, turn order and the presenter that shows it.
///
/// Created once by the composition root and handed to the front end.
/// All gameplay goes through [`Game::play_round`] and [`Game::reset`],
/// which keeps board and session in step.
#[derive(Debug, Clone)]
pub struct Game<P = ()> {
    board: Board,
    session: Session,
    presenter: P,
}

impl Game<()> {
    /// Creates a game without a presenter.
    pub fn new() -> Self {
        Self::with_presenter(())
    }
}

impl Default for Game<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Presenter> Game<P> {
    /// Creates a game that reports outcomes to `presenter`.
    #[instrument(skip(presenter))]
    pub fn with_presenter(presenter: P) -> Self {
        info!("Creating new game");
        Self {
            board: Board::new(),
            session: Session::new(),
            presenter,
        }
    }

    /// Plays the current player's mark at `index` and reports the outcome.
    ///
    /// # Errors
    ///
    /// See [`Session::play_round`]. Refused moves are not reported to
    /// the presenter.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        let outcome = self.session.play_round(&mut self.board, index)?;
        self.check_invariants();
        self.presenter.present(&outcome);
        Ok(outcome)
    }

    /// Clears the board and restarts turn order together, then announces
    /// that X is to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.session.reset();
        info!("Game reset");
        self.presenter.present(&RoundOutcome::NextTurn(self.session.current_mark()));
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the game, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            turn: self.session.turn(),
            status: self.session.status(),
            current: self.session.current_mark(),
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let view = GameView {
                board: &self.board,
                session: &self.session,
            };
            if let Err(violations) = GameInvariants::check_all(&view) {
                for violation in &violations {
                    error!(%violation, "Invariant violated");
                }
                debug_assert!(violations.is_empty(), "Game invariants violated");
            }
        }
    }
}
