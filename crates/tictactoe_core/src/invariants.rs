//! First-class invariants over a running game.
//!
//! Invariants are logical properties that hold after every accepted
//! move. [`Game`](crate::Game) checks them in debug builds.

use crate::outcome::Status;
use crate::types::{Board, Mark};
use crate::Session;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Board and session viewed together.
pub struct GameView<'a> {
    /// The board.
    pub board: &'a Board,
    /// The session.
    pub session: &'a Session,
}

/// Invariant: X has placed as many marks as O, or one more.
pub struct MarkBalance;

impl Invariant<GameView<'_>> for MarkBalance {
    fn holds(view: &GameView<'_>) -> bool {
        let x = view.board.count(Mark::X);
        let o = view.board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: while ongoing, turn `n` sees exactly `n - 1` marked cells.
pub struct TurnMatchesBoard;

impl Invariant<GameView<'_>> for TurnMatchesBoard {
    fn holds(view: &GameView<'_>) -> bool {
        if view.session.status() == Status::Over {
            return true;
        }
        let filled = view.board.cells().iter().filter(|c| !c.is_empty()).count();
        filled + 1 == usize::from(view.session.turn())
    }

    fn description() -> &'static str {
        "Marked cells equal turn - 1 while the game is ongoing"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalance, TurnMatchesBoard);
