//! Status and per-round outcome types.

use crate::rules::Line;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Whether the session still accepts moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are accepted.
    #[default]
    Ongoing,
    /// The game was won or drawn; only a reset re-opens it.
    Over,
}

/// What a completed round produced.
///
/// Exactly one of these is reported for every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// The mover completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// The ninth move was played without a win.
    Draw,
    /// The game continues with `mark` to move.
    NextTurn(Mark),
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundOutcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns true if this outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::NextTurn(_))
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Won { mark, .. } => write!(f, "Player {mark} has won!"),
            RoundOutcome::Draw => write!(f, "It's a draw!"),
            RoundOutcome::NextTurn(mark) => write!(f, "Player {mark}'s turn"),
        }
    }
}
