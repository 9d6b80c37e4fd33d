//! Rules engine for two-player tic-tac-toe on a 3x3 grid.
//!
//! # Architecture
//!
//! - **Board**: nine cells, indexed 0-8 in row-major order
//! - **Session**: turn order, win/draw detection, game-over status
//! - **Game**: owns a board and a session and reports every round to a
//!   [`Presenter`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Mark, RoundOutcome};
//!
//! let mut game = Game::with_presenter(Vec::<RoundOutcome>::new());
//! for index in [0, 3, 1, 4] {
//!     game.play_round(index)?;
//! }
//! let outcome = game.play_round(2)?;
//! assert_eq!(outcome.winner(), Some(Mark::X));
//! assert!(game.is_over());
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod outcome;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{BoardError, MoveError};
pub use game::{Game, GameSnapshot, Presenter};
pub use outcome::{RoundOutcome, Status};
pub use position::Position;
pub use session::{LAST_TURN, Session};
pub use types::{BOARD_SIZE, Board, Cell, Mark, Player};
