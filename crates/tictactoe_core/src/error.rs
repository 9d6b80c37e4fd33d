//! Error types for board writes and move submission.

/// Error raised by [`Board`](crate::Board) writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The index does not address one of the nine cells.
    #[display("Field {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
}

/// Error raised when a move is refused.
///
/// A refused move never changes the board, the turn counter or the
/// game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not address one of the nine cells.
    #[display("Field {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("Field {} is already occupied", index)]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { index } => MoveError::OutOfBounds { index },
        }
    }
}
