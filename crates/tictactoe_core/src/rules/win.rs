//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Three cell indices that win when uniformly marked.
pub type Line = [usize; 3];

/// The eight winning lines.
pub const LINES: [Line; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Lines that include `index`.
///
/// An edge cell belongs to two lines, a corner to three and the center
/// to four. Out-of-range indices belong to none.
pub fn lines_through(index: usize) -> impl Iterator<Item = Line> {
    LINES.into_iter().filter(move |line| line.contains(&index))
}

/// Returns the first line through `index` fully held by `mark`.
///
/// A move can only complete a line it belongs to, so checking the lines
/// through the last placed index is enough to detect a new win.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, index: usize, mark: Mark) -> Option<Line> {
    lines_through(index).find(|line| {
        line.iter()
            .all(|&i| board.field(i) == Some(Cell::Marked(mark)))
    })
}
