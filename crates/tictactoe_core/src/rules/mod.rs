//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, lines_through, winning_line};
