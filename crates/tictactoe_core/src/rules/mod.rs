//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! and from the match controller so they can be tested on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Three in a row.
    Winner {
        /// Mark that completed the line.
        mark: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board full, no line complete.
    Tie,
}

/// Evaluates the board: a winner, a tie, or `None` while play continues.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Verdict> {
    if let Some((mark, line)) = winning_line(board) {
        return Some(Verdict::Winner { mark, line });
    }
    if is_full(board) {
        return Some(Verdict::Tie);
    }
    None
}
