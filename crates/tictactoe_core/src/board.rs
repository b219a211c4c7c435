//! The 3x3 grid.

use super::error::MatchError;
use super::position::Position;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// The board is the only authority over cell contents. Cells are write-once:
/// a mark, once placed, stays until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `mark` at a raw cell index.
    ///
    /// Returns `Ok(true)` if the mark was placed and `Ok(false)` if the cell
    /// was already taken, in which case the board is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::IndexOutOfRange`] if `index` is not in 0-8.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<bool, MatchError> {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Cell index outside the board");
            return Err(MatchError::IndexOutOfRange(index));
        };
        Ok(self.place(pos, mark))
    }

    /// Places `mark` at `pos` if the cell is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        match self.get(pos) {
            Cell::Empty => {
                self.cells[pos.to_index()] = Cell::Occupied(mark);
                debug!(%pos, %mark, "Mark placed");
                true
            }
            Cell::Occupied(existing) => {
                debug!(%pos, %existing, "Cell already occupied");
                false
            }
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Cell::Empty => (pos.to_index() + 1).to_string(),
                Cell::Occupied(mark) => mark.to_string(),
            };
            result.push_str(&symbol);
            match (pos.col(), pos.row()) {
                (2, 2) => {}
                (2, _) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
