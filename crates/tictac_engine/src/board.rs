//! Board state and pure queries
//!
//! Provides the fundamental grid operations used throughout the engine:
//! - Cell occupancy queries and mutation
//! - Winning-line detection (rows, columns, two main diagonals)
//! - Enumeration of open cells in row-major order

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::types::{Cell, Move};

/// Convert row and column to linear position (0-15)
#[inline]
fn rc_to_pos(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// The 4x4 grid, stored flat. Exactly the cells explicitly set are
/// non-empty; the size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get the cell at (row, col). Out-of-range coordinates are a
    /// programming error and panic via the slice index.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[rc_to_pos(row, col)]
    }

    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Place a mark. Callers guarantee bounds and emptiness; the search
    /// and the controller both only write to cells they just observed
    /// as empty.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, mark: Cell) {
        self.cells[rc_to_pos(row, col)] = mark;
    }

    /// Retract a mark placed by `set`.
    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[rc_to_pos(row, col)] = Cell::Empty;
    }

    /// True iff `mark` occupies an entire row, an entire column, the
    /// main diagonal, or the anti-diagonal. Short-circuits on the first
    /// complete line; only the boolean matters, not which line.
    pub fn has_line(&self, mark: Cell) -> bool {
        for row in 0..BOARD_SIZE {
            if (0..BOARD_SIZE).all(|col| self.get(row, col) == mark) {
                return true;
            }
        }

        for col in 0..BOARD_SIZE {
            if (0..BOARD_SIZE).all(|row| self.get(row, col) == mark) {
                return true;
            }
        }

        if (0..BOARD_SIZE).all(|i| self.get(i, i) == mark) {
            return true;
        }

        (0..BOARD_SIZE).all(|i| self.get(i, BOARD_SIZE - 1 - i) == mark)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// All empty cells in row-major order (row ascending, then column).
    /// The order fixes search exploration order and therefore which of
    /// several equal-scored moves wins the tie, so it must not change.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELL_COUNT - self.occupied_count());
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_empty(row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }
}
