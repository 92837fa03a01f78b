//! # Engine Core Types
//!
//! ## Cell encoding
//!
//! The board is a flat `[Cell; 16]` where `Cell` is a three-valued enum
//! (`Empty`, `Human`, `Machine`). A cell is one byte, so the whole grid
//! is 16 bytes and copies nowhere during search: the minimax explores by
//! placing and retracting marks on the single shared instance.
//!
//! ## The `Game` structure
//!
//! `Game` is the authoritative state handed to the controller API:
//! the board plus whose turn it is. Nothing in it outlives a single
//! game; `api::reset_game` wipes it back to the empty opening state.
//!
//! ## The `Move` structure
//!
//! The search output is a `(row, col)` pair, both in `[0, 4)`. A move
//! is legal iff its target cell is `Empty`; the search only ever
//! produces moves from `Board::available_moves`, which guarantees that.

use crate::board::Board;
use crate::constants::BOARD_SIZE;

/// One square of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Human,
    Machine,
}

impl Cell {
    /// Glyph used by renderers; the engine itself never prints.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Human => 'X',
            Cell::Machine => 'O',
        }
    }
}

/// A side in the game. `mark()` maps it onto the cell it places.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    pub fn mark(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Machine => Cell::Machine,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }
}

/// A board coordinate chosen by a player or by the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Both coordinates inside the fixed 4x4 grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// Outcome classification of a position, machine checked first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    MachineWin,
    HumanWin,
    Draw,
}

/// Central game state for one session: the board and the side to move.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub turn: Player,
}

/// Search telemetry: visited node and beta-cutoff counts for one
/// `best_move` call. Purely informational, never feeds back into the
/// move choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cuts: u64,
}
