//! Terminal position evaluation
//!
//! Scores a board from the machine's perspective: `+10` when the
//! machine holds a complete line, `-10` when the human does, `0`
//! otherwise. Under legal alternating play both sides can never hold a
//! line at once; checking the machine first keeps the result
//! deterministic even for synthetic states that violate that.

use crate::board::Board;
use crate::constants::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::types::Cell;

/// Evaluate the board: machine line, human line, or neither.
pub fn evaluate(board: &Board) -> i16 {
    if board.has_line(Cell::Machine) {
        WIN_SCORE
    } else if board.has_line(Cell::Human) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}
