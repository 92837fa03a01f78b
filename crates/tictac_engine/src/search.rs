//! Depth-limited minimax with alpha-beta pruning
//!
//! The search explores hypothetical move sequences by placing and
//! retracting marks on the one shared `Board` - no copies, strict LIFO
//! discipline, so the board is bit-identical before and after every
//! call. Depth is capped at [`MAX_DEPTH`]: undecided positions below
//! the horizon score as a draw, trading completeness for bounded
//! latency.
//!
//! Terminal scores carry a depth bias: a machine win at depth `d`
//! scores `10 - d` and a human win `-10 + d`, so among several winning
//! lines the search prefers the shallowest win, and among losing lines
//! it pushes the loss as deep as possible.

use crate::board::Board;
use crate::constants::{AB_INF, DRAW_SCORE, LOSS_SCORE, MAX_DEPTH, WIN_SCORE};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::evaluate;
use crate::types::{Cell, Move, SearchStats};

/// Minimax with alpha-beta pruning.
///
/// `maximizing` means the machine is to move in the hypothetical
/// position. Moves are explored in the row-major order produced by
/// `Board::available_moves`, which fixes tie-breaking; pruning never
/// changes the result, only how much of the tree is visited.
fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i16,
    mut beta: i16,
    stats: &mut SearchStats,
) -> i16 {
    stats.nodes += 1;

    let base = evaluate(board);

    // Terminal: someone already has a line. Bias by depth so faster
    // wins (and slower losses) score better.
    if base == WIN_SCORE {
        return base - depth as i16;
    }
    if base == LOSS_SCORE {
        return base + depth as i16;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    // Horizon cutoff: treat unresolved deep positions as neutral.
    if depth >= MAX_DEPTH {
        return DRAW_SCORE;
    }

    if maximizing {
        let mut best = -AB_INF;
        for mv in board.available_moves() {
            board.set(mv.row, mv.col, Cell::Machine);
            let score = minimax(board, depth + 1, false, alpha, beta, stats);
            board.clear(mv.row, mv.col);

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cuts += 1;
                break;
            }
        }
        best
    } else {
        let mut best = AB_INF;
        for mv in board.available_moves() {
            board.set(mv.row, mv.col, Cell::Human);
            let score = minimax(board, depth + 1, true, alpha, beta, stats);
            board.clear(mv.row, mv.col);

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cuts += 1;
                break;
            }
        }
        best
    }
}

/// Find the best move for the machine, with search telemetry.
///
/// Tries every available move in row-major order and keeps the one with
/// the strictly greatest score - later equal-scoring moves never
/// replace an earlier one, so the choice is reproducible. The board is
/// restored to its input state before returning.
///
/// # Errors
///
/// Returns [`EngineError::NoMoveAvailable`] when no cell is empty. The
/// controller is expected to have checked terminal conditions first;
/// the explicit error keeps a full board from ever being mistaken for
/// a real move.
pub fn best_move_with_stats(board: &mut Board) -> EngineResult<(Move, SearchStats)> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(EngineError::NoMoveAvailable);
    }

    let mut stats = SearchStats::default();
    let mut best_score = -AB_INF;
    let mut best: Option<Move> = None;

    for mv in moves {
        board.set(mv.row, mv.col, Cell::Machine);
        let score = minimax(board, 0, false, -AB_INF, AB_INF, &mut stats);
        board.clear(mv.row, mv.col);

        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    // The move list was non-empty, so at least one move beat -AB_INF.
    match best {
        Some(mv) => Ok((mv, stats)),
        None => Err(EngineError::NoMoveAvailable),
    }
}

/// Find the best move for the machine.
pub fn best_move(board: &mut Board) -> EngineResult<Move> {
    best_move_with_stats(board).map(|(mv, _)| mv)
}
