//! Engine constants - board geometry and search parameters
//!
//! The board geometry is fixed: a 4x4 grid where only full rows, full
//! columns, and the two main diagonals win. The search parameters come
//! in pairs: terminal scores for the evaluator and the bounds/cutoffs
//! the alpha-beta search runs with.

/// Side length of the (square) board.
pub const BOARD_SIZE: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Terminal score for a machine win, before depth bias.
pub const WIN_SCORE: i16 = 10;

/// Terminal score for a human win, before depth bias.
pub const LOSS_SCORE: i16 = -10;

/// Score of a draw or an unresolved position at the horizon.
pub const DRAW_SCORE: i16 = 0;

/// Depth horizon: positions this many plies below the search root that
/// are still undecided score as a draw. On a 4x4 board the full tree is
/// only reachable once the game is more than half played; truncating
/// earlier keeps move latency bounded at the cost of search strength.
/// Deliberate trade-off, do not "fix" by deepening.
pub const MAX_DEPTH: i32 = 6;

/// Alpha-beta window bound. Any real score fits well inside it.
pub const AB_INF: i16 = 32000;
