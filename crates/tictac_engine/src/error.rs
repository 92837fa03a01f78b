//! Error types for the engine
//!
//! The core is a pure function of its input state, so the taxonomy is
//! short: every variant is a caller contract violation. The upstream
//! input layer is responsible for rejecting bad coordinates before they
//! reach the engine; when one gets through anyway the engine reports it
//! explicitly instead of guessing.

use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Row or column outside the 4x4 grid
    #[error("invalid coordinate: row {row}, col {col} (must be 0-3)")]
    InvalidCoordinate { row: usize, col: usize },

    /// Attempt to place a mark on a non-empty cell
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    /// `best_move` called with no legal moves left. The controller must
    /// guard with terminal checks before invoking the search; an
    /// explicit error here ensures a full board can never be mistaken
    /// for a real move.
    #[error("no move available: the board has no empty cell")]
    NoMoveAvailable,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
