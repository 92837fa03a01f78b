//! Decision engine for 4x4 tic-tac-toe
//!
//! The crate is split the same way the game is:
//! - `board` - grid state and pure queries (occupancy, lines, open cells)
//! - `evaluation` - terminal scoring from the machine's perspective
//! - `search` - depth-limited minimax with alpha-beta pruning
//! - `api` - game lifecycle and the turn-taking controller surface
//!
//! The engine is purely synchronous and deterministic: given the same
//! board the search always returns the same move. The single `Board` is
//! mutated in place during search via a strict place/retract discipline,
//! so every entry point leaves the board exactly as it found it.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod types;

pub use api::{apply_move, game_state, new_game, reply, reset_game};
pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use types::{Cell, Game, GameState, Move, Player, SearchStats};
