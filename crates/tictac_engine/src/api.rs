//! Public API for the engine
//!
//! Game lifecycle plus the turn-taking controller surface. The
//! controller owns the single authoritative board: human moves arrive
//! validated from the I/O layer and are applied here, machine moves are
//! chosen by the search and applied here. Rendering reads the board
//! through `Game::board` and never mutates it.

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::search::best_move_with_stats;
use crate::types::{Game, GameState, Move, Player, SearchStats};

/// Create a new game with an empty board. `first` moves first.
pub fn new_game(first: Player) -> Game {
    Game {
        board: Board::new(),
        turn: first,
    }
}

/// Reset an existing game back to the empty opening state.
pub fn reset_game(game: &mut Game, first: Player) {
    game.board = Board::new();
    game.turn = first;
}

/// Classify the current position. The machine's line is checked before
/// the human's, then a full board reads as a draw.
pub fn game_state(game: &Game) -> GameState {
    if game.board.has_line(Player::Machine.mark()) {
        GameState::MachineWin
    } else if game.board.has_line(Player::Human.mark()) {
        GameState::HumanWin
    } else if game.board.is_full() {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}

/// Apply a move for the side to move and flip the turn.
///
/// The upstream input layer validates bounds and occupancy before
/// calling in; a violation that reaches this far is reported explicitly
/// rather than applied.
pub fn apply_move(game: &mut Game, mv: Move) -> EngineResult<()> {
    if !mv.in_bounds() {
        return Err(EngineError::InvalidCoordinate {
            row: mv.row,
            col: mv.col,
        });
    }
    if !game.board.is_empty(mv.row, mv.col) {
        return Err(EngineError::OccupiedCell {
            row: mv.row,
            col: mv.col,
        });
    }

    game.board.set(mv.row, mv.col, game.turn.mark());
    game.turn = game.turn.opponent();
    Ok(())
}

/// Let the search pick and play the machine's move.
///
/// The caller must have checked `game_state` first; invoking this on a
/// terminal or full board is a contract violation and surfaces as
/// [`EngineError::NoMoveAvailable`].
pub fn reply(game: &mut Game) -> EngineResult<(Move, SearchStats)> {
    let (mv, stats) = best_move_with_stats(&mut game.board)?;
    game.board.set(mv.row, mv.col, Player::Machine.mark());
    game.turn = game.turn.opponent();
    Ok((mv, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn new_game_starts_in_progress() {
        let game = new_game(Player::Human);
        assert_eq!(game_state(&game), GameState::InProgress);
        assert_eq!(game.turn, Player::Human);
    }

    #[test]
    fn apply_move_places_mark_and_flips_turn() {
        let mut game = new_game(Player::Human);
        apply_move(&mut game, Move::new(1, 2)).unwrap();
        assert_eq!(game.board.get(1, 2), Cell::Human);
        assert_eq!(game.turn, Player::Machine);
    }

    #[test]
    fn apply_move_rejects_out_of_bounds() {
        let mut game = new_game(Player::Human);
        assert_eq!(
            apply_move(&mut game, Move::new(4, 0)),
            Err(EngineError::InvalidCoordinate { row: 4, col: 0 })
        );
    }

    #[test]
    fn apply_move_rejects_occupied_cell() {
        let mut game = new_game(Player::Human);
        apply_move(&mut game, Move::new(0, 0)).unwrap();
        assert_eq!(
            apply_move(&mut game, Move::new(0, 0)),
            Err(EngineError::OccupiedCell { row: 0, col: 0 })
        );
        // The failed attempt changed nothing.
        assert_eq!(game.board.get(0, 0), Cell::Human);
        assert_eq!(game.turn, Player::Machine);
    }

    #[test]
    fn reply_applies_the_chosen_move() {
        let mut game = new_game(Player::Machine);
        let (mv, _) = reply(&mut game).unwrap();
        assert_eq!(game.board.get(mv.row, mv.col), Cell::Machine);
        assert_eq!(game.turn, Player::Human);
        assert_eq!(game.board.occupied_count(), 1);
    }

    #[test]
    fn machine_win_reported_before_draw() {
        let mut game = new_game(Player::Machine);
        for col in 0..4 {
            game.board.set(0, col, Cell::Machine);
        }
        assert_eq!(game_state(&game), GameState::MachineWin);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut game = new_game(Player::Human);
        let rows = [
            [Cell::Human, Cell::Machine, Cell::Machine, Cell::Human],
            [Cell::Human, Cell::Machine, Cell::Machine, Cell::Human],
            [Cell::Machine, Cell::Human, Cell::Human, Cell::Machine],
            [Cell::Machine, Cell::Human, Cell::Human, Cell::Machine],
        ];
        for (r, row) in rows.iter().enumerate() {
            for (c, &mark) in row.iter().enumerate() {
                game.board.set(r, c, mark);
            }
        }
        assert_eq!(game_state(&game), GameState::Draw);
    }

    #[test]
    fn reset_game_clears_the_board() {
        let mut game = new_game(Player::Human);
        apply_move(&mut game, Move::new(2, 2)).unwrap();
        reset_game(&mut game, Player::Machine);
        assert_eq!(game.board.occupied_count(), 0);
        assert_eq!(game.turn, Player::Machine);
    }
}
