//! History consistency invariant: occupied cells are exactly the played cells.

use super::Invariant;
use crate::types::{CELL_COUNT, Square};
use crate::GameState;

/// Invariant: a cell is occupied iff it appears in the move history.
///
/// History entries are in range and unique; no square is filled without a
/// move and no move is missing from the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut played = [false; CELL_COUNT];
        for &cell in game.history() {
            match played.get_mut(cell) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }

        game.cells()
            .iter()
            .zip(played)
            .all(|(square, played)| (*square != Square::Empty) == played)
    }

    fn description() -> &'static str {
        "Occupied cells match the move history"
    }
}
