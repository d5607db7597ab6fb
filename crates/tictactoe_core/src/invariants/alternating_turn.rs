//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{Player, Square};
use crate::GameState;

/// Invariant: the k-th move in history carries the mark of the k-th player.
///
/// The first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().all(|(ply, &cell)| {
            game.board().get(cell) == Some(Square::Occupied(Player::to_move_after(ply)))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
