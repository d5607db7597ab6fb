//! Terminal flag invariant: win and draw agree with the board.

use super::Invariant;
use crate::rules;
use crate::GameState;

/// Invariant: at most one terminal flag is set, and a set flag is backed by
/// the board (a completed line for a win, a full board for a draw).
pub struct TerminalFlagsInvariant;

impl Invariant<GameState> for TerminalFlagsInvariant {
    fn holds(game: &GameState) -> bool {
        if game.is_win() && game.is_draw() {
            return false;
        }
        if game.is_win() && rules::check_winner(game.board()).is_none() {
            return false;
        }
        !game.is_draw() || rules::is_draw(game.board())
    }

    fn description() -> &'static str {
        "Win and draw flags are exclusive and match the board"
    }
}
