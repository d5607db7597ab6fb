//! Position analysis for the `analyze` command.

use serde::Serialize;
use tictactoe_core::{GameError, GameState, GameStatus, Player, evaluate};
use tracing::instrument;

/// Minimax verdict on a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Moves replayed to reach the position.
    pub moves: Vec<usize>,
    /// Player to move.
    pub to_move: Player,
    /// Game status.
    pub status: GameStatus,
    /// Minimax value for the player to move.
    pub value: i32,
    /// Optimal moves, ascending.
    pub best_moves: Vec<usize>,
    /// The position.
    pub state: GameState,
}

/// Replays `moves` and evaluates the result.
///
/// # Errors
///
/// Returns the error of the first illegal move.
#[instrument]
pub fn analyze(moves: &[usize]) -> Result<Analysis, GameError> {
    let mut state = GameState::from_moves(moves)?;
    let evaluation = evaluate(&mut state);
    Ok(Analysis {
        moves: moves.to_vec(),
        to_move: state.current_player(),
        status: state.status(),
        value: evaluation.value,
        best_moves: evaluation.moves,
        state,
    })
}

impl Analysis {
    /// Human-readable summary.
    pub fn render(&self) -> String {
        let verdict = match self.value {
            0 => "draw with best play".to_string(),
            v if v > 0 => format!("{} wins with best play", self.to_move),
            _ => format!("{} wins with best play", self.to_move.opponent()),
        };
        let mut out = self.state.board().display();
        out.push_str(&format!("\n\nStatus: {}\n", self.status));
        if self.status == GameStatus::InProgress {
            out.push_str(&format!("To move: {}\n", self.to_move));
            out.push_str(&format!("Value: {} ({})\n", self.value, verdict));
            out.push_str(&format!("Best moves (0-based): {:?}\n", self.best_moves));
        }
        out
    }
}
