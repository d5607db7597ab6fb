//! Exhaustive minimax search.
//!
//! The search plays and undoes moves on the caller's [`GameState`] instead of
//! cloning a board per node. Every lookahead move goes through a
//! [`Lookahead`] guard, which takes the move back when it is dropped, so the
//! state is restored on every exit path.

use crate::GameState;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, warn};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Value of a position the player to move has already lost.
pub const LOSS_VALUE: i32 = -10;

/// Value of a drawn position.
pub const DRAW_VALUE: i32 = 0;

// ============================================================================
// EVALUATION
// ============================================================================

/// Result of evaluating a position for the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Minimax value. Positive favours the player to move; magnitude decays
    /// by one per ply, so faster wins score higher.
    pub value: i32,
    /// All moves achieving `value`, ascending. Empty for terminal positions.
    pub moves: Vec<usize>,
}

impl Evaluation {
    fn terminal(value: i32) -> Self {
        Self {
            value,
            moves: Vec::new(),
        }
    }
}

/// Converts a child's value to the parent's perspective.
///
/// Negates the value and shrinks its magnitude by one ply.
pub fn backup(value: i32) -> i32 {
    if value == 0 {
        0
    } else {
        (value.abs() - 1) * (-value).signum()
    }
}

// ============================================================================
// LOOKAHEAD GUARD
// ============================================================================

/// A move played for lookahead. Dropping the guard takes the move back.
pub struct Lookahead<'a> {
    state: &'a mut GameState,
}

impl<'a> Lookahead<'a> {
    /// Plays `cell` on `state`, returning a guard that undoes it on drop.
    pub fn play(state: &'a mut GameState, cell: usize) -> Result<Self, crate::GameError> {
        state.play(cell)?;
        Ok(Self { state })
    }
}

impl Deref for Lookahead<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Lookahead<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Lookahead<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.state.undo() {
            warn!(error = %e, "Lookahead guard found nothing to undo");
        }
    }
}

// ============================================================================
// MINIMAX
// ============================================================================

/// Evaluates `state` for the player to move with a full-depth minimax search.
///
/// The state is identical before and after the call.
#[instrument(skip(state), fields(history = ?state.history()))]
pub fn evaluate(state: &mut GameState) -> Evaluation {
    let mut nodes = 0u64;
    let evaluation = minimax(state, &mut nodes);
    debug!(
        value = evaluation.value,
        candidates = ?evaluation.moves,
        nodes,
        "Search complete"
    );
    evaluation
}

fn minimax(state: &mut GameState, nodes: &mut u64) -> Evaluation {
    *nodes += 1;

    if state.is_win() {
        return Evaluation::terminal(LOSS_VALUE);
    }
    if state.is_draw() {
        return Evaluation::terminal(DRAW_VALUE);
    }

    let mut best = Evaluation::terminal(i32::MIN);
    for cell in state.valid_moves() {
        let value = match Lookahead::play(state, cell) {
            Ok(mut child) => backup(minimax(&mut child, nodes).value),
            Err(e) => {
                warn!(cell, error = %e, "Skipping unplayable move");
                continue;
            }
        };

        if value >= best.value {
            if value > best.value {
                best = Evaluation::terminal(value);
            }
            best.moves.push(cell);
        }
    }

    if best.moves.is_empty() {
        warn!(history = ?state.history(), "Non-terminal position without moves");
        return Evaluation::terminal(DRAW_VALUE);
    }
    best
}

/// Picks an optimal move for the player to move, breaking ties at random.
///
/// Returns `None` when the game is already over.
#[instrument(skip(state, rng))]
pub fn choose_move<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<usize> {
    let Evaluation { moves, .. } = evaluate(state);
    let choice = moves.choose(rng).copied();
    debug!(?choice, "Move chosen");
    choice
}

// ============================================================================
// MINIMAX PLAYER
// ============================================================================

/// Computer opponent with its own seedable tie-break source.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    rng: ChaCha8Rng,
}

impl MinimaxPlayer {
    /// Creates a player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a player with reproducible tie-breaks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a player from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Gets the best move for the current position.
    pub fn best_move(&mut self, state: &mut GameState) -> Option<usize> {
        choose_move(state, &mut self.rng)
    }

    /// Plays both sides until the game ends, returning the final state.
    #[instrument(skip(self, initial))]
    pub fn play_game(&mut self, initial: GameState) -> GameState {
        let mut state = initial;
        while let Some(cell) = self.best_move(&mut state) {
            if let Err(e) = state.play(cell) {
                warn!(cell, error = %e, "Search returned an unplayable move");
                break;
            }
        }
        state
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_negates_and_decays() {
        assert_eq!(backup(0), 0);
        assert_eq!(backup(LOSS_VALUE), 9);
        assert_eq!(backup(9), -8);
        assert_eq!(backup(-8), 7);
        assert_eq!(backup(1), 0);
    }

    #[test]
    fn test_terminal_positions() {
        let mut won = GameState::from_moves(&[0, 1, 3, 4, 6]).unwrap();
        assert_eq!(evaluate(&mut won), Evaluation::terminal(LOSS_VALUE));

        let mut drawn = GameState::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(evaluate(&mut drawn), Evaluation::terminal(DRAW_VALUE));
    }

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut state = GameState::from_moves(&[4]).unwrap();
        let before = state.clone();
        {
            let child = Lookahead::play(&mut state, 0).unwrap();
            assert_eq!(child.history(), &[4, 0]);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_guard_rejects_illegal_move() {
        let mut state = GameState::from_moves(&[4]).unwrap();
        assert!(Lookahead::play(&mut state, 4).is_err());
        assert_eq!(state.history(), &[4]);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut state = GameState::new();
        {
            let mut first = Lookahead::play(&mut state, 0).unwrap();
            let second = Lookahead::play(&mut first, 4).unwrap();
            assert_eq!(second.history(), &[0, 4]);
        }
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_last_move_is_forced() {
        // One empty cell left, X to move and it completes no line
        let mut state = GameState::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6]).unwrap();
        let evaluation = evaluate(&mut state);
        assert_eq!(evaluation.moves, vec![8]);
        assert_eq!(evaluation.value, 0);
    }

    #[test]
    fn test_seeded_players_agree() {
        let mut state = GameState::from_moves(&[4, 0, 8]).unwrap();
        let a = MinimaxPlayer::with_seed(7).best_move(&mut state);
        let b = MinimaxPlayer::with_seed(7).best_move(&mut state);
        assert_eq!(a, b);
    }
}
