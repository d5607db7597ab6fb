//! Tic-tac-toe game state and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **GameState**: the 3x3 board, move history and win/draw flags, mutated
//!   only by `play` and `undo`
//! - **Rules**: win and draw detection over the 8 lines
//! - **Invariants**: properties checked after every mutation in debug builds
//! - **Search**: full-depth minimax with randomized tie-breaks
//! - **Session**: a human-versus-computer game built on the above
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, MinimaxPlayer};
//!
//! let mut game = GameState::new();
//! game.play(4).unwrap();
//!
//! let mut cpu = MinimaxPlayer::with_seed(1);
//! let reply = cpu.best_move(&mut game).unwrap();
//! assert!(game.valid_moves().contains(&reply));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod search;
mod session;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game state
pub use game::GameState;
pub use types::{Board, CELL_COUNT, GameStatus, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Search
pub use search::{
    DRAW_VALUE, Evaluation, LOSS_VALUE, Lookahead, MinimaxPlayer, backup, choose_move, evaluate,
};

// Crate-level exports - Sessions
pub use session::{Session, SessionStatus};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, TerminalFlagsInvariant,
};
