//! Human-versus-computer game session.
//!
//! A session owns one [`GameState`] and remembers which side the human plays.
//! Asking the computer to move hands it the side to move, so a player can
//! switch sides mid-game or let the computer open.

use crate::error::GameError;
use crate::search::MinimaxPlayer;
use crate::types::Player;
use crate::GameState;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What the player should be told about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum SessionStatus {
    /// The computer completed a line.
    #[display("CPU won")]
    CpuWon,
    /// The human completed a line.
    #[display("You won")]
    HumanWon,
    /// The board filled up.
    #[display("It's a draw")]
    Draw,
    /// Waiting for the human.
    #[display("Your turn")]
    HumanTurn,
    /// Waiting for the computer.
    #[display("CPU is preparing move...")]
    CpuThinking,
}

/// A game between a human and the computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    game: GameState,
    human: Player,
}

impl Session {
    /// Starts a session with the human playing X.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            human: Player::X,
        }
    }

    /// Discards the current game and starts over with the human playing X.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Returns the game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the side the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns true if the human is to move.
    pub fn is_human_turn(&self) -> bool {
        self.game.current_player() == self.human
    }

    /// Returns true if a human move would be considered.
    pub fn accepts_input(&self) -> bool {
        !self.game.is_over() && self.is_human_turn()
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// `NotYourTurn` while the computer is to move, otherwise any error of
    /// [`GameState::play`].
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn human_move(&mut self, cell: usize) -> Result<(), GameError> {
        if !self.is_human_turn() {
            debug!("Ignoring move out of turn");
            return Err(GameError::NotYourTurn);
        }
        self.game.play(cell)?;
        debug!(status = %self.status(), "Human moved");
        Ok(())
    }

    /// Hands the side to move to the computer.
    ///
    /// Returns false, changing nothing, when the game is over.
    #[instrument(skip(self))]
    pub fn prepare_computer_move(&mut self) -> bool {
        if self.game.is_over() {
            return false;
        }
        self.human = self.game.current_player().opponent();
        debug!(human = %self.human, "Computer takes the side to move");
        true
    }

    /// Lets the computer play for the side to move.
    ///
    /// Returns the cell played, or `None` when the game is over.
    #[instrument(skip(self, player))]
    pub fn play_computer_move(&mut self, player: &mut MinimaxPlayer) -> Option<usize> {
        if self.game.is_over() {
            return None;
        }
        let cell = player.best_move(&mut self.game)?;
        self.game.play(cell).ok()?;
        debug!(cell, status = %self.status(), "Computer moved");
        Some(cell)
    }

    /// Takes back moves until it is the human's turn again.
    ///
    /// Returns the cells taken back, most recent first. At most two moves are
    /// taken back; if the history runs out first it may be the computer's turn.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` if no move has been played.
    #[instrument(skip(self))]
    pub fn take_back(&mut self) -> Result<Vec<usize>, GameError> {
        let mut cells = vec![self.game.undo()?];
        if !self.is_human_turn()
            && let Ok(cell) = self.game.undo()
        {
            cells.push(cell);
        }
        debug!(?cells, "Took back moves");
        Ok(cells)
    }

    /// Returns the message describing the session.
    pub fn status(&self) -> SessionStatus {
        if self.game.is_win() {
            // The side to move is the side that lost.
            if self.is_human_turn() {
                SessionStatus::CpuWon
            } else {
                SessionStatus::HumanWon
            }
        } else if self.game.is_draw() {
            SessionStatus::Draw
        } else if self.is_human_turn() {
            SessionStatus::HumanTurn
        } else {
            SessionStatus::CpuThinking
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
