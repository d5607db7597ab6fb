//! Mutable game state with play and undo.

use crate::error::GameError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, CELL_COUNT, GameStatus, Player, Square};
use serde::Serialize;
use tracing::instrument;

/// Complete game state.
///
/// The board and history are mutated only through [`GameState::play`] and
/// [`GameState::undo`]. The win and draw flags are cached and updated by those
/// two operations. The state serializes for reporting but cannot be
/// deserialized: the only way to reach a position is to play it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Move history (cells played, in order).
    pub(crate) history: Vec<usize>,
    /// Whether the last move completed a line.
    pub(crate) is_win: bool,
    /// Whether the board filled up without a line.
    pub(crate) is_draw: bool,
}

impl GameState {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(CELL_COUNT),
            is_win: false,
            is_draw: false,
        }
    }

    /// Replays a sequence of moves onto a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that could not be played.
    #[instrument]
    pub fn from_moves(moves: &[usize]) -> Result<Self, GameError> {
        let mut state = Self::new();
        for &cell in moves {
            state.play(cell)?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the nine cells in row-major order.
    pub fn cells(&self) -> &[Square; CELL_COUNT] {
        self.board.squares()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        Player::to_move_after(self.history.len())
    }

    /// Returns true if the last move completed a line.
    pub fn is_win(&self) -> bool {
        self.is_win
    }

    /// Returns true if the board is full without a line.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns true if no further move can be played.
    pub fn is_over(&self) -> bool {
        self.is_win || self.is_draw
    }

    /// Returns the player who completed a line, if any.
    ///
    /// That is always the player who moved last.
    pub fn winner(&self) -> Option<Player> {
        self.is_win.then(|| self.current_player().opponent())
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_draw => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns the empty cells in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&cell| self.board.is_empty(cell))
            .collect()
    }

    /// Places the current player's mark on `cell`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `cell` is not 0-8
    /// - `GameOver` if the game is already won or drawn
    /// - `Occupied` if the cell is taken
    ///
    /// The state is unchanged on error.
    pub fn play(&mut self, cell: usize) -> Result<(), GameError> {
        if cell >= CELL_COUNT {
            return Err(GameError::OutOfRange(cell));
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_empty(cell) {
            return Err(GameError::Occupied(cell));
        }

        let player = self.current_player();
        self.board.set(cell, Square::Occupied(player))?;
        self.history.push(cell);

        self.is_win = rules::check_winner(&self.board).is_some();
        self.is_draw = !self.is_win && self.history.len() == CELL_COUNT;

        debug_assert!(GameInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Takes back the last move and returns its cell.
    ///
    /// Both terminal flags are cleared without re-scanning the board.
    ///
    /// # Errors
    ///
    /// Returns `NothingToUndo` if no move has been played. The state is
    /// unchanged on error.
    pub fn undo(&mut self) -> Result<usize, GameError> {
        let cell = *self.history.last().ok_or(GameError::NothingToUndo)?;
        self.board.set(cell, Square::Empty)?;
        self.history.pop();
        self.is_win = false;
        self.is_draw = false;

        debug_assert!(GameInvariants::check_all(self).is_ok());
        Ok(cell)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = GameState::new();
        assert_eq!(game.valid_moves(), (0..9).collect::<Vec<_>>());
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_play_marks_current_player() {
        let mut game = GameState::new();
        game.play(4).unwrap();
        game.play(0).unwrap();
        assert_eq!(game.cells()[4], Square::Occupied(Player::X));
        assert_eq!(game.cells()[0], Square::Occupied(Player::O));
        assert_eq!(game.history(), &[4, 0]);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut game = GameState::from_moves(&[4]).unwrap();
        let before = game.clone();

        assert_eq!(game.play(9), Err(GameError::OutOfRange(9)));
        assert_eq!(game.play(4), Err(GameError::Occupied(4)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = GameState::new();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_undo_returns_cell() {
        let mut game = GameState::from_moves(&[2, 6]).unwrap();
        assert_eq!(game.undo(), Ok(6));
        assert_eq!(game.cells()[6], Square::Empty);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_failed_undo_leaves_state_unchanged() {
        let mut game = GameState::new();
        game.history.push(9);
        let before = game.clone();

        assert_eq!(game.undo(), Err(GameError::OutOfRange(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_serializes_for_reporting() {
        let game = GameState::from_moves(&[4, 0]).unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["history"], serde_json::json!([4, 0]));
        assert_eq!(json["is_win"], serde_json::json!(false));
    }

    #[test]
    fn test_winner_is_last_mover() {
        // O completes the middle row
        let game = GameState::from_moves(&[0, 3, 1, 4, 8, 5]).unwrap();
        assert!(game.is_win());
        assert_eq!(game.winner(), Some(Player::O));
        assert_eq!(game.status(), GameStatus::Won(Player::O));
    }
}
