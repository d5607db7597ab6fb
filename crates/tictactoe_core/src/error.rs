//! Error types for tic-tac-toe operations.

/// Error that can occur when playing or taking back a move.
///
/// Every variant is a validation failure: the state is left unchanged and the
/// caller may retry with a different move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// There is no move to take back.
    #[display("No moves to undo")]
    NothingToUndo,

    /// A human tried to move while the computer is to play.
    #[display("It's not your turn")]
    NotYourTurn,
}

impl std::error::Error for GameError {}
