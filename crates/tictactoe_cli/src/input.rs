//! Parsing of lines typed at the game prompt.

use derive_more::{Display, Error};
use tictactoe_core::Position;

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play on a cell (0-based index).
    Cell(usize),
    /// Let the computer play the side to move.
    Cpu,
    /// Take back the last round.
    Undo,
    /// Start a new game.
    NewGame,
    /// Show the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Help text shown for `h`.
pub const HELP: &str = "\
Commands:
  1-9 or a label (center, top-left, ...)  play on that cell
  c   let the CPU play the side to move
  u   take back your last move
  n   new game
  h   this help
  q   quit";

/// Input that is neither a command nor a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}' (type h for help)", text)]
pub struct InputError {
    /// What was typed.
    pub text: String,
}

impl Input {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let text = line.trim();
        let command = match text.to_ascii_lowercase().as_str() {
            "c" | "cpu" => Some(Input::Cpu),
            "u" | "undo" => Some(Input::Undo),
            "n" | "new" => Some(Input::NewGame),
            "h" | "help" | "?" => Some(Input::Help),
            "q" | "quit" | "exit" => Some(Input::Quit),
            _ => None,
        };

        command
            .or_else(|| Position::from_label_or_number(text).map(|pos| Input::Cell(pos.to_index())))
            .ok_or_else(|| InputError {
                text: text.to_string(),
            })
    }
}
