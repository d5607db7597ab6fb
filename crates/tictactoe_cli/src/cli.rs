//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Player;

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Side the human starts as (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Cosmetic delay before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the minimax value and best moves of a position
    Analyze {
        /// Moves played so far, as 0-based cell indices
        moves: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play against itself
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Seed for the tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
