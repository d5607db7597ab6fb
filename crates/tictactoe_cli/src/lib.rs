//! Terminal front end for tic-tac-toe against a minimax opponent.
//!
//! - **cli**: command-line arguments
//! - **config**: TOML play configuration
//! - **terminal**: the interactive game loop
//! - **analyze** / **selfplay**: non-interactive commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod input;
pub mod selfplay;
pub mod terminal;

pub use analyze::{Analysis, analyze};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig};
pub use input::{Input, InputError};
pub use selfplay::{Tally, selfplay};
