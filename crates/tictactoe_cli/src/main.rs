//! tictactoe - play tic-tac-toe against a minimax opponent in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, Command, PlayConfig, analyze, selfplay, terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            delay_ms,
            seed,
            config,
        } => {
            let config = PlayConfig::load(config.as_deref())?.with_overrides(human, delay_ms, seed);
            run_play(&config)
        }
        Command::Analyze { moves, json } => run_analyze(&moves, json),
        Command::Selfplay { games, seed, json } => run_selfplay(games, seed, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config))]
fn run_play(config: &PlayConfig) -> Result<()> {
    info!(?config, "Starting interactive game");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    terminal::run(config, stdin.lock(), &mut stdout)?;
    Ok(())
}

#[instrument]
fn run_analyze(moves: &[usize], json: bool) -> Result<()> {
    let analysis = analyze(moves).with_context(|| format!("Cannot replay moves {:?}", moves))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.render());
    }
    Ok(())
}

#[instrument]
fn run_selfplay(games: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let tally = selfplay(games, seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
