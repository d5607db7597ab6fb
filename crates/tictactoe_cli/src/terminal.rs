//! Line-based terminal game loop.
//!
//! The loop is generic over its input and output so it can be driven by a
//! script in tests.

use crate::config::PlayConfig;
use crate::input::{HELP, Input};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_core::{GameError, MinimaxPlayer, Player, Position, Session};
use tracing::{debug, info, instrument, warn};

/// Plays interactive games until the player quits or input ends.
///
/// Returns the session as it was when the loop stopped.
#[instrument(skip_all, fields(human = %config.human(), delay_ms = config.cpu_delay_ms()))]
pub fn run<R: BufRead, W: Write>(config: &PlayConfig, input: R, output: &mut W) -> Result<Session> {
    let mut session = Session::new();
    let mut cpu = MinimaxPlayer::from_seed(*config.seed());
    let delay = Duration::from_millis(*config.cpu_delay_ms());

    start_game(&mut session, config);
    render(&session, output)?;

    let mut lines = input.lines();
    loop {
        if !session.game().is_over() && !session.is_human_turn() {
            computer_move(&mut session, &mut cpu, delay, output)?;
            continue;
        }

        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            debug!("Input closed");
            writeln!(output)?;
            break;
        };
        let line = line?;

        match Input::parse(&line) {
            Ok(Input::Cell(cell)) => match session.human_move(cell) {
                Ok(()) => render(&session, output)?,
                Err(e) => writeln!(output, "{}", move_error(e))?,
            },
            Ok(Input::Cpu) => {
                if !session.prepare_computer_move() {
                    writeln!(output, "The game is over. Type n for a new game.")?;
                }
            }
            Ok(Input::Undo) => match session.take_back() {
                Ok(cells) => {
                    debug!(?cells, "Took back");
                    render(&session, output)?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            Ok(Input::NewGame) => {
                start_game(&mut session, config);
                render(&session, output)?;
            }
            Ok(Input::Help) => writeln!(output, "{}", HELP)?,
            Ok(Input::Quit) => break,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    info!(status = %session.status(), "Leaving game loop");
    Ok(session)
}

/// Resets the session; the computer opens if the human plays O.
fn start_game(session: &mut Session, config: &PlayConfig) {
    session.new_game();
    if *config.human() == Player::O {
        session.prepare_computer_move();
    }
}

fn computer_move<W: Write>(
    session: &mut Session,
    cpu: &mut MinimaxPlayer,
    delay: Duration,
    output: &mut W,
) -> Result<()> {
    if !session.prepare_computer_move() {
        return Ok(());
    }
    writeln!(output, "{}", session.status())?;
    output.flush()?;
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }

    match session.play_computer_move(cpu) {
        Some(cell) => {
            let label = Position::from_index(cell).map_or("?", |pos| pos.label());
            writeln!(output, "CPU plays {} ({})", cell + 1, label)?;
        }
        None => warn!("Computer had no move to play"),
    }
    render(session, output)
}

/// Describes a rejected move with cells numbered as on the board.
fn move_error(error: GameError) -> String {
    match error {
        GameError::Occupied(cell) => format!("Cell {} is already occupied", cell + 1),
        other => other.to_string(),
    }
}

fn render<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", session.game().board().display())?;
    writeln!(output)?;
    writeln!(output, "{}", session.status())?;
    if session.game().is_over() {
        writeln!(output, "Type n for a new game or q to quit.")?;
    }
    Ok(())
}
