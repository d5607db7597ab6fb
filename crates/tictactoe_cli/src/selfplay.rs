//! Computer-versus-computer games for the `selfplay` command.

use serde::Serialize;
use tictactoe_core::{GameState, GameStatus, MinimaxPlayer, Player};
use tracing::{debug, instrument};

/// Outcome counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Records one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games recorded.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays `games` games of the computer against itself.
#[instrument]
pub fn selfplay(games: usize, seed: Option<u64>) -> Tally {
    let mut cpu = MinimaxPlayer::from_seed(seed);
    let mut tally = Tally::default();
    for game in 0..games {
        let finished = cpu.play_game(GameState::new());
        debug!(game, history = ?finished.history(), status = %finished.status(), "Game finished");
        tally.record(finished.status());
    }
    tally
}
