//! Runs a full match between two seats.

use crate::config::{ConfigError, MatchConfig};
use crate::player::{create_player, MoveSource, Player, PlayerError};
use derive_more::{Display, Error};
use parity_othello::{Action, BoardError, Game, Location, Mark};
use std::fmt;
use tracing::{info, instrument, warn};

#[derive(Debug, Display, Error)]
pub enum DriverError {
    #[display(fmt = "player failed: {}", source)]
    Player { source: PlayerError },

    #[display(fmt = "board rejected an action: {}", source)]
    Board { source: BoardError },
}

impl From<PlayerError> for DriverError {
    fn from(source: PlayerError) -> Self {
        DriverError::Player { source }
    }
}

impl From<BoardError> for DriverError {
    fn from(source: BoardError) -> Self {
        DriverError::Board { source }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// Summary of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// None on a draw.
    pub winner: Option<Mark>,
    pub x_score: usize,
    pub o_score: usize,
    /// Discs placed, passes excluded.
    pub turns: usize,
    pub passes: usize,
    /// Search nodes per seat. Humans count zero.
    pub x_nodes_seen: u64,
    pub o_nodes_seen: u64,
}

impl MatchReport {
    pub fn outcome(&self, mark: Mark) -> Outcome {
        match self.winner {
            None => Outcome::Draw,
            Some(winner) if winner == mark => Outcome::Win,
            Some(_) => Outcome::Loss,
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(mark) => write!(f, "{} wins", mark)?,
            None => f.write_str("draw")?,
        }
        write!(
            f,
            " {}-{} after {} moves and {} passes (nodes: X {}, O {})",
            self.x_score, self.o_score, self.turns, self.passes, self.x_nodes_seen, self.o_nodes_seen
        )
    }
}

#[derive(Debug)]
pub struct GameDriver {
    game: Game,
    x: Player,
    o: Player,
}

impl GameDriver {
    /// Seat `x` and `o` at `game`. Each player must hold the mark of its seat.
    pub fn new(game: Game, x: Player, o: Player) -> Result<Self, ConfigError> {
        for (expected, player) in [(Mark::X, &x), (Mark::O, &o)] {
            if player.mark() != expected {
                return Err(ConfigError::MarkMismatch {
                    expected,
                    found: player.mark(),
                });
            }
        }
        Ok(Self { game, x, o })
    }

    /// Build the starting game and both seats. Human seats take their moves from the given sources.
    pub fn from_config(
        config: &MatchConfig,
        x_input: Option<Box<dyn MoveSource>>,
        o_input: Option<Box<dyn MoveSource>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let game = Game::new(config.board()?, Mark::X);
        let x = create_player(Mark::X, &config.x, x_input)?;
        let o = create_player(Mark::O, &config.o, o_input)?;
        Self::new(game, x, o)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Play until neither side can move.
    #[instrument(skip_all, fields(cols = self.game.board.cols(), rows = self.game.board.rows()))]
    pub fn run(&mut self) -> Result<MatchReport, DriverError> {
        let mut turns = 0;
        let mut passes = 0;

        while !self.game.is_finished() {
            if self.game.must_pass() {
                warn!(mark = %self.game.to_move, "no legal move, passing");
                self.game.act(Action::Pass)?;
                passes += 1;
                continue;
            }

            self.process_move()?;
            turns += 1;
        }

        let board = &self.game.board;
        let report = MatchReport {
            winner: self.game.winner(),
            x_score: board.count_score(Mark::X),
            o_score: board.count_score(Mark::O),
            turns,
            passes,
            x_nodes_seen: nodes_seen(&self.x),
            o_nodes_seen: nodes_seen(&self.o),
        };
        info!(%report, "game over");
        Ok(report)
    }

    /// Ask the side to move until it names a legal move, then play it.
    fn process_move(&mut self) -> Result<Location, DriverError> {
        let mark = self.game.to_move;
        loop {
            let player = match mark {
                Mark::X => &mut self.x,
                Mark::O => &mut self.o,
            };
            let loc = player.get_move(&self.game.board)?;

            match self.game.act(Action::Play(loc)) {
                Ok(()) => {
                    info!(%mark, %loc, "played");
                    return Ok(loc);
                }
                Err(err) => warn!(%mark, %loc, %err, "rejected move, asking again"),
            }
        }
    }
}

fn nodes_seen(player: &Player) -> u64 {
    player.stats().map_or(0, |stats| stats.total_nodes_seen)
}
