//! Seats at the board: a human answering through a [`MoveSource`] or a search engine.

use crate::config::{ConfigError, PlayerConfig, PlayerKind};
use crate::search::{AlphaBeta, SearchResult, SearchStats};
use derive_more::{Display, Error};
use parity_othello::{Board, Location, Mark};
use std::fmt;
use tracing::instrument;

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[display(fmt = "{} has no legal move", mark)]
    NoLegalMoves { mark: Mark },

    #[display(fmt = "move input for {} was closed", mark)]
    InputClosed { mark: Mark },
}

/// Anything that can answer "where does `mark` play on `board`?".
/// Returning None means no more moves will come.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Option<Location>;
}

impl<F> MoveSource for F
where
    F: FnMut(&Board, Mark) -> Option<Location>,
{
    fn next_move(&mut self, board: &Board, mark: Mark) -> Option<Location> {
        self(board, mark)
    }
}

/// A player whose moves come from outside. Answers are not checked here.
pub struct HumanPlayer {
    mark: Mark,
    input: Box<dyn MoveSource>,
}

impl HumanPlayer {
    pub fn new(mark: Mark, input: Box<dyn MoveSource>) -> Self {
        Self { mark, input }
    }

    pub fn get_move(&mut self, board: &Board) -> Result<Location, PlayerError> {
        self.input
            .next_move(board, self.mark)
            .ok_or(PlayerError::InputClosed { mark: self.mark })
    }
}

impl fmt::Debug for HumanPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("mark", &self.mark)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct AlphaBetaPlayer {
    engine: AlphaBeta,
}

impl AlphaBetaPlayer {
    pub fn new(engine: AlphaBeta) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &AlphaBeta {
        &self.engine
    }

    /// Run a search without turning a missing move into an error.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.engine.search(board)
    }

    #[instrument(level = "debug", skip_all, fields(mark = %self.engine.mark()))]
    pub fn get_move(&mut self, board: &Board) -> Result<Location, PlayerError> {
        let mark = self.engine.mark();
        self.search(board)
            .best_move
            .ok_or(PlayerError::NoLegalMoves { mark })
    }
}

#[derive(Debug)]
pub enum Player {
    Human(HumanPlayer),
    AlphaBeta(AlphaBetaPlayer),
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human(human) => human.mark,
            Player::AlphaBeta(ai) => ai.engine.mark(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::AlphaBeta(_) => PlayerKind::AlphaBeta,
        }
    }

    /// Ask for a move on `board`. The driver checks legality.
    pub fn get_move(&mut self, board: &Board) -> Result<Location, PlayerError> {
        match self {
            Player::Human(human) => human.get_move(board),
            Player::AlphaBeta(ai) => ai.get_move(board),
        }
    }

    /// Search counters, if this player searches.
    pub fn stats(&self) -> Option<SearchStats> {
        match self {
            Player::Human(_) => None,
            Player::AlphaBeta(ai) => Some(ai.engine.stats()),
        }
    }
}

/// Build a seat from its configuration. Humans need a move source; engines ignore it.
pub fn create_player(
    mark: Mark,
    config: &PlayerConfig,
    input: Option<Box<dyn MoveSource>>,
) -> Result<Player, ConfigError> {
    match config.validate()? {
        PlayerKind::Human => {
            let input = input.ok_or(ConfigError::MissingInput { mark })?;
            Ok(Player::Human(HumanPlayer::new(mark, input)))
        }
        PlayerKind::AlphaBeta => {
            let engine = AlphaBeta::new(mark, config.search_config()?);
            Ok(Player::AlphaBeta(AlphaBetaPlayer::new(engine)))
        }
    }
}
