//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but search code
//! may use [`Board`] directly to play either mark at any time.

use crate::{Board, BoardError, Location, Mark, MoveList};
use std::fmt;

/// An action in an Othello game: pass or play at a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Play(loc)
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
    pub to_move: Mark,
    pub just_passed: bool,
}

impl Default for Game {
    /// Gets the starting 4x4 game with X to move.
    fn default() -> Self {
        Self::new(Board::default(), Mark::default())
    }
}

impl Game {
    pub fn new(board: Board, to_move: Mark) -> Self {
        Self {
            board,
            to_move,
            just_passed: false,
        }
    }

    /// Start a game on a fresh `cols` x `rows` board with X to move.
    pub fn starting(cols: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Board::new(cols, rows)?, Mark::default()))
    }

    /// Get the legal moves for the side to move.
    #[inline]
    pub fn get_moves(&self) -> MoveList {
        self.board.legal_moves(self.to_move)
    }

    /// Returns true if the side to move must pass.
    pub fn must_pass(&self) -> bool {
        !self.board.has_legal_moves_remaining(self.to_move)
    }

    /// Apply an action for the side to move.
    /// Passing is only legal when there is no move; playing must follow the capture rules.
    pub fn act(&mut self, action: Action) -> Result<(), BoardError> {
        match action {
            Action::Pass => {
                if !self.must_pass() {
                    return Err(BoardError::IllegalPass { mark: self.to_move });
                }
                self.just_passed = true;
            }
            Action::Play(loc) => {
                self.board.play_move(loc.col, loc.row, self.to_move)?;
                self.just_passed = false;
            }
        }

        self.to_move = !self.to_move;
        Ok(())
    }

    /// Returns true once neither side can move.
    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// Get the winning mark of a finished game, or None on a draw.
    /// Only meaningful once [`Game::is_finished`] holds.
    pub fn winner(&self) -> Option<Mark> {
        match self.board.score_absolute_difference(Mark::X) {
            0 => None,
            diff if diff > 0 => Some(Mark::X),
            _ => Some(Mark::O),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.to_move)?;
        if self.just_passed {
            f.write_str(" (last move was a pass)")?;
        }
        Ok(())
    }
}
