//! `parity-othello` is an Othello library for small, configurable boards.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds a rectangular grid of [`Cell`]s and implements the capture rules.
//!    It does not track whose turn it is, so search code can play any [`Mark`] anywhere.
//!    [`Board::play_move_unchecked`] skips the legality check for moves the caller generated.
//!  - [`Game`] is a high-level, safe interface that tracks the side to move and passes.
//!    It is slower but safer and more complete than [`Board`].

pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod mark;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use mark::*;

/// The edge length of the default board.
pub const DEFAULT_EDGE_LENGTH: usize = 4;

/// The smallest edge length that fits the four starting discs.
pub const MIN_START_EDGE_LENGTH: usize = 2;
