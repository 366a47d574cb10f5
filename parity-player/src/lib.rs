//! Game-playing agents for `parity-othello`.
//!
//! [`AlphaBeta`] is a depth-limited minimax search with optional alpha-beta pruning,
//! scoring leaves with one of three [`Heuristic`]s. [`Player`] wraps it, or a human
//! [`MoveSource`], behind one move-request interface, and [`GameDriver`] plays them
//! against each other.

mod config;
mod driver;
mod heuristic;
mod player;
mod search;

pub use config::*;
pub use driver::*;
pub use heuristic::*;
pub use player::*;
pub use search::*;
