//! Depth-limited minimax search with optional alpha-beta pruning.
//!
//! The engine always maximizes for its own mark. A side with no legal move in a
//! position that is not terminal has no successors, so it keeps its initial
//! value: a loss when maximizing and a win when minimizing.

use crate::config::SearchConfig;
use parity_othello::{Board, Location, Mark};
use std::fmt;
use tracing::debug;

/// The value of a position. A decided game outranks any heuristic estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Loss,
    Value(i32),
    Win,
}

impl Score {
    pub const DRAW: Score = Score::Value(0);

    pub fn is_decided(self) -> bool {
        !matches!(self, Score::Value(_))
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::Value(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => f.write_str("-inf"),
            Score::Value(value) => write!(f, "{}", value),
            Score::Win => f.write_str("+inf"),
        }
    }
}

/// Diagnostic counters. They never influence which move is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every maximizing and minimizing call, root included.
    pub total_nodes_seen: u64,
    /// Deepest ply reached below a root.
    pub max_depth_seen: u32,
}

impl SearchStats {
    #[inline]
    fn record(&mut self, depth: u32) {
        self.total_nodes_seen += 1;
        self.max_depth_seen = self.max_depth_seen.max(depth);
    }
}

/// The outcome of one top-level search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// None only when the engine's mark has no legal move at the root.
    pub best_move: Option<Location>,
    pub value: Score,
    /// Nodes visited by this search alone.
    pub nodes: u64,
}

/// A position is terminal once neither mark can move anywhere.
#[inline]
pub fn terminal_state(board: &Board) -> bool {
    board.is_game_over()
}

/// Win, loss or draw for `mark`, ignoring the margin.
pub fn terminal_value(board: &Board, mark: Mark) -> Score {
    match board.score_absolute_difference(mark) {
        0 => Score::DRAW,
        diff if diff > 0 => Score::Win,
        _ => Score::Loss,
    }
}

/// Every position reachable by one legal move of `mark`, in generation order.
/// Children are cloned lazily, so a cutoff skips the rest.
pub fn successors(board: &Board, mark: Mark) -> impl Iterator<Item = (Location, Board)> + '_ {
    board.legal_moves(mark).into_iter().map(move |loc| {
        let mut child = board.clone();
        child.play_move_unchecked(loc, mark);
        (loc, child)
    })
}

/// A search engine bound to one mark and one configuration.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    mark: Mark,
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(mark: Mark, config: SearchConfig) -> Self {
        Self {
            mark,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Counters accumulated over every search since construction or the last reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Static evaluation from this engine's point of view.
    #[inline]
    pub fn evaluate(&self, board: &Board) -> i32 {
        self.config.heuristic.evaluate(board, self.mark)
    }

    /// Search `board` with this engine's mark to move.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let nodes_before = self.stats.total_nodes_seen;
        let (value, best_move) = self.root(board);
        let nodes = self.stats.total_nodes_seen - nodes_before;

        debug!(
            mark = %self.mark,
            heuristic = %self.config.heuristic,
            pruning = self.config.pruning,
            max_depth = self.config.max_depth,
            %value,
            nodes,
            best_move = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            value,
            nodes,
        }
    }

    fn root(&mut self, board: &Board) -> (Score, Option<Location>) {
        self.stats.record(0);
        if terminal_state(board) {
            return (terminal_value(board, self.mark), None);
        }

        let depth = self.config.max_depth;
        if depth == 0 {
            let first = board.legal_moves(self.mark).first();
            return (Score::Value(self.evaluate(board)), first);
        }

        let mut alpha = Score::Loss;
        let beta = Score::Win;
        let mut best: Option<(Location, Score)> = None;

        for (loc, child) in successors(board, self.mark) {
            let value = self.min_value(&child, alpha, beta, depth - 1);
            // Strict improvement keeps the earliest of equally valued moves.
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((loc, value)),
            }

            let best_value = best.map_or(Score::Loss, |(_, value)| value);
            if self.config.pruning && best_value >= beta {
                break;
            }
            alpha = alpha.max(best_value);
        }

        match best {
            Some((loc, value)) => (value, Some(loc)),
            None => (Score::Loss, None),
        }
    }

    fn max_value(&mut self, board: &Board, mut alpha: Score, beta: Score, remaining: u32) -> Score {
        self.stats.record(self.config.max_depth - remaining);
        if terminal_state(board) {
            return terminal_value(board, self.mark);
        }
        if remaining == 0 {
            return Score::Value(self.evaluate(board));
        }

        let mut value = Score::Loss;
        for (_, child) in successors(board, self.mark) {
            value = value.max(self.min_value(&child, alpha, beta, remaining - 1));
            if self.config.pruning && value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    }

    fn min_value(&mut self, board: &Board, alpha: Score, mut beta: Score, remaining: u32) -> Score {
        self.stats.record(self.config.max_depth - remaining);
        if terminal_state(board) {
            return terminal_value(board, self.mark);
        }
        if remaining == 0 {
            return Score::Value(self.evaluate(board));
        }

        let mut value = Score::Win;
        for (_, child) in successors(board, !self.mark) {
            value = value.min(self.max_value(&child, alpha, beta, remaining - 1));
            if self.config.pruning && value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}
