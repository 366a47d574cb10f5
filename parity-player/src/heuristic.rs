//! Static evaluation of positions the search cannot see past.
//!
//! Every heuristic is a pure function of the board, scored from `mark`'s point of view.

use crate::config::ConfigError;
use parity_othello::{Board, Cell, Location, Mark};
use std::fmt;

/// Selects one of the three evaluation functions by its numeric id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// H0: # own discs - # opponent discs.
    Material,
    /// H1: # own legal moves - # opponent legal moves.
    Mobility,
    /// H2: corner and corner-danger weights, plus mobility.
    Positional,
}

impl Heuristic {
    pub fn id(self) -> u8 {
        match self {
            Heuristic::Material => 0,
            Heuristic::Mobility => 1,
            Heuristic::Positional => 2,
        }
    }

    #[inline]
    pub fn evaluate(self, board: &Board, mark: Mark) -> i32 {
        match self {
            Heuristic::Material => material(board, mark),
            Heuristic::Mobility => mobility(board, mark),
            Heuristic::Positional => positional(board, mark),
        }
    }
}

impl TryFrom<i64> for Heuristic {
    type Error = ConfigError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Heuristic::Material),
            1 => Ok(Heuristic::Mobility),
            2 => Ok(Heuristic::Positional),
            _ => Err(ConfigError::UnknownHeuristic { id }),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.id())
    }
}

pub fn material(board: &Board, mark: Mark) -> i32 {
    board.score_absolute_difference(mark)
}

/// Counted over the whole board for both marks, whoever is to move.
pub fn mobility(board: &Board, mark: Mark) -> i32 {
    board.count_legal_moves(mark) as i32 - board.count_legal_moves(!mark) as i32
}

/// Weight of holding `loc`: +1 on a corner, -1 next to a corner (including diagonally),
/// and 0 elsewhere. Cells of the central starting block always weigh 0.
/// On a 4x4 board this is the classic table of four corners and eight edge cells.
pub fn positional_weight(board: &Board, loc: Location) -> i32 {
    let (cols, rows) = (board.cols(), board.rows());
    let on_col_edge = loc.col == 0 || loc.col + 1 == cols;
    let on_row_edge = loc.row == 0 || loc.row + 1 == rows;
    if on_col_edge && on_row_edge {
        return 1;
    }

    let in_center_cols = (cols / 2).saturating_sub(1) <= loc.col && loc.col <= cols / 2;
    let in_center_rows = (rows / 2).saturating_sub(1) <= loc.row && loc.row <= rows / 2;
    if in_center_cols && in_center_rows {
        return 0;
    }

    let near_col_edge = loc.col <= 1 || loc.col + 2 >= cols;
    let near_row_edge = loc.row <= 1 || loc.row + 2 >= rows;
    if near_col_edge && near_row_edge {
        -1
    } else {
        0
    }
}

pub fn positional(board: &Board, mark: Mark) -> i32 {
    let weighted: i32 = board
        .locations()
        .map(|loc| match board.get_cell(loc.col, loc.row) {
            Some(Cell::Occupied(owner)) if owner == mark => positional_weight(board, loc),
            Some(Cell::Occupied(_)) => -positional_weight(board, loc),
            _ => 0,
        })
        .sum();

    weighted + mobility(board, mark)
}
