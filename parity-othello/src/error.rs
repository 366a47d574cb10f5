//! Errors raised by the board model.

use crate::Mark;
use derive_more::{Display, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    #[display(fmt = "a {}x{} board has no cells", cols, rows)]
    InvalidDimensions { cols: usize, rows: usize },

    /// The starting discs need a board at least 2x2.
    #[display(fmt = "a {}x{} board is too small for the starting discs", cols, rows)]
    TooSmallToInitialize { cols: usize, rows: usize },

    #[display(fmt = "cell ({}, {}) is outside the board", col, row)]
    OutOfBounds { col: usize, row: usize },

    /// The requested placement does not capture anything, or the cell is taken.
    #[display(fmt = "{} cannot play at ({}, {})", mark, col, row)]
    IllegalMove { col: usize, row: usize, mark: Mark },

    /// Passing is only allowed when the side to move has no legal move.
    #[display(fmt = "{} cannot pass while it has a legal move", mark)]
    IllegalPass { mark: Mark },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "board string has no rows")]
    NoRows,

    #[display(fmt = "row {} has {} cells, expected {}", row, found, expected)]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[display(fmt = "unrecognized cell '{}' in row {}", symbol, row)]
    BadCell { symbol: char, row: usize },
}
