//! Disc marks and the contents of a single board cell.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players' disc symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Default for Mark {
    /// Gets the starting mark (X).
    fn default() -> Self {
        Self::X
    }
}

impl std::ops::Not for Mark {
    type Output = Self;

    /// Gets the opponent's mark.
    fn not(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Mark {
    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid mark string")]
pub struct ParseMarkError;

impl std::str::FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _ => Err(ParseMarkError),
        }
    }
}

/// The state of one cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Mark),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Occupied(mark)
    }
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns whether this cell holds `mark`.
    #[inline]
    pub fn holds(self, mark: Mark) -> bool {
        self == Cell::Occupied(mark)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.to_char(),
        }
    }

    /// Inverse of [`Cell::to_char`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' => Some(Cell::Occupied(Mark::O)),
            _ => None,
        }
    }
}
