//! Code for working with [`Location`]s on the Othello board.

use crate::utils::COLUMN_LETTERS;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A location on the Othello board, as (column, row) coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, From, Into)]
pub struct Location {
    pub col: usize,
    pub row: usize,
}

impl Location {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Convert into a row-major cell index for a board `cols` wide.
    #[inline]
    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Convert from a row-major cell index for a board `cols` wide.
    #[inline]
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index % cols, index / cols)
    }

    /// Step `distance` cells along (`dcol`, `drow`).
    /// Returns None if the step would leave the non-negative quadrant.
    #[inline]
    pub fn offset(self, dcol: isize, drow: isize, distance: usize) -> Option<Self> {
        let col = self.col as isize + dcol * distance as isize;
        let row = self.row as isize + drow * distance as isize;
        if col < 0 || row < 0 {
            None
        } else {
            Some(Self::new(col as usize, row as usize))
        }
    }
}

/// Orders locations by generation order: row first, then column.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Convert this [`Location`] into string notation ("A4").
/// Columns past Z fall back to "(col, row)".
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match COLUMN_LETTERS.chars().nth(self.col) {
            Some(col_str) => {
                f.write_char(col_str)?;
                write!(f, "{}", self.row + 1)
            }
            None => write!(f, "({}, {})", self.col, self.row),
        }
    }
}

/// Legal moves out of a position, in generation order.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Vec<Location>);

impl MoveList {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    /// The first move in generation order.
    pub fn first(&self) -> Option<Location> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
