//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Column labels, in order.
pub(crate) const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Format `cols * rows` characters into a pretty grid format, row 0 on top.
/// `piece_iter` must yield exactly `cols * rows` items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    cols: usize,
    rows: usize,
    f: &mut Formatter,
) -> fmt::Result {
    let label_width = rows.to_string().len();

    write!(f, "{:width$} ", "", width = label_width)?;
    for (col, letter) in COLUMN_LETTERS.chars().cycle().take(cols).enumerate() {
        if col > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", letter)?;
    }

    for row in 0..rows {
        write!(f, "\n{:>width$} ", row + 1, width = label_width)?;
        for col in 0..cols {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
