//! The rectangular Othello grid and its capture rules.
//!
//! Cells are stored row-major in an [`ndarray::Array2`], indexed `[[row, col]]`.
//! Public methods take (column, row) coordinates, matching [`Location`].

use crate::utils;
use crate::{
    BoardError, Cell, Location, Mark, MoveList, ParseBoardError, DEFAULT_EDGE_LENGTH,
    MIN_START_EDGE_LENGTH,
};
use itertools::iproduct;
use ndarray::Array2;
use std::fmt;

/// Unit steps (column, row) for the eight capture directions.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One Othello position: a grid of cells with fixed dimensions.
/// Cloning is a deep copy, which is how search creates successor positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Default for Board {
    /// Gets the initialized 4x4 board.
    fn default() -> Self {
        let mut board = Self {
            cells: Array2::from_elem((DEFAULT_EDGE_LENGTH, DEFAULT_EDGE_LENGTH), Cell::Empty),
        };
        board.place_starting_discs();
        board
    }
}

impl Board {
    /// Construct a board with every cell empty.
    pub fn empty(cols: usize, rows: usize) -> Result<Self, BoardError> {
        if cols == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }

        Ok(Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
        })
    }

    /// Construct a board holding the four starting discs.
    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(cols, rows)?;
        board.initialize()?;
        Ok(board)
    }

    /// Clear the board and set up the four starting discs in the center.
    pub fn initialize(&mut self) -> Result<(), BoardError> {
        let (cols, rows) = (self.cols(), self.rows());
        if cols < MIN_START_EDGE_LENGTH || rows < MIN_START_EDGE_LENGTH {
            return Err(BoardError::TooSmallToInitialize { cols, rows });
        }

        self.cells.fill(Cell::Empty);
        self.place_starting_discs();
        Ok(())
    }

    /// X takes the upper-left/lower-right diagonal of the center, O the other.
    /// Requires at least a 2x2 board.
    fn place_starting_discs(&mut self) {
        let (col, row) = (self.cols() / 2, self.rows() / 2);
        self.cells[[row - 1, col - 1]] = Cell::Occupied(Mark::X);
        self.cells[[row, col]] = Cell::Occupied(Mark::X);
        self.cells[[row, col - 1]] = Cell::Occupied(Mark::O);
        self.cells[[row - 1, col]] = Cell::Occupied(Mark::O);
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.cols() && row < self.rows()
    }

    /// Get the contents of a cell, or None if it is off the board.
    #[inline]
    pub fn get_cell(&self, col: usize, row: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite a cell without applying any game rules.
    pub fn set_cell(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut((row, col))
            .ok_or(BoardError::OutOfBounds { col, row })?;
        *slot = cell;
        Ok(())
    }

    /// Iterate over every location in generation order: rows ascending, then columns ascending.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        iproduct!(0..self.rows(), 0..self.cols()).map(|(row, col)| Location::new(col, row))
    }

    #[inline]
    fn cell_at(&self, loc: Option<Location>) -> Option<Cell> {
        loc.and_then(|loc| self.get_cell(loc.col, loc.row))
    }

    /// Length of the run of opponent discs `mark` would capture by playing at `from`
    /// along one direction. Zero unless the run is closed off by a `mark` disc.
    fn capture_run(&self, from: Location, (dcol, drow): (isize, isize), mark: Mark) -> usize {
        let opponent = Cell::Occupied(!mark);
        let mut distance = 1;

        loop {
            match self.cell_at(from.offset(dcol, drow, distance)) {
                Some(cell) if cell == opponent => distance += 1,
                Some(cell) if cell.holds(mark) => return distance - 1,
                _ => return 0,
            }
        }
    }

    /// Returns whether `mark` may play at (`col`, `row`): the cell is on the board,
    /// empty, and the placement captures at least one run of opponent discs.
    pub fn is_legal_move(&self, col: usize, row: usize, mark: Mark) -> bool {
        let from = Location::new(col, row);
        match self.get_cell(col, row) {
            Some(Cell::Empty) => DIRECTIONS
                .iter()
                .any(|&direction| self.capture_run(from, direction, mark) > 0),
            _ => false,
        }
    }

    /// Place a disc for `mark` and flip every captured run.
    pub fn play_move(&mut self, col: usize, row: usize, mark: Mark) -> Result<(), BoardError> {
        if !self.in_bounds(col, row) {
            return Err(BoardError::OutOfBounds { col, row });
        }
        if !self.is_legal_move(col, row, mark) {
            return Err(BoardError::IllegalMove { col, row, mark });
        }

        self.play_move_unchecked(Location::new(col, row), mark);
        Ok(())
    }

    /// Place a disc for `mark` and flip every captured run, without checking legality.
    /// Results in an inconsistent game if `loc` is not a legal move for `mark`;
    /// does nothing if `loc` is off the board.
    pub fn play_move_unchecked(&mut self, loc: Location, mark: Mark) {
        if !self.in_bounds(loc.col, loc.row) {
            return;
        }

        // Runs in different directions never share cells, so flipping one cannot change another.
        for &(dcol, drow) in DIRECTIONS.iter() {
            let run = self.capture_run(loc, (dcol, drow), mark);
            for distance in 1..=run {
                if let Some(flip) = loc.offset(dcol, drow, distance) {
                    self.cells[[flip.row, flip.col]] = Cell::Occupied(mark);
                }
            }
        }

        self.cells[[loc.row, loc.col]] = Cell::Occupied(mark);
    }

    /// Get the legal moves for `mark`, in generation order.
    pub fn legal_moves(&self, mark: Mark) -> MoveList {
        self.locations()
            .filter(|loc| self.is_legal_move(loc.col, loc.row, mark))
            .collect::<Vec<Location>>()
            .into()
    }

    /// Count the legal moves for `mark` without collecting them.
    pub fn count_legal_moves(&self, mark: Mark) -> usize {
        self.locations()
            .filter(|loc| self.is_legal_move(loc.col, loc.row, mark))
            .count()
    }

    pub fn has_legal_moves_remaining(&self, mark: Mark) -> bool {
        self.locations()
            .any(|loc| self.is_legal_move(loc.col, loc.row, mark))
    }

    /// Returns true if neither mark can move anywhere on the board.
    pub fn is_game_over(&self) -> bool {
        Mark::ALL
            .iter()
            .all(|&mark| !self.has_legal_moves_remaining(mark))
    }

    /// Count the cells holding `mark`.
    pub fn count_score(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| cell.holds(mark)).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Score a board as: # `mark` discs - # opponent discs.
    #[inline]
    pub fn score_absolute_difference(&self, mark: Mark) -> i32 {
        self.count_score(mark) as i32 - self.count_score(!mark) as i32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().map(|cell| cell.to_char()),
            self.cols(),
            self.rows(),
            f,
        )
    }
}

/// Build a [`Board`] from one line of cells per row, row 0 first.
/// Cells are `.`, `X` or `O`; spaces inside a line and blank lines are ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|line: &Vec<char>| !line.is_empty())
            .collect();

        let cols = lines.first().map(Vec::len).ok_or(ParseBoardError::NoRows)?;
        let mut board = Self::empty(cols, lines.len()).map_err(|_| ParseBoardError::NoRows)?;

        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: line.len(),
                    expected: cols,
                });
            }

            for (col, &symbol) in line.iter().enumerate() {
                let cell = Cell::from_char(symbol).ok_or(ParseBoardError::BadCell { symbol, row })?;
                board.cells[[row, col]] = cell;
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn default_is_initialized_4x4() {
        let expected = board(
            "....
             .XO.
             .OX.
             ....",
        );
        assert_eq!(Board::default(), expected);
        assert_eq!(Board::new(4, 4), Ok(expected));
    }

    #[test]
    fn initialize_rectangular() {
        let board = Board::new(5, 3).unwrap();
        assert_eq!(board.get_cell(1, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get_cell(2, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get_cell(1, 1), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get_cell(2, 0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.count_empty(), 11);
    }

    #[test]
    fn initialize_resets_cells() {
        let mut board = Board::default();
        board.play_move(2, 0, Mark::X).unwrap();
        board.initialize().unwrap();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn bad_dimensions() {
        assert_eq!(
            Board::empty(0, 3),
            Err(BoardError::InvalidDimensions { cols: 0, rows: 3 })
        );
        assert!(Board::empty(1, 1).is_ok());
        assert_eq!(
            Board::new(1, 4),
            Err(BoardError::TooSmallToInitialize { cols: 1, rows: 4 })
        );
    }

    #[test]
    fn starting_moves() {
        let board = Board::default();
        let x_moves: Vec<Location> = board.legal_moves(Mark::X).into();
        let o_moves: Vec<Location> = board.legal_moves(Mark::O).into();
        assert_eq!(
            x_moves,
            vec![
                Location::new(2, 0),
                Location::new(3, 1),
                Location::new(0, 2),
                Location::new(1, 3)
            ]
        );
        assert_eq!(
            o_moves,
            vec![
                Location::new(1, 0),
                Location::new(0, 1),
                Location::new(3, 2),
                Location::new(2, 3)
            ]
        );
        assert_eq!(board.count_legal_moves(Mark::X), 4);
    }

    #[test]
    fn occupied_and_offboard_are_illegal() {
        let board = Board::default();
        assert!(!board.is_legal_move(1, 1, Mark::O));
        assert!(!board.is_legal_move(4, 0, Mark::X));
        assert!(!board.is_legal_move(0, 0, Mark::X));
    }

    #[test]
    fn run_must_be_closed() {
        let closed = board("XOO.");
        assert!(closed.is_legal_move(3, 0, Mark::X));

        // The O run ends at an empty cell, not an X.
        let open = board(".OO.X");
        assert!(!open.is_legal_move(0, 0, Mark::X));
        assert!(!open.is_legal_move(3, 0, Mark::O));
    }

    #[test]
    fn play_flips_every_direction() {
        let mut board = board(
            "X.X.X
             .OOO.
             XO.OX
             .OOO.
             X.X.X",
        );
        board.play_move(2, 2, Mark::X).unwrap();
        assert_eq!(
            board,
            self::board(
                "X.X.X
                 .XXX.
                 XXXXX
                 .XXX.
                 X.X.X",
            )
        );
    }

    #[test]
    fn play_move_errors() {
        let mut board = Board::default();
        assert_eq!(
            board.play_move(9, 0, Mark::X),
            Err(BoardError::OutOfBounds { col: 9, row: 0 })
        );
        assert_eq!(
            board.play_move(0, 0, Mark::X),
            Err(BoardError::IllegalMove {
                col: 0,
                row: 0,
                mark: Mark::X
            })
        );
        assert_eq!(board, Board::default());
    }

    #[test]
    fn play_and_score() {
        let mut board = Board::default();
        board.play_move(2, 0, Mark::X).unwrap();
        assert_eq!(board.count_score(Mark::X), 4);
        assert_eq!(board.count_score(Mark::O), 1);
        assert_eq!(board.score_absolute_difference(Mark::O), -3);
        assert_eq!(board.get_cell(2, 1), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn game_over_needs_both_sides_blocked() {
        let one_side = board(
            "XXXX
             XXXX
             OOOO
             OO..",
        );
        assert!(one_side.has_legal_moves_remaining(Mark::X));
        assert!(!one_side.has_legal_moves_remaining(Mark::O));
        assert!(!one_side.is_game_over());

        let neither = board(
            "OOOX
             XOOX
             OXOX
             XX..",
        );
        assert!(neither.is_game_over());
    }

    #[test]
    fn display_grid() {
        assert_eq!(
            Board::default().to_string(),
            "  A B C D\n1 . . . .\n2 . X O .\n3 . O X .\n4 . . . ."
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::NoRows));
        assert_eq!(
            "...\n..".parse::<Board>(),
            Err(ParseBoardError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert_eq!(
            "..#".parse::<Board>(),
            Err(ParseBoardError::BadCell { symbol: '#', row: 0 })
        );
    }
}
