use parity_othello::{Board, Cell, Mark};
use proptest::prelude::*;

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Brute-force reference: count the discs `mark` would flip at (col, row).
fn reference_flips(board: &Board, col: usize, row: usize, mark: Mark) -> usize {
    if board.get_cell(col, row) != Some(Cell::Empty) {
        return 0;
    }

    let mut flips = 0;
    for &(dc, dr) in DIRECTIONS.iter() {
        let mut run = 0;
        let (mut c, mut r) = (col as i64 + dc, row as i64 + dr);
        loop {
            if c < 0 || r < 0 {
                break;
            }
            match board.get_cell(c as usize, r as usize) {
                Some(Cell::Occupied(m)) if m == !mark => run += 1,
                Some(Cell::Occupied(m)) if m == mark => {
                    flips += run;
                    break;
                }
                _ => break,
            }
            c += dc;
            r += dr;
        }
    }
    flips
}

/// Arbitrary grids up to 5x5 with every cell independently empty, X or O.
fn arbitrary_board() -> impl Strategy<Value = Board> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(0u8..3, cols * rows).prop_map(move |cells| {
            let mut board = Board::empty(cols, rows).unwrap();
            for (index, code) in cells.into_iter().enumerate() {
                let cell = match code {
                    0 => Cell::Empty,
                    1 => Cell::Occupied(Mark::X),
                    _ => Cell::Occupied(Mark::O),
                };
                board.set_cell(index % cols, index / cols, cell).unwrap();
            }
            board
        })
    })
}

fn arbitrary_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

proptest! {
    #[test]
    fn legality_matches_reference(board in arbitrary_board(), mark in arbitrary_mark()) {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                prop_assert_eq!(
                    board.is_legal_move(col, row, mark),
                    reference_flips(&board, col, row, mark) > 0,
                    "mismatch at ({}, {}) on\n{}", col, row, board
                );
            }
        }
    }

    #[test]
    fn play_adds_one_disc_and_flips_reference_count(board in arbitrary_board(), mark in arbitrary_mark()) {
        for loc in board.legal_moves(mark) {
            let flips = reference_flips(&board, loc.col, loc.row, mark);
            let mut next = board.clone();
            next.play_move(loc.col, loc.row, mark).unwrap();

            prop_assert_eq!(next.num_cells(), board.num_cells());
            prop_assert_eq!(next.count_empty() + 1, board.count_empty());
            prop_assert_eq!(next.count_score(mark), board.count_score(mark) + flips + 1);
            prop_assert_eq!(next.count_score(!mark), board.count_score(!mark) - flips);
        }
    }

    #[test]
    fn illegal_play_leaves_board_untouched(board in arbitrary_board(), mark in arbitrary_mark()) {
        let mut next = board.clone();
        for loc in board.locations() {
            if !board.is_legal_move(loc.col, loc.row, mark) {
                prop_assert!(next.play_move(loc.col, loc.row, mark).is_err());
            }
        }
        prop_assert_eq!(next, board);
    }

    #[test]
    fn legal_moves_are_in_generation_order(board in arbitrary_board(), mark in arbitrary_mark()) {
        let moves: Vec<_> = board.legal_moves(mark).into();
        let mut sorted = moves.clone();
        sorted.sort();
        prop_assert_eq!(&moves, &sorted);
        prop_assert_eq!(moves.is_empty(), !board.has_legal_moves_remaining(mark));
    }
}
