//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Mark};

/// Count the leaves `depth` plies below `board` with `mark` to move.
/// A pass counts as a ply; two passes in a row end the game.
pub fn run_perft(board: &Board, mark: Mark, depth: u64) -> u64 {
    leaves_below(board, mark, depth, false)
}

fn leaves_below(board: &Board, mark: Mark, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(mark);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !mark, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.play_move_unchecked(mv, mark);
            leaves_below(&next, !mark, depth - 1, false)
        })
        .sum()
}

#[cfg(test)]
fn perft_4x4(depth: u64) -> u64 {
    run_perft(&Board::default(), Mark::X, depth)
}

#[test]
fn perft_01() {
    assert_eq!(perft_4x4(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(perft_4x4(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(perft_4x4(3), 44);
}

#[test]
fn perft_04() {
    assert_eq!(perft_4x4(4), 128);
}

#[test]
fn perft_05() {
    assert_eq!(perft_4x4(5), 424);
}

#[test]
fn perft_06() {
    assert_eq!(perft_4x4(6), 1256);
}

#[test]
fn perft_08() {
    assert_eq!(perft_4x4(8), 9116);
}

// Games start ending here.
#[test]
fn perft_10() {
    assert_eq!(perft_4x4(10), 36540);
}

#[test]
fn perft_12() {
    assert_eq!(perft_4x4(12), 57436);
}
