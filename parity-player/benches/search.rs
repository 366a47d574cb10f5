use criterion::*;

use parity_othello::test_utils::random_game;
use parity_othello::{Board, Mark};
use parity_player::{AlphaBeta, Heuristic, SearchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn search(board: &Board, mark: Mark, heuristic: Heuristic, pruning: bool, max_depth: u32) -> u64 {
    let config = SearchConfig {
        heuristic,
        pruning,
        max_depth,
    };
    AlphaBeta::new(mark, config).search(board).nodes
}

fn criterion_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("pruning");
    let board = Board::default();

    for depth in [2u32, 4, 6, 8] {
        for pruning in [false, true] {
            let name = if pruning { "alphabeta" } else { "minimax" };
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| search(black_box(&board), Mark::X, Heuristic::Positional, pruning, depth))
            });
        }
    }

    group.finish();
}

fn criterion_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristics");
    let game = random_game(&mut StdRng::seed_from_u64(8), 8, 8, 12).unwrap();

    for heuristic in [
        Heuristic::Material,
        Heuristic::Mobility,
        Heuristic::Positional,
    ] {
        group.bench_function(heuristic.to_string(), |b| {
            b.iter(|| search(black_box(&game.board), game.to_move, heuristic, true, 3))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_pruning, criterion_heuristics);
criterion_main!(benches);
