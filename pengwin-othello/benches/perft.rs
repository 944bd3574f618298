use criterion::*;

use pengwin_othello::bitboard;
use pengwin_othello::test_utils::{random_game, run_perft};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_move_mask(c: &mut Criterion) {
    let board = random_game(&mut StdRng::seed_from_u64(3), 24).board;

    c.bench_function("move_mask", |b| {
        b.iter(|| {
            bitboard::get_move_mask(
                black_box(board.player_bitboard),
                black_box(board.opponent_bitboard),
            )
        })
    });
}

criterion_group!(perft, criterion_perft, criterion_move_mask);
criterion_main!(perft);
