//! Minimax and alpha-beta must agree on every position and depth.

use pengwin_othello::test_utils::random_game;
use pengwin_search::{rank_moves, Algorithm, Composite, Evaluate, Evaluation, Material};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_agree<E: Evaluate>(seed: u64, plies: usize, depth: u8, eval: &E) {
    let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
    let minimax = Algorithm::Minimax.score(board, depth, eval);
    let alpha_beta = Algorithm::AlphaBeta.score(board, depth, eval);
    assert_eq!(
        minimax, alpha_beta,
        "seed {} plies {} depth {}\n{}",
        seed, plies, depth, board
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn agree_with_material(seed in any::<u64>(), plies in 0usize..60, depth in 1u8..=6) {
        assert_agree(seed, plies, depth, &Material);
    }

    #[test]
    fn agree_with_composite(seed in any::<u64>(), plies in 0usize..60, depth in 1u8..=6) {
        assert_agree(seed, plies, depth, &Composite);
    }

    #[test]
    fn root_rankings_agree(seed in any::<u64>(), plies in 0usize..60, depth in 1u8..=4) {
        let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
        let eval = Evaluation::Composite;

        let mut minimax = rank_moves(board, depth, Algorithm::Minimax, &eval);
        let mut alpha_beta = rank_moves(board, depth, Algorithm::AlphaBeta, &eval);
        minimax.sort_by_key(|scored| scored.location);
        alpha_beta.sort_by_key(|scored| scored.location);

        prop_assert_eq!(minimax, alpha_beta);
    }
}

#[test]
fn endgame_agreement() {
    // Late positions exercise passes and terminal scoring inside the tree.
    for seed in 0..16 {
        for &plies in &[50, 54, 56, 58] {
            assert_agree(seed, plies, 6, &Composite);
            assert_agree(seed, plies, 6, &Material);
        }
    }
}
