//! Rule invariants checked over random reachable positions.

use pengwin_othello::bitboard::{Bitboard, CORNERS};
use pengwin_othello::test_utils::random_game;
use pengwin_othello::{stability, Game, Location, Player, Transition};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

fn all_locations() -> impl Iterator<Item = Location> {
    (0..64u8).map(Location::from_index)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn pieces_never_overlap(seed in any::<u64>(), plies in 0usize..64) {
        let game = random_game(&mut StdRng::seed_from_u64(seed), plies);
        let board = game.board;

        prop_assert!((board.player_bitboard & board.opponent_bitboard).is_empty());
        prop_assert!(board.occupied_mask().count_occupied() <= 64);
    }

    #[test]
    fn generator_agrees_with_flips(seed in any::<u64>(), plies in 0usize..60) {
        let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
        let moves = board.get_moves();

        for loc in all_locations() {
            let flips = board.get_flips(loc);
            prop_assert_eq!(moves.contains(loc), !flips.is_empty(), "at {}", loc);
            prop_assert!(board.opponent_bitboard.contains(flips));
        }
    }

    #[test]
    fn turn_only_passes_to_a_side_that_can_move(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        while let Some(mv) = game.get_moves().choose(&mut rng) {
            let mover = game.active_player;
            let transition = game.play(mv).unwrap();

            match transition {
                Transition::Advanced => {
                    prop_assert_eq!(game.active_player, !mover);
                    prop_assert!(!game.get_moves().is_empty());
                }
                Transition::OpponentPassed => {
                    prop_assert_eq!(game.active_player, mover);
                    prop_assert!(game.board.get_opponent_moves().is_empty());
                    prop_assert!(!game.get_moves().is_empty());
                }
                Transition::Finished => {
                    prop_assert!(game.is_finished());
                }
            }

            // A side to move always has a move unless the game is over.
            prop_assert_eq!(game.get_moves().is_empty(), game.is_finished());
        }

        prop_assert!(game.is_finished());
    }

    #[test]
    fn corners_stay_with_their_owner(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        let mut black_corners = Bitboard::default();
        let mut white_corners = Bitboard::default();

        while let Some(mv) = game.get_moves().choose(&mut rng) {
            game.play(mv).unwrap();

            let black = game.bitboard_for(Player::Black);
            let white = game.bitboard_for(Player::White);
            let (black_stable, white_stable) = stability::stable_discs(black, white);

            prop_assert!(black_stable.contains(black_corners));
            prop_assert!(white_stable.contains(white_corners));

            black_corners = black & CORNERS;
            white_corners = white & CORNERS;
        }
    }
}

#[test]
fn full_board_is_terminal_for_both_sides() {
    let black = Bitboard::from(0xAAAA_AAAA_AAAA_AAAA);
    let white = !black;

    for &player in &[Player::Black, Player::White] {
        let game = Game::from_colors(black, white, player);
        assert!(game.is_finished());
        assert!(game.get_moves().is_empty());
        assert!(game.board.get_opponent_moves().is_empty());
    }
}

#[test]
fn finished_game_rejects_every_move() {
    let mut game = random_game(&mut StdRng::seed_from_u64(5), 100);
    assert!(game.is_finished());

    let before = game;
    for loc in all_locations() {
        assert!(game.play(loc).is_err());
    }
    assert_eq!(game, before);
}
