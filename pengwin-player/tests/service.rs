//! End-to-end tests of the game service.

use pengwin_othello::{Game, InvalidMove, Location, Player, StateSnapshot};
use pengwin_player::{Bot, GameService, PlayerConfig, ServiceError};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use std::convert::TryFrom;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn white_bot(depth: u8, seed: u64) -> Option<Box<dyn pengwin_player::Agent>> {
    Some(Box::new(Bot::with_seed(
        Player::White,
        PlayerConfig::pengwin(depth),
        seed,
    )))
}

#[async_std::test]
async fn starts_in_the_opening_position() {
    init_logging();
    let handle = GameService::spawn(None);
    assert_eq!(handle.state().await, Ok(Game::new().snapshot()));
}

#[async_std::test]
async fn play_commits_the_move() {
    init_logging();
    let handle = GameService::spawn(None);

    let after = handle.play("E3").await.unwrap();
    assert!(!after.black_turn);
    assert_eq!(after.black.count_ones(), 4);
    assert_eq!(after.white.count_ones(), 1);
    assert_eq!(handle.state().await, Ok(after));
}

#[async_std::test]
async fn rejected_moves_leave_the_game_alone() {
    init_logging();
    let handle = GameService::spawn(None);
    let before = handle.state().await.unwrap();

    assert_eq!(
        handle.play("D4").await,
        Err(ServiceError::InvalidMove {
            source: InvalidMove::Occupied
        })
    );
    assert_eq!(
        handle.play("A1").await,
        Err(ServiceError::InvalidMove {
            source: InvalidMove::NoCaptures
        })
    );
    assert_eq!(
        handle.play("E").await,
        Err(ServiceError::InvalidMove {
            source: InvalidMove::MalformedCoordinate
        })
    );
    assert_eq!(handle.state().await, Ok(before));
}

#[async_std::test]
async fn new_game_resets() {
    init_logging();
    let handle = GameService::spawn(None);
    handle.play("E3").await.unwrap();
    assert_eq!(handle.new_game().await, Ok(Game::new().snapshot()));
}

#[async_std::test]
async fn bot_replies_after_the_move_commits() {
    init_logging();
    let handle = GameService::spawn(white_bot(2, 5));

    let (after_human, reply) = handle.play_and_reply("E3").await.unwrap();
    assert!(!after_human.black_turn);

    let bot_moves = reply.await.unwrap();
    assert_eq!(bot_moves.len(), 1);

    let after_bot = handle.state().await.unwrap();
    assert!(after_bot.black_turn);
    assert_eq!((after_bot.black | after_bot.white).count_ones(), 6);
}

#[async_std::test]
async fn bot_turn_is_a_no_op_on_the_humans_turn() {
    init_logging();
    let handle = GameService::spawn(white_bot(2, 0));
    assert_eq!(handle.bot_turn().await, Ok(vec![]));
    assert_eq!(handle.state().await, Ok(Game::new().snapshot()));

    let without_bot = GameService::spawn(None);
    without_bot.play("E3").await.unwrap();
    assert_eq!(without_bot.bot_turn().await, Ok(vec![]));
}

#[async_std::test]
async fn full_game_against_the_bot() {
    init_logging();
    let handle = GameService::spawn(white_bot(2, 9));
    let mut rng = StdRng::seed_from_u64(9);

    loop {
        let state = handle.state().await.unwrap();
        let game = Game::try_from(state).unwrap();
        if game.is_finished() {
            break;
        }

        // The bot always finishes its turn, so it is Black's move here.
        assert!(state.black_turn);
        let mv = game.get_moves().choose(&mut rng).unwrap();
        let (_, reply) = handle.play_and_reply(&mv.to_string()).await.unwrap();
        reply.await.unwrap();
    }

    let final_state: StateSnapshot = handle.state().await.unwrap();
    assert_eq!(final_state.black & final_state.white, 0);
    assert!(Game::try_from(final_state).unwrap().is_finished());
}

#[async_std::test]
async fn restored_game_hands_the_turn_to_the_side_that_can_move() {
    init_logging();
    // Black B1, White A1, nominally Black to move: only White can capture.
    let snapshot = StateSnapshot {
        black: 1 << 62,
        white: 1 << 63,
        black_turn: true,
    };
    let game = Game::try_from(snapshot).unwrap();
    let handle = GameService::spawn_with(game, white_bot(3, 1));
    assert!(!handle.state().await.unwrap().black_turn);

    let moves = handle.bot_turn().await.unwrap();
    assert_eq!(moves, vec!["C1".parse::<Location>().unwrap()]);
    assert!(Game::try_from(handle.state().await.unwrap())
        .unwrap()
        .is_finished());
}

#[async_std::test]
async fn concurrent_clients_see_whole_moves() {
    init_logging();
    let handle = GameService::spawn(None);

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let handle = handle.clone();
            async_std::task::spawn(async move {
                let mut seen = Vec::new();
                for _ in 0..16 {
                    seen.push(handle.state().await.unwrap());
                }
                seen
            })
        })
        .collect();

    handle.play("E3").await.unwrap();
    handle.play("F3").await.unwrap();

    for reader in readers {
        for state in reader.await {
            // Every snapshot is a position between whole moves.
            let discs = (state.black | state.white).count_ones();
            assert!(discs == 4 || discs == 5 || discs == 6, "{:?}", state);
            assert_eq!(state.black_turn, discs % 2 == 0);
        }
    }
}
