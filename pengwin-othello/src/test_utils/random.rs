//! Random playouts, for producing reachable positions in tests and benchmarks.

use crate::Game;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the starting position.
/// Stops early if the game finishes.
pub fn random_game<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Game {
    let mut game = Game::new();
    for _ in 0..plies {
        if !random_move(rng, &mut game) {
            break;
        }
    }
    game
}

/// Play one random legal move. Returns false if the game is already finished.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R, game: &mut Game) -> bool {
    match game.get_moves().choose(rng) {
        Some(mv) => game.play(mv).is_ok(),
        None => false,
    }
}
