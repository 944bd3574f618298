//! Root move ranking and selection.

use crate::eval::Evaluate;
use crate::search::Algorithm;
use arrayvec::ArrayVec;
use itertools::Itertools;
use log::{debug, log_enabled, Level};
use pengwin_othello::{Board, Location, NUM_SPACES};
use rand::seq::SliceRandom;
use rand::Rng;

/// A root move with its searched score, from the mover's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub location: Location,
    pub score: i32,
}

/// Score every legal move at the root and return them best first.
/// Each move is searched to `depth - 1` plies below the root.
pub fn rank_moves<E: Evaluate + ?Sized>(
    board: Board,
    depth: u8,
    algorithm: Algorithm,
    eval: &E,
) -> ArrayVec<[ScoredMove; NUM_SPACES]> {
    let child_depth = depth.saturating_sub(1);

    let mut ranked: ArrayVec<[ScoredMove; NUM_SPACES]> = board
        .get_moves()
        .map(|location| ScoredMove {
            location,
            score: -algorithm.score(board.make_move(location), child_depth, eval),
        })
        .collect();
    ranked.sort_by_key(|scored| -scored.score);

    if log_enabled!(Level::Debug) {
        debug!(
            "{} depth {}: {}",
            algorithm,
            depth,
            ranked
                .iter()
                .map(|scored| format!("{}={}", scored.location, scored.score))
                .join(", ")
        );
    }

    ranked
}

/// Pick the best move, breaking ties uniformly at random.
/// Returns None if there are no legal moves, in which case the caller must pass.
pub fn select_move<E: Evaluate + ?Sized, R: Rng + ?Sized>(
    board: Board,
    depth: u8,
    algorithm: Algorithm,
    eval: &E,
    rng: &mut R,
) -> Option<Location> {
    let ranked = rank_moves(board, depth, algorithm, eval);
    let best = ranked.first()?.score;
    let tied = ranked.iter().take_while(|scored| scored.score == best).count();

    ranked[..tied].choose(rng).map(|scored| scored.location)
}
