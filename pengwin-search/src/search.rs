//! Negamax search functions.
//!
//! Every score is from the perspective of the player to move on the board passed in.
//! Recursing swaps the players and negates the result, so there is one code path for
//! both sides. A pass keeps the same depth: it is not a ply.

use crate::eval::Evaluate;
use derive_more::{Display, Error};
use pengwin_othello::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bound larger than any evaluation. Negating it does not overflow.
pub const INFINITY: i32 = i32::MAX;

/// Plain minimax: visits every node down to `depth`.
pub fn minimax<E: Evaluate + ?Sized>(board: Board, depth: u8, eval: &E) -> i32 {
    if depth == 0 {
        return eval.evaluate(board);
    }

    let moves = board.get_moves();
    if moves.is_empty() {
        // Both players are stuck: game is over
        if board.get_opponent_moves().is_empty() {
            return eval.evaluate(board);
        }

        // I pass, but my opponent may have moves
        return -minimax(board.pass(), depth, eval);
    }

    moves
        .map(|mv| -minimax(board.make_move(mv), depth - 1, eval))
        .fold(-INFINITY, i32::max)
}

/// Fail-hard alpha-beta. With the full window `(-INFINITY, INFINITY)`
/// the result is exactly the minimax score.
pub fn alpha_beta<E: Evaluate + ?Sized>(
    board: Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    eval: &E,
) -> i32 {
    if depth == 0 {
        return eval.evaluate(board);
    }

    let moves = board.get_moves();
    if moves.is_empty() {
        if board.get_opponent_moves().is_empty() {
            return eval.evaluate(board);
        }

        return -alpha_beta(board.pass(), depth, -beta, -alpha, eval);
    }

    for mv in moves {
        let score = -alpha_beta(board.make_move(mv), depth - 1, -beta, -alpha, eval);

        // This branch is better than any line I could force before: update current lower bound
        if score > alpha {
            alpha = score;
        }

        // Fail high: my opponent won't allow this line
        if alpha >= beta {
            break;
        }
    }

    alpha
}

/// Which search to run. Both give identical scores; alpha-beta visits fewer nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[display(fmt = "minimax")]
    Minimax,
    #[display(fmt = "alpha-beta")]
    AlphaBeta,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::AlphaBeta
    }
}

impl Algorithm {
    /// Score `board` for the player to move, searching `depth` plies.
    #[inline]
    pub fn score<E: Evaluate + ?Sized>(self, board: Board, depth: u8, eval: &E) -> i32 {
        match self {
            Algorithm::Minimax => minimax(board, depth, eval),
            Algorithm::AlphaBeta => alpha_beta(board, depth, -INFINITY, INFINITY, eval),
        }
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "unknown search algorithm {:?}", name)]
pub struct UnknownAlgorithm {
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            _ => Err(UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
