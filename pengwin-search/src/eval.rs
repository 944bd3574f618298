//! Static evaluation of a board from the perspective of the player to move.

use derive_more::{Display, Error};
use pengwin_othello::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Multiplier on the piece difference at finished positions, large enough to
/// dominate any score from an unfinished one.
pub const TERMINAL_WEIGHT: i32 = 1000;

/// Weight of one stable piece relative to one legal move.
pub const STABILITY_WEIGHT: i32 = 20;

/// Scores a board for the player to move. Higher is better for that player.
pub trait Evaluate {
    fn evaluate(&self, board: Board) -> i32;
}

/// # my pieces - # opponent pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluate for Material {
    #[inline]
    fn evaluate(&self, board: Board) -> i32 {
        board.score_absolute_difference() as i32
    }
}

/// Mobility plus weighted corner stability; the scaled piece difference once the game is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composite;

impl Evaluate for Composite {
    #[inline]
    fn evaluate(&self, board: Board) -> i32 {
        let moves = board.get_moves().len() as i32;
        let opponent_moves = board.get_opponent_moves().len() as i32;

        if moves == 0 && opponent_moves == 0 {
            return TERMINAL_WEIGHT * board.score_absolute_difference() as i32;
        }

        let (stable, opponent_stable) = board.stable_counts();
        let stability = stable as i32 - opponent_stable as i32;

        (moves - opponent_moves) + STABILITY_WEIGHT * stability
    }
}

/// The closed set of evaluation strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    #[display(fmt = "material")]
    Material,
    #[display(fmt = "composite")]
    Composite,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::Composite
    }
}

impl Evaluate for Evaluation {
    #[inline]
    fn evaluate(&self, board: Board) -> i32 {
        match self {
            Evaluation::Material => Material.evaluate(board),
            Evaluation::Composite => Composite.evaluate(board),
        }
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "unknown evaluation strategy {:?}", name)]
pub struct UnknownStrategy {
    pub name: String,
}

impl FromStr for Evaluation {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(Evaluation::Material),
            "composite" => Ok(Evaluation::Composite),
            _ => Err(UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
