//! `pengwin-othello` implements the rules of Othello on a pair of 64-bit bitboards.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations: the direction table,
//!    move generation and flip resolution.
//!  - [`Board`] pairs the bitboards from the side to move's perspective. It is
//!    copyable and unchecked, which makes it the state search code recurses over.
//!  - [`Game`] is the safe interface: it validates moves, applies the forced-pass
//!    rule and reports errors without touching the position.
pub mod bitboard;
pub mod stability;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
