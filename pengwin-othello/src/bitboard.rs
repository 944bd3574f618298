//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and leave the board in an
//! inconsistent state if passed overlapping bitboards or a move mask with more than one bit.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board (A1), and uses row-major order.

use crate::utils;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: D4 and E5.
pub const BLACK_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Starting bitboard for White: E4 and D5.
pub const WHITE_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// The four corner squares: A1, H1, A8, H8.
pub const CORNERS: Bitboard = Bitboard(0x8100_0000_0000_0081);

const COL_A: u64 = 0x8080_8080_8080_8080;
const COL_H: u64 = 0x0101_0101_0101_0101;
const ROW_1: u64 = 0xFF00_0000_0000_0000;
const ROW_8: u64 = 0x0000_0000_0000_00FF;

/// One of the eight compass directions a capture ray can travel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    /// Positive values shift left (towards A1), negative values shift right.
    shift: i8,
    /// Clears the squares that would wrap around an edge when stepped.
    mask: u64,
}

/// Direction table: W, E, N, S, NW, NE, SW, SE.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { shift: 1, mask: !COL_A },
    Direction { shift: -1, mask: !COL_H },
    Direction { shift: 8, mask: !ROW_1 },
    Direction { shift: -8, mask: !ROW_8 },
    Direction { shift: 9, mask: !(COL_A | ROW_1) },
    Direction { shift: 7, mask: !(COL_H | ROW_1) },
    Direction { shift: -7, mask: !(COL_A | ROW_8) },
    Direction { shift: -9, mask: !(COL_H | ROW_8) },
];

impl Direction {
    /// Move every bit one square in this direction, dropping bits that would leave the board.
    #[inline]
    fn step(self, bits: u64) -> u64 {
        let bits = bits & self.mask;
        if self.shift > 0 {
            bits << self.shift as u32
        } else {
            bits >> (-self.shift) as u32
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |index| {
            if self.0 & (1 << index) != 0 {
                '#'
            } else {
                '.'
            }
        })
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every bit set in `other` is also set here.
    #[inline]
    pub fn contains(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Score a board as: # my pieces - # opponent pieces.
#[inline]
pub fn score_absolute_difference(active: Bitboard, opponent: Bitboard) -> i8 {
    (active.0.count_ones() as i8) - (opponent.0.count_ones() as i8)
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
///
/// Each direction smears the active pieces across contiguous opponent pieces,
/// then takes one more step onto an empty square. The inner walk is unrolled to
/// six steps, the longest run of opponent pieces that fits between two squares.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active.0 | opponent.0);
    let mut moves = 0;

    for dir in DIRECTIONS.iter() {
        let mut discs = dir.step(active.0) & opponent.0;
        for _ in 0..6 {
            discs |= dir.step(discs) & opponent.0;
        }
        moves |= dir.step(discs) & empties;
    }

    Bitboard(moves)
}

/// Compute the opponent pieces captured by playing `move_mask`, which must be one-hot.
/// Returns an empty bitboard if the move captures nothing (and is therefore illegal).
#[inline]
pub fn get_flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = 0;

    for dir in DIRECTIONS.iter() {
        let mut ray = dir.step(move_mask.0);
        let mut line = 0;
        while ray & opponent.0 != 0 {
            line |= ray;
            ray = dir.step(ray);
        }

        // Only a line closed off by one of our own pieces captures.
        if ray & active.0 != 0 {
            flips |= line;
        }
    }

    Bitboard(flips)
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location. An illegal move places a piece without flipping anything.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flips = get_flip_mask(active, opponent, move_mask);
    (active | flips | move_mask, opponent ^ flips)
}
