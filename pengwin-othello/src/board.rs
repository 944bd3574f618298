//! A pair of bitboards seen from the side to move.
//!
//! [`Board`] is the unchecked, copyable state that search code recurses over.
//! Making a move returns a new board from the opponent's perspective, so undoing
//! a move is just dropping the new value.

use crate::bitboard::{self, Bitboard};
use crate::stability;
use crate::{utils, Location, LocationList};
use std::fmt;

/// The complete piece layout, from the perspective of the player to move.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    pub player_bitboard: Bitboard,
    pub opponent_bitboard: Bitboard,
}

impl Default for Board {
    /// Gets the starting board from the first mover's perspective.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting board, from Black's perspective.
    pub const fn new() -> Self {
        Self {
            player_bitboard: bitboard::BLACK_START,
            opponent_bitboard: bitboard::WHITE_START,
        }
    }

    /// Swap the players without changing any pieces.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            player_bitboard: self.opponent_bitboard,
            opponent_bitboard: self.player_bitboard,
        }
    }

    /// Get the legal moves for the player to move.
    #[inline]
    pub fn get_moves(self) -> LocationList {
        bitboard::get_move_mask(self.player_bitboard, self.opponent_bitboard).into()
    }

    /// Get the legal moves the opponent would have if it were their turn.
    #[inline]
    pub fn get_opponent_moves(self) -> LocationList {
        bitboard::get_move_mask(self.opponent_bitboard, self.player_bitboard).into()
    }

    /// Get the opponent pieces captured by playing at `loc`.
    /// Empty if `loc` is occupied or captures nothing.
    #[inline]
    pub fn get_flips(self, loc: Location) -> Bitboard {
        let move_mask: Bitboard = loc.into();
        if !(self.occupied_mask() & move_mask).is_empty() {
            return Bitboard::default();
        }
        bitboard::get_flip_mask(self.player_bitboard, self.opponent_bitboard, move_mask)
    }

    /// Make a move for the player to move, returning the board from the opponent's perspective.
    /// Does not check legality: an illegal location is placed without flipping anything.
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        let (player, opponent) =
            bitboard::apply_move(self.player_bitboard, self.opponent_bitboard, loc.into());
        Self {
            player_bitboard: opponent,
            opponent_bitboard: player,
        }
    }

    /// True if neither side can move. Always recomputed from the pieces.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.get_moves().is_empty() && self.get_opponent_moves().is_empty()
    }

    /// Score a board as: # my pieces - # opponent pieces.
    #[inline]
    pub fn score_absolute_difference(self) -> i8 {
        bitboard::score_absolute_difference(self.player_bitboard, self.opponent_bitboard)
    }

    /// Count (my stable pieces, opponent stable pieces).
    #[inline]
    pub fn stable_counts(self) -> (u8, u8) {
        stability::stable_counts(self.player_bitboard, self.opponent_bitboard)
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.player_bitboard | self.opponent_bitboard
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player: u64 = self.player_bitboard.into();
        let opponent: u64 = self.opponent_bitboard.into();

        utils::format_grid(f, |index| {
            let mask = 1u64 << index;
            match (player & mask != 0, opponent & mask != 0) {
                (true, false) => '#',
                (false, true) => 'O',
                (false, false) => '.',
                (true, true) => '!',
            }
        })
    }
}
