//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::game::InvalidMove;
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A location on the Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

const FILES: &str = "ABCDEFGH";
const RANKS: &str = "12345678";

impl Location {
    /// Convert from a one-hot [`Bitboard`].
    ///
    /// # Panics
    /// If `bitboard` does not have exactly one location set. Decoding an empty mask
    /// is a caller bug, not a game error.
    #[inline]
    pub fn from_onehot(bitboard: Bitboard) -> Self {
        assert_eq!(bitboard.count_occupied(), 1);
        Self::from_onehot_unchecked(bitboard)
    }

    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` has more than one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a square index: 63 for A1, 0 for H8.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < crate::NUM_SPACES);
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a square index: 63 for A1, 0 for H8.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from zero-based row and column coordinates; (0, 0) is A1.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        let index = (EDGE_LENGTH - 1 - col) + (EDGE_LENGTH - 1 - row) * EDGE_LENGTH;
        Self::from_index(index as u8)
    }

    /// Get the zero-based row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        let row = EDGE_LENGTH - 1 - index / EDGE_LENGTH;
        let col = EDGE_LENGTH - 1 - index % EDGE_LENGTH;
        (row, col)
    }

    /// Build a location from a file letter (`A`-`H`, either case) and a rank digit (`1`-`8`).
    pub fn from_file_rank(file: char, rank: char) -> Result<Self, InvalidMove> {
        if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
            return Err(InvalidMove::MalformedCoordinate);
        }

        let col = FILES
            .find(file.to_ascii_uppercase())
            .ok_or(InvalidMove::OutOfRange)?;
        let row = RANKS.find(rank).ok_or(InvalidMove::OutOfRange)?;

        Ok(Self::from_coords(row, col))
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = RANKS.chars().nth(row).ok_or(fmt::Error)?;
        let col_str = FILES.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Location`] from two-character notation ("E3").
impl std::str::FromStr for Location {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_file_rank(file, rank),
            _ => Err(InvalidMove::MalformedCoordinate),
        }
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        !(loc_bitboard & self.0).is_empty()
    }

    /// Returns whether the list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << bitboard.trailing_zeros()).into();
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
