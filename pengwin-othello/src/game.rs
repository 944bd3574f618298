//! Implements game-level Othello logic.
//!
//! [`Game`] is the checked interface: every move is validated, the turn passes
//! according to the forced-pass rule, and rejected moves leave the game untouched.
//! For raw speed, use [`Board`] directly.

use crate::bitboard::Bitboard;
use crate::{utils, Board, Location, LocationList};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Why a move was rejected. The game is left unchanged.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[display(fmt = "invalid move: occupied")]
    Occupied,
    #[display(fmt = "invalid move: no captures")]
    NoCaptures,
    #[display(fmt = "invalid move: malformed coordinate")]
    MalformedCoordinate,
    #[display(fmt = "invalid move: out of range")]
    OutOfRange,
}

/// A snapshot that cannot be a game: some square holds both colors.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid snapshot: a square holds two pieces")]
pub struct OverlappingPieces;

/// What happened to the turn after a move was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The opponent moves next.
    Advanced,
    /// The opponent has no moves and passes; the same player moves again.
    OpponentPassed,
    /// Neither player can move.
    Finished,
}

/// Read-only view of a game, in the shape external collaborators consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub black: u64,
    pub white: u64,
    pub black_turn: bool,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    /// Pieces from the perspective of `active_player`.
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game in the starting position, Black to move.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::Black,
        }
    }

    /// Build a game from color bitboards. Panics if the bitboards overlap.
    ///
    /// If `active_player` cannot move but the opponent can, the opponent moves instead.
    pub fn from_colors(black: Bitboard, white: Bitboard, active_player: Player) -> Self {
        assert!((black & white).is_empty(), "a square holds two pieces");
        let board = Board {
            player_bitboard: black,
            opponent_bitboard: white,
        };

        let mut game = Self {
            board: match active_player {
                Player::Black => board,
                Player::White => board.pass(),
            },
            active_player,
        };
        if game.board.get_moves().is_empty() && !game.board.get_opponent_moves().is_empty() {
            game.board = game.board.pass();
            game.active_player = !active_player;
        }
        game
    }

    /// The board as seen by `player`, whoever is to move.
    pub fn board_for(&self, player: Player) -> Board {
        if player == self.active_player {
            self.board
        } else {
            self.board.pass()
        }
    }

    /// Get the pieces belonging to `player`.
    pub fn bitboard_for(&self, player: Player) -> Bitboard {
        self.board_for(player).player_bitboard
    }

    /// Get the list of moves available for the active player.
    #[inline]
    pub fn get_moves(&self) -> LocationList {
        self.board.get_moves()
    }

    /// True if neither player can move.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Play a move for the active player.
    ///
    /// After the pieces flip, the turn goes to the opponent if they can move, stays
    /// with the active player if only they can move, and the game finishes otherwise.
    pub fn play(&mut self, loc: Location) -> Result<Transition, InvalidMove> {
        let move_mask: Bitboard = loc.into();
        if !(self.board.occupied_mask() & move_mask).is_empty() {
            return Err(InvalidMove::Occupied);
        }
        if self.board.get_flips(loc).is_empty() {
            return Err(InvalidMove::NoCaptures);
        }

        let next = self.board.make_move(loc);
        let transition = if !next.get_moves().is_empty() {
            self.board = next;
            self.active_player = !self.active_player;
            Transition::Advanced
        } else if !next.get_opponent_moves().is_empty() {
            self.board = next.pass();
            Transition::OpponentPassed
        } else {
            self.board = next.pass();
            Transition::Finished
        };

        Ok(transition)
    }

    /// Play a move given in `{A-H}{1-8}` notation.
    pub fn play_coordinate(&mut self, coord: &str) -> Result<Transition, InvalidMove> {
        let loc: Location = coord.parse()?;
        self.play(loc)
    }

    /// Snapshot the color bitboards and whose turn it is.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            black: self.bitboard_for(Player::Black).into(),
            white: self.bitboard_for(Player::White).into(),
            black_turn: self.active_player == Player::Black,
        }
    }

    /// Count (black pieces, white pieces).
    pub fn piece_counts(&self) -> (u8, u8) {
        (
            self.bitboard_for(Player::Black).count_occupied(),
            self.bitboard_for(Player::White).count_occupied(),
        )
    }

    /// The player with more pieces, or None for a draw.
    /// Only meaningful once the game is finished.
    pub fn winner(&self) -> Option<Player> {
        let (black, white) = self.piece_counts();
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl TryFrom<StateSnapshot> for Game {
    type Error = OverlappingPieces;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        if snapshot.black & snapshot.white != 0 {
            return Err(OverlappingPieces);
        }

        let active_player = if snapshot.black_turn {
            Player::Black
        } else {
            Player::White
        };
        Ok(Self::from_colors(
            snapshot.black.into(),
            snapshot.white.into(),
            active_player,
        ))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let black: u64 = self.bitboard_for(Player::Black).into();
        let white: u64 = self.bitboard_for(Player::White).into();

        utils::format_grid(f, |index| {
            let mask = 1u64 << index;
            if black & mask != 0 {
                'X'
            } else if white & mask != 0 {
                'O'
            } else {
                '.'
            }
        })?;

        let (black_count, white_count) = self.piece_counts();
        if self.is_finished() {
            write!(f, "\nGame over: X {} - O {}", black_count, white_count)
        } else {
            write!(
                f,
                "\n{} to move: X {} - O {}",
                self.active_player, black_count, white_count
            )
        }
    }
}
