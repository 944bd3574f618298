//! Conservative estimate of the pieces that can never be flipped.
//!
//! Only corners are recognized: no capture ray can approach a corner from outside
//! the board, so a corner piece is permanent. Edge runs and filled-line stability are
//! not detected, so the counts undershoot the true number of stable pieces.

use crate::bitboard::{Bitboard, CORNERS};

/// Get (active stable pieces, opponent stable pieces).
#[inline]
pub fn stable_discs(active: Bitboard, opponent: Bitboard) -> (Bitboard, Bitboard) {
    (active & CORNERS, opponent & CORNERS)
}

/// Count (active stable pieces, opponent stable pieces).
#[inline]
pub fn stable_counts(active: Bitboard, opponent: Bitboard) -> (u8, u8) {
    let (active_stable, opponent_stable) = stable_discs(active, opponent);
    (
        active_stable.count_occupied(),
        opponent_stable.count_occupied(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{BLACK_START, WHITE_START};

    #[test]
    fn no_stable_pieces_at_start() {
        assert_eq!(stable_counts(BLACK_START, WHITE_START), (0, 0));
    }

    #[test]
    fn corners_only() {
        // A1 and an A2 edge piece for the active player, H8 for the opponent.
        let active = Bitboard::from((1 << 63) | (1 << 55));
        let opponent = Bitboard::from(1);
        let (active_stable, opponent_stable) = stable_discs(active, opponent);
        assert_eq!(active_stable, Bitboard::from(1 << 63));
        assert_eq!(opponent_stable, opponent);
        assert_eq!(stable_counts(active, opponent), (1, 1));
    }

    #[test]
    fn all_corners() {
        assert_eq!(stable_counts(CORNERS, Bitboard::default()), (4, 0));
        assert_eq!(stable_counts(Bitboard::default(), !Bitboard::default()), (0, 4));
    }
}
