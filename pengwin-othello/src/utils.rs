//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

/// Write a labelled 8x8 grid, asking `piece_at` for the character at each bit index.
/// Squares are visited from A1 (bit 63) to H8 (bit 0).
pub fn format_grid<F: Fn(usize) -> char>(f: &mut Formatter, piece_at: F) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            let index = NUM_SPACES - 1 - (row * EDGE_LENGTH + col);
            write!(f, "{} ", piece_at(index))?;
        }
    }

    Ok(())
}
