//! Square conversions for coordinate notation.
//!
//! Converts between human-readable squares (e.g. `e4`) and board `(row, col)`
//! squares. Rank 1 is row 7 and rank 8 is row 0.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a coordinate square (for example: "e4") to a board square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::from_row_col(b'8' - rank, file - b'a'))
}

/// Convert a board square to coordinate notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_centre_squares() {
        assert_eq!(algebraic_to_square("a1"), Ok(Square::from_row_col(7, 0)));
        assert_eq!(algebraic_to_square("h8"), Ok(Square::from_row_col(0, 7)));
        assert_eq!(algebraic_to_square("e4"), Ok(Square::from_row_col(4, 4)));
        assert_eq!(square_to_algebraic(Square::from_row_col(5, 2)), "c3");
    }

    #[test]
    fn rejects_out_of_range_input() {
        for bad in ["i1", "a9", "a0", "e", "e44", ""] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }
}
