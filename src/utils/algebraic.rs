//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values, reused by the FEN, coordinate-move and SAN components.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidSquare(format!(
            "{square} (file must be a-h)"
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(format!(
            "{square} (rank must be 1-8)"
        )));
    }

    Square::new(file - b'a', rank - b'1').ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::A1);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::H8);
        assert_eq!(square_to_algebraic(Square::A1), "a1");
        assert_eq!(square_to_algebraic(Square::H8), "h8");
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse").index(), 28);
    }

    #[test]
    fn rejects_off_board_and_malformed_squares() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e"] {
            let err = algebraic_to_square(bad).expect_err("square should be rejected");
            assert!(err.is_parse_error());
        }
    }
}
