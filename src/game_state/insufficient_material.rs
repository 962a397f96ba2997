//! Dead-position detection by material.
//!
//! A position is drawn on material when neither side has a pawn, rook or
//! queen, and either at most one minor piece remains on the board, or every
//! minor piece is a bishop and all of them stand on squares of one color.

use crate::game_state::chess_types::*;

const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;

pub fn is_insufficient_material(board: &Board) -> bool {
    let mut heavy_or_pawns = 0u64;
    let mut knights = 0u64;
    let mut bishops = 0u64;

    for color in [Color::White, Color::Black] {
        heavy_or_pawns |= board.pieces_of(color, PieceKind::Pawn)
            | board.pieces_of(color, PieceKind::Rook)
            | board.pieces_of(color, PieceKind::Queen);
        knights |= board.pieces_of(color, PieceKind::Knight);
        bishops |= board.pieces_of(color, PieceKind::Bishop);
    }

    if heavy_or_pawns != 0 {
        return false;
    }

    let minors = (knights | bishops).count_ones();
    if minors <= 1 {
        return true;
    }

    knights == 0 && (bishops & DARK_SQUARES == 0 || bishops & !DARK_SQUARES == 0)
}

#[cfg(test)]
mod tests {
    use super::{is_insufficient_material, DARK_SQUARES};
    use crate::game_state::chess_types::*;

    fn dead(fen: &str) -> bool {
        is_insufficient_material(&Board::from_fen(fen).expect("FEN should parse"))
    }

    #[test]
    fn dark_square_mask_matches_square_colors() {
        for square in Square::all() {
            assert_eq!(DARK_SQUARES & square.bit() != 0, square.is_dark(), "{square}");
        }
    }

    #[test]
    fn bare_kings_and_single_minor_are_dead() {
        assert!(dead("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(dead("4k3/8/8/8/8/8/8/4KB2 w - - 0 1"));
        assert!(dead("4k3/8/8/8/8/8/8/4KN2 w - - 0 1"));
        assert!(dead("4kn2/8/8/8/8/8/8/4K3 w - - 0 1"));
    }

    #[test]
    fn same_colored_bishops_are_dead() {
        // c1 and f8 are both dark squares.
        assert!(dead("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1"));
        // c1, e3 and b8 are all dark squares.
        assert!(dead("1b2k3/8/8/8/8/4B3/8/2B1K3 w - - 0 1"));
    }

    #[test]
    fn opposite_colored_bishops_can_mate() {
        // c1 is dark, c8 is light.
        assert!(!dead("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1"));
    }

    #[test]
    fn two_minors_with_a_knight_are_not_dead() {
        assert!(!dead("4k3/8/8/8/8/8/8/2BNK3 w - - 0 1"));
        assert!(!dead("4kn2/8/8/8/8/8/8/4KN2 w - - 0 1"));
        assert!(!dead("4kb2/8/8/8/8/8/8/4KN2 w - - 0 1"));
    }

    #[test]
    fn any_pawn_rook_or_queen_is_sufficient() {
        assert!(!dead("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"));
        assert!(!dead("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"));
        assert!(!dead("3qk3/8/8/8/8/8/8/4K3 w - - 0 1"));
    }
}
