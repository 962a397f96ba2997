//! Attack and check queries.
//!
//! Attack detection looks outward from the target square using the
//! precomputed tables, so it never generates moves and cannot recurse into
//! legality checking.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let kings = board.pieces_of(color, PieceKind::King);
    if kings == 0 {
        None
    } else {
        Square::from_index(kings.trailing_zeros() as u8)
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True if any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn of `attacker_color` attacks `square` exactly when a defending
    // pawn on `square` would attack the pawn's square.
    let attacker_pawns = board.pieces_of(attacker_color, PieceKind::Pawn);
    if pawn_attacks(attacker_color.opposite(), square) & attacker_pawns != 0 {
        return true;
    }

    if knight_attacks(square) & board.pieces_of(attacker_color, PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & board.pieces_of(attacker_color, PieceKind::King) != 0 {
        return true;
    }

    let queens = board.pieces_of(attacker_color, PieceKind::Queen);
    let occupancy = board.occupied();

    let diagonal = board.pieces_of(attacker_color, PieceKind::Bishop) | queens;
    if BISHOP_RAYS[square.index()] & diagonal != 0
        && bishop_attacks(square, occupancy) & diagonal != 0
    {
        return true;
    }

    let straight = board.pieces_of(attacker_color, PieceKind::Rook) | queens;
    if ROOK_RAYS[square.index()] & straight != 0 && rook_attacks(square, occupancy) & straight != 0 {
        return true;
    }

    false
}
