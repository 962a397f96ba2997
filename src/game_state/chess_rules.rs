//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry and the move-clock thresholds used
//! by the game status evaluator.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Half-moves without pawn move or capture that make the fifty-move draw.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;
/// Half-moves without pawn move or capture that force the seventy-five-move draw.
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;
pub const THREEFOLD_REPETITION: u32 = 3;
pub const FIVEFOLD_REPETITION: u32 = 5;

/// One castling option: the right bit and the squares involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub must_be_empty: u64,
    /// Square the king crosses; must not be attacked.
    pub king_transit: Square,
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        right: CASTLE_WHITE_KINGSIDE,
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        must_be_empty: Square::F1.bit() | Square::G1.bit(),
        king_transit: Square::F1,
    },
    CastlingLane {
        right: CASTLE_WHITE_QUEENSIDE,
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        must_be_empty: Square::B1.bit() | Square::C1.bit() | Square::D1.bit(),
        king_transit: Square::D1,
    },
    CastlingLane {
        right: CASTLE_BLACK_KINGSIDE,
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        must_be_empty: Square::F8.bit() | Square::G8.bit(),
        king_transit: Square::F8,
    },
    CastlingLane {
        right: CASTLE_BLACK_QUEENSIDE,
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        must_be_empty: Square::B8.bit() | Square::C8.bit() | Square::D8.bit(),
        king_transit: Square::D8,
    },
];

/// The castling lane a king move from `from` to `to` corresponds to, if any.
pub fn castling_lane_for(color: Color, from: Square, to: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.king_from == from && lane.king_to == to)
}

/// Castling right lost when a piece leaves or is captured on `square`.
pub fn castling_right_for_square(square: Square) -> CastlingRights {
    match square {
        Square::A1 => CASTLE_WHITE_QUEENSIDE,
        Square::H1 => CASTLE_WHITE_KINGSIDE,
        Square::A8 => CASTLE_BLACK_QUEENSIDE,
        Square::H8 => CASTLE_BLACK_KINGSIDE,
        Square::E1 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Square::E8 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}
