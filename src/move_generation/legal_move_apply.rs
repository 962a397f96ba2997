//! In-place move application.
//!
//! Validation runs to completion before the first write, so a rejected move
//! never leaves a half-applied board behind. Castling and en passant are
//! recognized from the board, not from flags on the move.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{castling_lane_for, castling_right_for_square};
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::promotion_rank;

/// What a validated move does beyond moving one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveEffects {
    pub moved: PieceKind,
    pub captured: Option<PieceKind>,
    pub en_passant_victim: Option<Square>,
    pub rook_relocation: Option<(Square, Square)>,
}

impl MoveEffects {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.rook_relocation.is_some()
    }
}

/// Check that `mv` is well formed for the side to move and classify it.
pub(crate) fn validate_move(board: &Board, mv: Move) -> Result<MoveEffects, ChessError> {
    let side = board.side_to_move;
    let piece = board.piece_at(mv.from);

    let (Some(color), Some(moved)) = (piece.color(), piece.kind()) else {
        return Err(ChessError::illegal(mv, format!("no piece on {}", mv.from)));
    };
    if color != side {
        return Err(ChessError::illegal(
            mv,
            format!("piece on {} belongs to {color}, {side} is to move", mv.from),
        ));
    }
    if mv.from == mv.to {
        return Err(ChessError::illegal(mv, "origin and destination are the same square"));
    }

    let target = board.piece_at(mv.to);
    if target.color() == Some(side) {
        return Err(ChessError::illegal(mv, format!("{} holds a {side} piece", mv.to)));
    }
    if target.kind() == Some(PieceKind::King) {
        return Err(ChessError::illegal(mv, format!("the king on {} cannot be captured", mv.to)));
    }

    let reaches_last_rank = moved == PieceKind::Pawn && mv.to.rank() == promotion_rank(side);
    match mv.promotion {
        Some(kind) if !kind.is_promotion_target() => {
            return Err(ChessError::illegal(mv, format!("cannot promote to {kind:?}")));
        }
        Some(_) if !reaches_last_rank => {
            return Err(ChessError::illegal(mv, "promotion on a non-promoting move"));
        }
        None if reaches_last_rank => {
            return Err(ChessError::illegal(mv, "pawn reaching the last rank must promote"));
        }
        _ => {}
    }

    let mut effects = MoveEffects {
        moved,
        captured: target.kind(),
        en_passant_victim: None,
        rook_relocation: None,
    };

    if moved == PieceKind::Pawn
        && target.is_empty()
        && mv.from.file() != mv.to.file()
        && board.en_passant_square == Some(mv.to)
    {
        let victim = Square::new(mv.to.file(), mv.from.rank())
            .ok_or_else(|| ChessError::illegal(mv, "en-passant victim off the board"))?;
        if board.piece_at(victim).is(side.opposite(), PieceKind::Pawn) {
            effects.captured = Some(PieceKind::Pawn);
            effects.en_passant_victim = Some(victim);
        }
    }

    if moved == PieceKind::Pawn
        && mv.from.file() != mv.to.file()
        && effects.captured.is_none()
    {
        return Err(ChessError::illegal(mv, format!("pawn capture on empty square {}", mv.to)));
    }

    if moved == PieceKind::King {
        if let Some(lane) = castling_lane_for(side, mv.from, mv.to) {
            if board.piece_at(lane.rook_from).is(side, PieceKind::Rook) {
                effects.rook_relocation = Some((lane.rook_from, lane.rook_to));
            }
        }
    }

    Ok(effects)
}

/// Validate and apply `mv`, then record the resulting position.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<(), ChessError> {
    let effects = validate_move(board, mv)?;
    apply_validated(board, mv, effects);
    board.record_position();
    Ok(())
}

/// Validate and apply `mv` without touching repetition history.
pub(crate) fn apply_move_without_history(board: &mut Board, mv: Move) -> Result<(), ChessError> {
    let effects = validate_move(board, mv)?;
    apply_validated(board, mv, effects);
    Ok(())
}

fn apply_validated(board: &mut Board, mv: Move, effects: MoveEffects) {
    let side = board.side_to_move;

    if let Some(victim) = effects.en_passant_victim {
        board.clear_square(victim);
    }

    let moving = board.clear_square(mv.from);
    let placed = match mv.promotion {
        Some(kind) => Piece::new(side, kind),
        None => moving,
    };
    board.put_piece(mv.to, placed);

    if let Some((rook_from, rook_to)) = effects.rook_relocation {
        let rook = board.clear_square(rook_from);
        board.put_piece(rook_to, rook);
    }

    update_castling_rights(board, side, mv, effects.moved);

    board.en_passant_square = if effects.moved == PieceKind::Pawn
        && mv.from.rank().abs_diff(mv.to.rank()) == 2
    {
        Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2)
    } else {
        None
    };

    if effects.moved == PieceKind::Pawn || effects.is_capture() {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }
    if side == Color::Black {
        board.fullmove_number = board.fullmove_number.saturating_add(1);
    }

    board.side_to_move = side.opposite();
}

fn update_castling_rights(board: &mut Board, side: Color, mv: Move, moved: PieceKind) {
    if moved == PieceKind::King {
        board.castling_rights &= match side {
            Color::White => !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE),
            Color::Black => !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE),
        };
    }

    // Leaving a home square or being captured on one.
    board.castling_rights &= !(castling_right_for_square(mv.from) | castling_right_for_square(mv.to));
}
