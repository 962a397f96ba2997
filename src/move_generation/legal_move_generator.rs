//! Full legal move generation pipeline.
//!
//! Collects piece-wise pseudo-legal moves, then keeps a move only if
//! applying it to a scratch copy leaves the mover's king unattacked. Castling
//! additionally requires the king's start and transit squares to be safe.

use crate::game_state::chess_rules::castling_lane_for;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_without_history;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(64);

    generate_pawn_moves(board, &mut pseudo);
    generate_knight_moves(board, &mut pseudo);
    generate_bishop_moves(board, &mut pseudo);
    generate_rook_moves(board, &mut pseudo);
    generate_queen_moves(board, &mut pseudo);
    generate_king_moves(board, &mut pseudo);

    pseudo
}

pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    generate_legal_moves_with_positions(board)
        .into_iter()
        .map(|(mv, _)| mv)
        .collect()
}

/// Legal moves paired with the (history-free) position each one produces.
pub(crate) fn generate_legal_moves_with_positions(board: &Board) -> Vec<(Move, Board)> {
    let side = board.side_to_move();
    let scratch = board.scratch_copy();
    let pseudo = generate_pseudo_legal_moves(board);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        if is_castle_candidate(board, mv) && !castle_path_is_safe(board, mv) {
            continue;
        }

        let mut next = scratch.clone();
        if apply_move_without_history(&mut next, mv).is_err() {
            continue;
        }

        // Illegal if own king is in check after move.
        if is_king_in_check(&next, side) {
            continue;
        }

        legal.push((mv, next));
    }

    legal
}

fn is_castle_candidate(board: &Board, mv: Move) -> bool {
    board.piece_at(mv.from).kind() == Some(PieceKind::King)
        && castling_lane_for(board.side_to_move(), mv.from, mv.to).is_some()
}

/// The king may not castle out of or through check.
fn castle_path_is_safe(board: &Board, mv: Move) -> bool {
    let side = board.side_to_move();
    let enemy = side.opposite();
    let Some(lane) = castling_lane_for(side, mv.from, mv.to) else {
        return true;
    };
    !is_square_attacked(board, lane.king_from, enemy)
        && !is_square_attacked(board, lane.king_transit, enemy)
}
