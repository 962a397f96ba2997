use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let own_occ = board.occupancy(side);
    let occupancy = board.occupied();

    for_each_piece(board, side, PieceKind::Rook, |from| {
        push_targets(from, rook_attacks(from, occupancy) & !own_occ, out);
    });
}
