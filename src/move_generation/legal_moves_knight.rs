use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let own_occ = board.occupancy(side);

    for_each_piece(board, side, PieceKind::Knight, |from| {
        push_targets(from, knight_attacks(from) & !own_occ, out);
    });
}
