use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{for_each_piece, push_targets};
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let own_occ = board.occupancy(side);
    let occupancy = board.occupied();

    for_each_piece(board, side, PieceKind::Bishop, |from| {
        push_targets(from, bishop_attacks(from, occupancy) & !own_occ, out);
    });
}
