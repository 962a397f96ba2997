use crate::game_state::chess_rules::CASTLING_LANES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;

/// King steps plus castling candidates.
///
/// Castling here is gated only by rights, home squares and empty squares in
/// between; attacked-square rules are applied by the legal filter.
pub fn generate_king_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let own_occ = board.occupancy(side);
    let Some(from) = board.king_square(side) else {
        return;
    };

    push_targets(from, king_attacks(from) & !own_occ, out);
    generate_castling_moves(board, from, out);
}

fn generate_castling_moves(board: &Board, king_from: Square, out: &mut Vec<Move>) {
    let side = board.side_to_move();

    for lane in CASTLING_LANES.iter().filter(|lane| lane.color == side) {
        if board.castling_rights() & lane.right != 0
            && king_from == lane.king_from
            && board.piece_at(lane.rook_from).is(side, PieceKind::Rook)
            && board.occupied() & lane.must_be_empty == 0
        {
            out.push(Move::new(lane.king_from, lane.king_to));
        }
    }
}
