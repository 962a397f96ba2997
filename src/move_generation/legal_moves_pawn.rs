use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::for_each_piece;
use crate::moves::pawn_moves::{pawn_attacks, pawn_direction, pawn_start_rank, promotion_rank};

pub fn generate_pawn_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let enemy_occ = board.occupancy(side.opposite());
    let empty = !board.occupied();
    let direction = pawn_direction(side);

    // The en-passant target is empty, so it only shows up through this mask.
    let en_passant = board
        .en_passant_square()
        .filter(|target| {
            target
                .offset(0, -direction)
                .is_some_and(|victim| board.piece_at(victim).is(side.opposite(), PieceKind::Pawn))
        })
        .map_or(0, Square::bit);
    let capture_targets = enemy_occ | en_passant;

    for_each_piece(board, side, PieceKind::Pawn, |from| {
        if let Some(one_step) = from.offset(0, direction) {
            if one_step.bit() & empty != 0 {
                push_pawn_move(side, from, one_step, out);

                if from.rank() == pawn_start_rank(side) {
                    if let Some(two_step) = one_step.offset(0, direction) {
                        if two_step.bit() & empty != 0 {
                            out.push(Move::new(from, two_step));
                        }
                    }
                }
            }
        }

        let mut captures = pawn_attacks(side, from) & capture_targets;
        while captures != 0 {
            let to = Square::from_index_unchecked(captures.trailing_zeros() as u8);
            push_pawn_move(side, from, to, out);
            captures &= captures - 1;
        }
    });
}

/// Push a pawn move, expanded into the four promotions on the last rank.
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.rank() == promotion_rank(side) {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
