use crate::game_state::chess_types::*;

/// Push one move per set bit of `targets`, all starting at `from`.
#[inline]
pub fn push_targets(from: Square, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let to = Square::from_index_unchecked(targets.trailing_zeros() as u8);
        out.push(Move::new(from, to));
        targets &= targets - 1;
    }
}

/// Run `each` for every square of `color`'s pieces of `kind`.
#[inline]
pub fn for_each_piece(board: &Board, color: Color, kind: PieceKind, mut each: impl FnMut(Square)) {
    let mut bb = board.pieces_of(color, kind);
    while bb != 0 {
        each(Square::from_index_unchecked(bb.trailing_zeros() as u8));
        bb &= bb - 1;
    }
}
