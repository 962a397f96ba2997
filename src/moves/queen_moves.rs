use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{queen_attacks, QUEEN_RAYS};
    use crate::game_state::chess_types::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("square")
    }

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        assert_eq!(QUEEN_RAYS[sq("d4").index()].count_ones(), 27);
    }

    #[test]
    fn queen_attacks_match_union() {
        let blockers = sq("d6").bit() | sq("g4").bit();
        let attacks = queen_attacks(sq("d4"), blockers);

        assert_ne!(attacks & sq("d6").bit(), 0);
        assert_ne!(attacks & sq("g4").bit(), 0);
        assert_eq!(attacks & sq("d7").bit(), 0);
        assert_eq!(attacks & sq("h4").bit(), 0);
    }
}
