use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

/// Forward rank direction for pawns of `color`.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32 + direction;
        let mut attacks = 0u64;

        if rank >= 0 && rank < 8 {
            if file > 0 {
                attacks |= 1u64 << ((rank * 8 + file - 1) as u32);
            }
            if file < 7 {
                attacks |= 1u64 << ((rank * 8 + file + 1) as u32);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    fn sq(text: &str) -> Square {
        text.parse().expect("square")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let expected = sq("d3").bit() | sq("f3").bit();
        assert_eq!(pawn_attacks(Color::White, sq("e2")), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let expected = sq("d6").bit() | sq("f6").bit();
        assert_eq!(pawn_attacks(Color::Black, sq("e7")), expected);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        assert_eq!(pawn_attacks(Color::White, sq("a4")), sq("b5").bit());
        assert_eq!(pawn_attacks(Color::Black, sq("h5")), sq("g4").bit());
    }
}
