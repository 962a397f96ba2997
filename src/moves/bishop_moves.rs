//! Sliding-piece ray tracing shared by bishops, rooks and queens.
//!
//! `*_RAYS` tables hold the empty-board rays and serve as a cheap
//! "could this slider possibly see the square" pre-filter. The
//! occupancy-aware `*_attacks` functions walk each ray and stop at the first
//! occupied square, which is included so captures fall out naturally.

use crate::game_state::chess_types::Square;

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < BISHOP_DIRECTIONS.len() {
            let (df, dr) = BISHOP_DIRECTIONS[i];
            rays |= trace_ray_const(sq as i32, df, dr);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = square.file() as i32 + file_step;
    let mut rank = square.rank() as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << ((rank * 8 + file) as u32);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

pub(crate) const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        attacks |= 1u64 << ((rank * 8 + file) as u32);
        file += file_step;
        rank += rank_step;
    }

    attacks
}
