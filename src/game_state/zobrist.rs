//! Zobrist keys identifying a position for repetition counting.
//!
//! The key covers piece placement, side to move, castling rights and the
//! en-passant file. Move counters are deliberately absent. Keys are generated
//! from a fixed seed so hashes are deterministic across runs.

use std::sync::OnceLock;

use crate::game_state::chess_types::*;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x5D4E_3C2B_1A09_F8E7;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Compute the normalized position key for `board`.
pub fn compute_position_key(board: &Board) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for square in Square::all() {
        let piece = board.piece_at(square);
        if let (Some(color), Some(kind)) = (piece.color(), piece.kind()) {
            key ^= tables.piece_square[color.index()][kind.index()][square.index()];
        }
    }

    if board.side_to_move() == Color::Black {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[(board.castling_rights() & 0x0F) as usize];

    if let Some(ep_square) = board.en_passant_square() {
        key ^= tables.en_passant_file[ep_square.file() as usize];
    }

    key
}
