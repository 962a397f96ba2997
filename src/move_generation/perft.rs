//! Perft: exhaustive legal-move tree counts used to verify move generation.

use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::validate_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_legal_moves_with_positions,
};

/// Leaf statistics for one perft run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full leaf statistics to `depth` plies.
pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    perft_recurse(&board.scratch_copy(), depth, &mut total);
    total
}

/// Leaf node count only.
pub fn perft_nodes(board: &Board, depth: u8) -> u64 {
    count_nodes(&board.scratch_copy(), depth)
}

/// Node counts below each root move, sorted by coordinate notation.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut divide: Vec<(Move, u64)> = generate_legal_moves_with_positions(board)
        .into_iter()
        .map(|(mv, next)| (mv, count_nodes(&next, depth - 1)))
        .collect();
    divide.sort_by_key(|(mv, _)| mv.to_string());
    divide
}

/// Same result as `perft`, with one scoped worker thread per root move.
///
/// Each worker owns the position produced by its root move; nothing is shared
/// between threads.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(board, 0);
    }

    let parent = board.scratch_copy();
    let roots = generate_legal_moves_with_positions(&parent);

    thread::scope(|scope| {
        let handles: Vec<_> = roots
            .into_iter()
            .map(|(mv, next)| {
                let parent = &parent;
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    if depth == 1 {
                        count_leaf(parent, mv, &next, &mut local);
                    } else {
                        perft_recurse(&next, depth - 1, &mut local);
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    })
}

fn perft_recurse(board: &Board, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }

    for (mv, next) in generate_legal_moves_with_positions(board) {
        if depth == 1 {
            count_leaf(board, mv, &next, counts);
        } else {
            perft_recurse(&next, depth - 1, counts);
        }
    }
}

fn count_leaf(parent: &Board, mv: Move, next: &Board, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if let Ok(effects) = validate_move(parent, mv) {
        if effects.is_capture() {
            counts.captures += 1;
        }
        if effects.en_passant_victim.is_some() {
            counts.en_passant += 1;
        }
        if effects.is_castle() {
            counts.castles += 1;
        }
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    if is_king_in_check(next, next.side_to_move()) {
        counts.checks += 1;
        if generate_legal_moves(next).is_empty() {
            counts.checkmates += 1;
        }
    }
}

fn count_nodes(board: &Board, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => generate_legal_moves(board).len() as u64,
        _ => generate_legal_moves_with_positions(board)
            .iter()
            .map(|(_, next)| count_nodes(next, depth - 1))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(
            perft(&Board::new_game(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_reference_counts() {
        let start = board(STARTING_POSITION_FEN);
        assert_eq!(perft_nodes(&start, 1), 20);
        assert_eq!(perft_nodes(&start, 2), 400);

        let counts = perft(&start, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_reference_counts() {
        let kiwipete = board(KIWIPETE);

        let d1 = perft(&kiwipete, 1);
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = perft(&kiwipete, 2);
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn endgame_and_promotion_positions_match_reference_counts() {
        let pos3 = board(POSITION_3);
        assert_eq!(perft_nodes(&pos3, 1), 14);
        assert_eq!(perft_nodes(&pos3, 2), 191);
        assert_eq!(perft_nodes(&pos3, 3), 2812);

        let pos4 = board(POSITION_4);
        assert_eq!(perft_nodes(&pos4, 1), 6);
        assert_eq!(perft_nodes(&pos4, 2), 264);

        let pos5 = board(POSITION_5);
        assert_eq!(perft_nodes(&pos5, 1), 44);
        assert_eq!(perft_nodes(&pos5, 2), 1486);
    }

    #[test]
    fn divide_sums_to_total() {
        let kiwipete = board(KIWIPETE);
        let divide = perft_divide(&kiwipete, 2);
        assert_eq!(divide.len(), 48);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);
        assert!(divide.windows(2).all(|w| w[0].0.to_string() <= w[1].0.to_string()));
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let kiwipete = board(KIWIPETE);
        assert_eq!(perft_multi_threaded(&kiwipete, 2), perft(&kiwipete, 2));
        assert_eq!(perft_multi_threaded(&kiwipete, 1), perft(&kiwipete, 1));
    }
}
