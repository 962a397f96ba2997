//! Random-move engine.
//!
//! Selects uniformly from legal moves. Each instance owns its generator, so
//! engines playing in parallel never share random state and a seeded engine
//! replays the same game.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineInfo, EngineOutput, Inspectable};
use crate::game_state::chess_types::*;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "TermChess Random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, ChessError> {
        let legal_moves = board.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

impl Inspectable for RandomEngine {
    fn info(&self) -> EngineInfo {
        EngineInfo {
            name: self.name().to_owned(),
            author: "termchess".to_owned(),
            kind: "random".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, Inspectable};
    use crate::game_state::chess_types::Board;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::new_game();
        let mut engine = RandomEngine::with_seed(7);
        for _ in 0..20 {
            let out = engine.choose_move(&board).expect("engine should answer");
            let mv = out.best_move.expect("start position has moves");
            assert!(board.is_legal_move(mv));
            assert_eq!(out.info_lines, vec!["info string random_engine legal_moves 20"]);
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new_game();
        let mut a = RandomEngine::with_seed(42);
        let mut b = RandomEngine::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board).expect("engine should answer").best_move,
                b.choose_move(&board).expect("engine should answer").best_move
            );
        }
    }

    #[test]
    fn no_move_when_game_is_over() {
        let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&board)
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn describes_itself() {
        let info = RandomEngine::with_seed(0).info();
        assert_eq!(info.kind, "random");
        assert_eq!(info.name, "TermChess Random");
    }
}
