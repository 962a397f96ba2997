//! Game status classification.
//!
//! Evaluated on demand from a single board snapshot. The first matching rule
//! wins: no legal moves, then the forced draws (seventy-five moves, fivefold
//! repetition), then the claimable draws which are applied automatically
//! (fifty moves, threefold repetition), then dead positions.

use std::fmt;

use crate::game_state::chess_rules::{
    FIFTY_MOVE_HALFMOVES, FIVEFOLD_REPETITION, SEVENTY_FIVE_MOVE_HALFMOVES, THREEFOLD_REPETITION,
};
use crate::game_state::chess_types::Board;
use crate::game_state::insufficient_material::is_insufficient_material;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawSeventyFiveMove,
    DrawInsufficientMaterial,
    DrawThreefoldRepetition,
    DrawFivefoldRepetition,
}

impl GameStatus {
    pub fn is_draw(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Checkmate)
    }

    pub fn is_game_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw (fifty-move rule)",
            GameStatus::DrawSeventyFiveMove => "draw (seventy-five-move rule)",
            GameStatus::DrawInsufficientMaterial => "draw (insufficient material)",
            GameStatus::DrawThreefoldRepetition => "draw (threefold repetition)",
            GameStatus::DrawFivefoldRepetition => "draw (fivefold repetition)",
        };
        f.write_str(text)
    }
}

pub fn evaluate_status(board: &Board) -> GameStatus {
    if board.legal_moves().is_empty() {
        return if board.in_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    let halfmoves = board.halfmove_clock();
    let repetitions = board.repetition_count();

    if halfmoves >= SEVENTY_FIVE_MOVE_HALFMOVES {
        GameStatus::DrawSeventyFiveMove
    } else if repetitions >= FIVEFOLD_REPETITION {
        GameStatus::DrawFivefoldRepetition
    } else if halfmoves >= FIFTY_MOVE_HALFMOVES {
        GameStatus::DrawFiftyMove
    } else if repetitions >= THREEFOLD_REPETITION {
        GameStatus::DrawThreefoldRepetition
    } else if is_insufficient_material(board) {
        GameStatus::DrawInsufficientMaterial
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate_status, GameStatus};
    use crate::game_state::chess_types::Board;

    fn status(fen: &str) -> GameStatus {
        evaluate_status(&Board::from_fen(fen).expect("FEN should parse"))
    }

    #[test]
    fn seventy_five_move_rule_beats_fifty() {
        assert_eq!(status("4k3/8/8/8/8/8/8/R3K3 w - - 150 120"), GameStatus::DrawSeventyFiveMove);
        assert_eq!(status("4k3/8/8/8/8/8/8/R3K3 w - - 149 120"), GameStatus::DrawFiftyMove);
        assert_eq!(status("4k3/8/8/8/8/8/8/R3K3 w - - 99 120"), GameStatus::Ongoing);
    }

    #[test]
    fn checkmate_wins_over_clock_draws() {
        // Back-rank mate delivered with the clock already past 150.
        assert_eq!(status("R5k1/5ppp/8/8/8/8/8/6K1 b - - 160 90"), GameStatus::Checkmate);
    }

    #[test]
    fn stalemate_wins_over_insufficient_material() {
        assert_eq!(status("k7/2K5/8/8/8/4B3/8/8 b - - 0 1"), GameStatus::Stalemate);
        assert_eq!(status("k7/2K5/8/8/8/8/8/8 b - - 0 1"), GameStatus::DrawInsufficientMaterial);
        assert_eq!(status("k7/2K5/8/8/8/8/8/6N1 b - - 0 1"), GameStatus::DrawInsufficientMaterial);
        assert_eq!(status("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn display_texts() {
        assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
        assert_eq!(GameStatus::DrawFiftyMove.to_string(), "draw (fifty-move rule)");
        assert_eq!(
            GameStatus::DrawInsufficientMaterial.to_string(),
            "draw (insufficient material)"
        );
        assert!(GameStatus::Stalemate.is_draw());
        assert!(!GameStatus::Checkmate.is_draw());
        assert!(!GameStatus::Ongoing.is_game_over());
    }
}
