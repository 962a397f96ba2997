//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! Parsing here is purely syntactic. A parsed move may still be illegal in a
//! given position; that is decided by comparing against the legal move list.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&mv.from.to_string());
    out.push_str(&mv.to.to_string());
    if let Some(promotion) = mv.promotion {
        out.push(promotion.letter().to_ascii_lowercase());
    }
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, ChessError> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidMoveNotation(format!(
            "{long_algebraic} (expected 4-5 characters like e2e4 or e7e8q)"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| {
        ChessError::InvalidMoveNotation(format!(
            "{long_algebraic} (invalid from square {})",
            &long_algebraic[0..2]
        ))
    })?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| {
        ChessError::InvalidMoveNotation(format!(
            "{long_algebraic} (invalid to square {})",
            &long_algebraic[2..4]
        ))
    })?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(|| {
            ChessError::InvalidMoveNotation(format!(
                "{long_algebraic} (invalid promotion piece '{ch}')"
            ))
        })?),
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    PieceKind::from_letter(ch).filter(|kind| kind.is_promotion_target())
}
