//! Errors returned by the rules engine.
//!
//! Two families exist. Parse errors report malformed text (FEN, squares,
//! coordinate moves) and never touch a board. Illegal-move errors report a
//! move that is structurally malformed or absent from the legal move list;
//! the board is left exactly as it was. Nothing here is fatal, so callers
//! running long game sessions can always recover.

use thiserror::Error;

use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A FEN string failed validation.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An algebraic square such as `e4` failed to parse.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Coordinate move text such as `e7e8q` failed to parse.
    #[error("invalid move notation: {0}")]
    InvalidMoveNotation(String),

    /// The move cannot be played in this position.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: String },
}

impl ChessError {
    pub(crate) fn illegal(mv: Move, reason: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            mv,
            reason: reason.into(),
        }
    }

    /// True for malformed-text failures, false for illegal moves.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, ChessError::IllegalMove { .. })
    }
}
