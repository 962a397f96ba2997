//! The engine's move value.
//!
//! A move is only origin, destination and an optional promotion kind.
//! Captures, castling and en passant are not flagged on the move; they are
//! derived from the board the move is played on.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self))
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}
