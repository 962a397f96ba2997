//! Boundary between the rules engine and move-selection bots.
//!
//! Bots only ever see a `Board` and answer with a move. Diagnostics come back
//! as `info_lines` so the caller decides whether and where to show them.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `best_move` is `None` only when the
    /// position has no legal moves.
    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, ChessError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub name: String,
    pub author: String,
    pub kind: String,
}

/// Optional capability for engines that can describe themselves.
pub trait Inspectable {
    fn info(&self) -> EngineInfo;
}
