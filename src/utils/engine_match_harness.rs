//! Head-to-head engine match harness.
//!
//! Drives one game between two `Engine` implementations on a caller-owned
//! board. Every engine choice goes through the checked `make_move`, so a bot
//! returning an illegal move surfaces as an error instead of corrupting the
//! game.

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The game reached a terminal status.
    Finished(GameStatus),
    /// The ply cap was reached with the game still ongoing.
    MaxPlies,
    /// The engine for this side returned no move in an ongoing game.
    NoMoveOffered(Color),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub winner: Option<Color>,
    pub san_moves: Vec<String>,
    pub played_moves: Vec<Move>,
    pub final_fen: String,
}

/// Play `board` forward until the game ends or `config.max_plies` is reached.
///
/// `engine_white` moves for White, `engine_black` for Black.
pub fn play_engine_match(
    board: &mut Board,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    engine_white.new_game();
    engine_black.new_game();

    let mut san_moves = Vec::<String>::new();
    let mut played_moves = Vec::<Move>::new();

    let outcome = loop {
        let status = board.status();
        if status != GameStatus::Ongoing {
            break MatchOutcome::Finished(status);
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let mover = board.side_to_move();
        let out = match mover {
            Color::White => engine_white.choose_move(board)?,
            Color::Black => engine_black.choose_move(board)?,
        };
        let Some(chosen) = out.best_move else {
            break MatchOutcome::NoMoveOffered(mover);
        };

        let san = board.format_san(chosen)?;
        board.make_move(chosen)?;
        san_moves.push(san);
        played_moves.push(chosen);
    };

    Ok(MatchResult {
        outcome,
        winner: board.winner(),
        san_moves,
        played_moves,
        final_fen: board.to_fen(),
    })
}
