//! Crate root module declarations for the TermChess rules engine.
//!
//! Exposes the board and its value types, move generation, notation codecs
//! (FEN, coordinate moves, SAN, PGN export) and the bot boundary so the UI,
//! bots and game orchestration can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_status;
    pub mod insufficient_material;
    pub mod position_history;
    pub mod zobrist;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod san;
}

pub use chess_errors::ChessError;
pub use game_state::chess_types::{Board, Color, Move, Piece, PieceKind, Square};
pub use game_state::game_status::GameStatus;
pub use utils::san::format_san;
