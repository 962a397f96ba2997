//! Authoritative position container.
//!
//! Placement is stored twice: the `[Piece; 64]` mailbox answers `piece_at`
//! in constant time and is the source of truth, while per-color/per-kind
//! bitboards feed the attack tables. Every mutation goes through
//! `put_piece`/`clear_square` so the two never drift apart.
//!
//! All storage is plain arrays plus an owned history map, so `Clone` (and
//! `copy`) produces a fully independent board.

use std::fmt;

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{
    BACK_RANK, FIFTY_MOVE_HALFMOVES, THREEFOLD_REPETITION,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_status, GameStatus};
use crate::game_state::position_history::PositionHistory;
use crate::game_state::zobrist::compute_position_key;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked, king_square};
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_pseudo_legal_moves};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_board;
use crate::utils::san::format_san;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Piece; 64],
    pub(crate) pieces: [[u64; 6]; 2],
    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: PositionHistory,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// A board with no pieces, White to move and no history.
    ///
    /// Not a valid game position on its own; the FEN parser and `new_game`
    /// fill it in.
    pub(crate) fn empty() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
            pieces: [[0u64; 6]; 2],
            occupancy_by_color: [0u64; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: PositionHistory::new(),
        }
    }

    /// The standard starting position with the initial position recorded.
    pub fn new_game() -> Self {
        let mut board = Self::empty();

        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.put_piece(Square::from_index_unchecked(file), Piece::new(Color::White, *kind));
            board.put_piece(
                Square::from_index_unchecked(8 + file),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.put_piece(
                Square::from_index_unchecked(48 + file),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
            board.put_piece(Square::from_index_unchecked(56 + file), Piece::new(Color::Black, *kind));
        }

        board.castling_rights = CASTLE_ALL;
        board.record_position();
        board
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Deep, independent duplicate (same as `clone`).
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy without repetition history, for trial application where only
    /// placement, rights and clocks matter.
    pub(crate) fn scratch_copy(&self) -> Self {
        Self {
            squares: self.squares,
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: PositionHistory::new(),
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    /// Bitboard of `color`'s pieces of `kind`.
    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupancy_all
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(self, color)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Place `piece` on `square`, replacing whatever stood there.
    pub(crate) fn put_piece(&mut self, square: Square, piece: Piece) {
        self.clear_square(square);
        if let (Some(color), Some(kind)) = (piece.color(), piece.kind()) {
            let bit = square.bit();
            self.pieces[color.index()][kind.index()] |= bit;
            self.occupancy_by_color[color.index()] |= bit;
            self.occupancy_all |= bit;
        }
        self.squares[square.index()] = piece;
    }

    /// Empty `square` and return what stood there.
    pub(crate) fn clear_square(&mut self, square: Square) -> Piece {
        let previous = self.squares[square.index()];
        if let (Some(color), Some(kind)) = (previous.color(), previous.kind()) {
            let mask = !square.bit();
            self.pieces[color.index()][kind.index()] &= mask;
            self.occupancy_by_color[color.index()] &= mask;
            self.occupancy_all &= mask;
        }
        self.squares[square.index()] = Piece::EMPTY;
        previous
    }

    /// Normalized key of the current position (placement, side, rights, ep).
    pub fn position_key(&self) -> u64 {
        compute_position_key(self)
    }

    pub(crate) fn record_position(&mut self) {
        let key = self.position_key();
        self.history.record(key);
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetition_count(&self) -> u32 {
        self.history.occurrences(self.position_key())
    }

    /// Positions recorded since the board was created, repeats included.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply `mv` after confirming it is legal in this position.
    ///
    /// On error the board is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let mut next = self.copy();
        apply_move(&mut next, mv)?;
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::illegal(mv, "not a legal move in this position"));
        }
        *self = next;
        Ok(())
    }

    /// Apply `mv` with structural validation only.
    ///
    /// The move is not checked against the legal move list, so a caller can
    /// leave its own king in check. On error the board is unchanged.
    pub fn make_move_unchecked(&mut self, mv: Move) -> Result<(), ChessError> {
        apply_move(self, mv)
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Every legal move for the side to move, in no particular order.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Moves obeying piece movement rules, king safety not yet checked.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        generate_pseudo_legal_moves(self)
    }

    /// True when the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_square_attacked(self, square, by)
    }

    pub fn status(&self) -> GameStatus {
        evaluate_status(self)
    }

    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// The side that delivered mate, `None` unless the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.status() {
            GameStatus::Checkmate => Some(self.side_to_move.opposite()),
            _ => None,
        }
    }

    /// True when a player could claim a draw by the fifty-move or
    /// threefold-repetition rule.
    pub fn can_claim_draw(&self) -> bool {
        if matches!(self.status(), GameStatus::Checkmate | GameStatus::Stalemate) {
            return false;
        }
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
            || self.repetition_count() >= THREEFOLD_REPETITION
    }

    /// SAN for `mv`, computed against this (pre-move) position.
    pub fn format_san(&self, mv: Move) -> Result<String, ChessError> {
        format_san(self, mv)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
