//! Standard Algebraic Notation output.
//!
//! SAN is derived from the position before the move (piece letter, capture,
//! disambiguation) and the position after it (check and mate suffixes).
//! Output only; move input goes through coordinate notation.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_without_history, validate_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub fn format_san(board: &Board, mv: Move) -> Result<String, ChessError> {
    let effects = validate_move(board, mv)?;
    let mut san = String::with_capacity(8);

    if effects.is_castle() {
        san.push_str(if mv.to.file() == 6 { "O-O" } else { "O-O-O" });
    } else if effects.moved == PieceKind::Pawn {
        if effects.is_capture() {
            san.push(mv.from.file_char());
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(kind) = mv.promotion {
            san.push('=');
            san.push(kind.letter());
        }
    } else {
        san.push(effects.moved.letter());
        san.push_str(&disambiguator(board, mv, effects.moved));
        if effects.is_capture() {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
    }

    let mut after = board.scratch_copy();
    apply_move_without_history(&mut after, mv)?;
    if after.in_check() {
        san.push(if generate_legal_moves(&after).is_empty() { '#' } else { '+' });
    }

    Ok(san)
}

/// Minimal origin hint separating `mv` from same-kind pieces that can also
/// legally reach its destination: file, else rank, else both.
fn disambiguator(board: &Board, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<Square> = generate_legal_moves(board)
        .into_iter()
        .filter(|other| {
            other.to == mv.to
                && other.from != mv.from
                && board.piece_at(other.from).kind() == Some(kind)
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
        mv.from.file_char().to_string()
    } else if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
        mv.from.rank_char().to_string()
    } else {
        mv.from.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_san;
    use crate::game_state::chess_types::*;

    fn san(fen: &str, text: &str) -> String {
        let board = Board::from_fen(fen).expect("FEN should parse");
        let mv: Move = text.parse().expect("move should parse");
        format_san(&board, mv).expect("SAN should format")
    }

    #[test]
    fn pawn_pushes_and_captures() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(san(start, "e2e4"), "e4");
        assert_eq!(san(start, "g1f3"), "Nf3");
        assert_eq!(
            san("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2", "e4d5"),
            "exd5"
        );
    }

    #[test]
    fn en_passant_is_a_pawn_capture() {
        assert_eq!(
            san("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3", "e5f6"),
            "exf6"
        );
    }

    #[test]
    fn castling_both_sides() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san(fen, "e1g1"), "O-O");
        assert_eq!(san(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn promotion_with_capture_and_check() {
        assert_eq!(san("3nk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7c8q"), "c8=Q");
        assert_eq!(san("3nk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7d8q"), "cxd8=Q+");
        assert_eq!(san("3nk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7d8n"), "cxd8=N");
        assert_eq!(san("3nk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7d8r"), "cxd8=R+");
    }

    #[test]
    fn rank_disambiguation_on_shared_file() {
        assert_eq!(san("7k/8/8/R7/8/8/8/R5K1 w - - 0 1", "a1a3"), "R1a3");
        assert_eq!(san("7k/8/8/R7/8/8/8/R5K1 w - - 0 1", "a5a3"), "R5a3");
    }

    #[test]
    fn file_disambiguation_for_knights() {
        assert_eq!(san("4k3/8/8/8/2N5/5N2/8/4K3 w - - 0 1", "f3e5"), "Nfe5");
    }

    #[test]
    fn full_square_disambiguation_when_file_and_rank_are_shared() {
        // Queens on a1, a3 and c1 can all reach b2.
        assert_eq!(san("4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1", "a1b2"), "Qa1b2");
    }

    #[test]
    fn pinned_rival_does_not_force_disambiguation() {
        // The c3 knight is pinned against the king, so only g3 can reach e4.
        assert_eq!(san("4k3/8/8/b7/8/2N3N1/8/4K3 w - - 0 1", "g3e4"), "Ne4");
        assert_eq!(san("4k3/8/8/8/8/2N3N1/8/4K3 w - - 0 1", "g3e4"), "Nge4");
    }

    #[test]
    fn checkmate_suffix() {
        assert_eq!(
            san("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2", "d8h4"),
            "Qh4#"
        );
    }

    #[test]
    fn empty_origin_is_an_error() {
        let board = Board::new_game();
        let mv: Move = "e4e5".parse().expect("move should parse");
        assert!(format_san(&board, mv).is_err());
    }
}
