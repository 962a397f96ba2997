//! FEN-to-Board parser.
//!
//! Builds a fully populated board (mailbox, bitboards, rights, clocks) from a
//! Forsyth-Edwards Notation string and records it as the first entry of the
//! position history. Every field is validated before the board is returned,
//! so a failed parse never yields a partial position.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::pawn_moves::pawn_direction;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Board, ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(invalid(format!(
            "expected 6 space-separated fields, found {}",
            fields.len()
        )));
    }

    let mut board = Board::empty();

    parse_placement(fields[0], &mut board)?;
    board.side_to_move = parse_side_to_move(fields[1])?;
    board.castling_rights = parse_castling_rights(fields[2])?;
    board.en_passant_square = parse_en_passant_square(fields[3], &board)?;
    board.halfmove_clock = parse_counter(fields[4], "halfmove clock")?;
    board.fullmove_number = parse_counter(fields[5], "fullmove number")?;
    if board.fullmove_number == 0 {
        return Err(invalid("fullmove number must be at least 1"));
    }

    validate_kings(&board)?;

    // The side that just moved cannot have left its king attacked.
    if is_king_in_check(&board, board.side_to_move.opposite()) {
        return Err(invalid(format!(
            "{} king is in check with {} to move",
            board.side_to_move.opposite(),
            board.side_to_move
        )));
    }

    board.record_position();
    Ok(board)
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

/// Unsigned decimal counter: digits only, no sign.
fn parse_counter(field: &str, name: &str) -> Result<u32, ChessError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("{name} must be a non-negative integer, got {field}")));
    }
    field
        .parse::<u32>()
        .map_err(|_| invalid(format!("{name} {field} is out of range")))
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), ChessError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;
        let mut previous_was_digit = false;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                if previous_was_digit {
                    return Err(invalid(format!(
                        "rank {} has adjacent empty-square counts",
                        rank + 1
                    )));
                }
                previous_was_digit = true;
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(format!("rank {} has more than 8 files", rank + 1)));
                }
                continue;
            }
            previous_was_digit = false;

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let square = Square::new(file, rank)
                .ok_or_else(|| invalid(format!("rank {} has more than 8 files", rank + 1)))?;

            if piece.kind() == Some(PieceKind::Pawn) && (rank == 0 || rank == 7) {
                return Err(invalid(format!("pawn on back rank at {square}")));
            }

            board.put_piece(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!(
                "rank {} covers {file} files instead of 8",
                rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side: &str) -> Result<Color, ChessError> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move must be 'w' or 'b', got {side}"))),
    }
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, ChessError> {
    if castling == "-" {
        return Ok(0);
    }

    let order = [
        ('K', CASTLE_WHITE_KINGSIDE),
        ('Q', CASTLE_WHITE_QUEENSIDE),
        ('k', CASTLE_BLACK_KINGSIDE),
        ('q', CASTLE_BLACK_QUEENSIDE),
    ];

    let mut rights: CastlingRights = 0;
    let mut next_allowed = 0usize;

    for ch in castling.chars() {
        let position = order
            .iter()
            .position(|(letter, _)| *letter == ch)
            .ok_or_else(|| invalid(format!("invalid castling character '{ch}'")))?;
        if position < next_allowed {
            return Err(invalid(format!(
                "castling field {castling} is duplicated or out of KQkq order"
            )));
        }
        rights |= order[position].1;
        next_allowed = position + 1;
    }

    if rights == 0 {
        return Err(invalid("castling field is empty"));
    }

    Ok(rights)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped over, with that pawn in front of it and its origin vacated.
fn parse_en_passant_square(field: &str, board: &Board) -> Result<Option<Square>, ChessError> {
    if field == "-" {
        return Ok(None);
    }

    let side_to_move = board.side_to_move;
    let square = algebraic_to_square(field)
        .map_err(|_| invalid(format!("invalid en-passant square {field}")))?;

    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(invalid(format!(
            "en-passant square {field} is not on rank {} for {side_to_move} to move",
            expected_rank + 1
        )));
    }

    let direction = pawn_direction(side_to_move);
    let pawn = square.offset(0, -direction);
    let origin = square.offset(0, direction);

    if !board.piece_at(square).is_empty() {
        return Err(invalid(format!("en-passant square {field} is occupied")));
    }
    if !pawn.is_some_and(|sq| board.piece_at(sq).is(side_to_move.opposite(), PieceKind::Pawn)) {
        return Err(invalid(format!(
            "en-passant square {field} has no {} pawn in front of it",
            side_to_move.opposite()
        )));
    }
    if !origin.is_some_and(|sq| board.piece_at(sq).is_empty()) {
        return Err(invalid(format!(
            "en-passant square {field} has an occupied pawn origin"
        )));
    }

    Ok(Some(square))
}

fn validate_kings(board: &Board) -> Result<(), ChessError> {
    for color in [Color::White, Color::Black] {
        let kings = board.pieces_of(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(invalid(format!("{color} must have exactly one king, found {kings}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.en_passant_square(), None);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.occupied().count_ones(), 32);
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn parses_partial_rights_and_en_passant() {
        let board = parse_fen("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w Kq c6 0 2")
            .expect("FEN should parse");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(board.en_passant_square(), Some("c6".parse().expect("square")));
        assert!(board.piece_at("c5".parse().expect("square")).is(Color::Black, PieceKind::Pawn));
    }

    #[test]
    fn rejects_structural_errors() {
        let bad = [
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1BNR w kq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKKNR w kq - 0 1",
            "Pnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            // Side not to move is in check.
            "4k3/4Q3/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/3n4/8/4K3 b - - 0 1",
            // En-passant target occupied, or with no double-stepped pawn.
            "4k3/8/4n3/4p3/8/8/8/4K3 w - e6 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e6 0 1",
            "4k3/8/8/8/4p3/8/8/4K3 b - e3 0 1",
            "4k3/4p3/8/4p3/8/8/8/4K3 w - e6 0 1",
            // Counter and placement grammar.
            "4k3/8/8/8/8/8/8/4K3 w - - +5 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 +1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 99999999999",
            "4k3/8/8/44/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K12 w - - 0 1",
        ];

        for fen in bad {
            let err = parse_fen(fen).expect_err("FEN should be rejected");
            assert!(
                matches!(err, ChessError::InvalidFen(_)),
                "{fen} gave {err:?}"
            );
        }
    }

    #[test]
    fn counters_wider_than_sixteen_bits_are_kept() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 70000 70000";
        let board = parse_fen(fen).expect("large counters should parse");
        assert_eq!(board.halfmove_clock(), 70000);
        assert_eq!(board.fullmove_number(), 70000);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn out_of_range_counter_is_reported_as_such() {
        let err = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 99999999999")
            .expect_err("counter should overflow");
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn en_passant_target_behind_double_stepped_pawn_is_kept() {
        let board = parse_fen("4k3/8/8/4p3/8/8/8/4K3 w - e6 0 1").expect("FEN should parse");
        assert_eq!(board.en_passant_square(), Some("e6".parse().expect("square")));
    }

    #[test]
    fn side_to_move_may_be_in_check() {
        let board = parse_fen("4k3/4Q3/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(board.in_check());
    }
}
