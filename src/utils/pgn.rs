//! PGN export of a flat move list.
//!
//! Replays the moves from the initial position (each one checked for
//! legality), writes Seven-Tag-Roster headers plus `SetUp`/`FEN` for
//! non-standard starts, and ends the movetext with the result token derived
//! from the final position.

use chrono::Local;

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;

const SEVEN_TAG_ROSTER: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

pub fn write_pgn(initial: &Board, moves: &[Move]) -> Result<String, ChessError> {
    write_pgn_with_headers(initial, moves, &[])
}

/// Like `write_pgn`, with caller headers overriding the roster defaults.
///
/// Headers outside the roster are written after it in the given order. The
/// `Result` tag always reflects the final position.
pub fn write_pgn_with_headers(
    initial: &Board,
    moves: &[Move],
    headers: &[(&str, &str)],
) -> Result<String, ChessError> {
    let mut board = initial.copy();
    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 1);

    let black_starts = initial.side_to_move() == Color::Black;
    if black_starts && !moves.is_empty() {
        movetext_parts.push(format!("{}...", initial.fullmove_number()));
    }

    for mv in moves {
        let san = board.format_san(*mv)?;
        if board.side_to_move() == Color::White {
            movetext_parts.push(format!("{}. {}", board.fullmove_number(), san));
        } else {
            movetext_parts.push(san);
        }
        board.make_move(*mv)?;
    }

    let result = result_token(&board);
    movetext_parts.push(result.to_owned());

    let date = Local::now().format("%Y.%m.%d").to_string();
    let lookup = |key: &str| headers.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

    let mut out = String::new();
    for key in SEVEN_TAG_ROSTER {
        let value = match key {
            "Result" => result,
            "Date" => lookup(key).unwrap_or(date.as_str()),
            "Event" => lookup(key).unwrap_or("Casual Game"),
            "Site" => lookup(key).unwrap_or("Local"),
            "Round" => lookup(key).unwrap_or("-"),
            _ => lookup(key).unwrap_or("?"),
        };
        push_header(&mut out, key, value);
    }

    let initial_fen = initial.to_fen();
    if initial_fen != STARTING_POSITION_FEN {
        push_header(&mut out, "SetUp", "1");
        push_header(&mut out, "FEN", &initial_fen);
    }

    for (key, value) in headers {
        if !SEVEN_TAG_ROSTER.contains(key) && !matches!(*key, "SetUp" | "FEN") {
            push_header(&mut out, key, value);
        }
    }

    out.push('\n');
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

/// PGN result token for the position's status.
pub fn result_token(board: &Board) -> &'static str {
    match board.status() {
        GameStatus::Checkmate => match board.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        },
        GameStatus::Ongoing => "*",
        _ => "1/2-1/2",
    }
}

fn push_header(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
