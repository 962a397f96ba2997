//! Perft runner for checking move generation against known node counts.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --divide`
//! `cargo run --release --bin perft -- --depth 5 --threads`

use std::time::Instant;

use termchess_engine::game_state::chess_rules::STARTING_POSITION_FEN;
use termchess_engine::move_generation::perft::{perft, perft_divide, perft_multi_threaded};
use termchess_engine::{Board, ChessError};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v;
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_else(|| default.to_owned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|a| a == flag)
}

fn main() -> Result<(), ChessError> {
    let fen = parse_arg_string("--fen", STARTING_POSITION_FEN);
    let depth = parse_arg_u8("--depth", 4);
    let board = Board::from_fen(&fen)?;

    println!("{board}");
    println!("fen: {fen}");

    let started = Instant::now();

    if has_flag("--divide") {
        let divide = perft_divide(&board, depth);
        let mut total = 0u64;
        for (mv, nodes) in &divide {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!();
        println!("moves={} nodes={total}", divide.len());
    } else {
        let counts = if has_flag("--threads") {
            perft_multi_threaded(&board, depth)
        } else {
            perft(&board, depth)
        };
        println!(
            "depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates
        );
    }

    let elapsed = started.elapsed();
    println!("elapsed_ms={}", elapsed.as_millis());
    Ok(())
}
