//! Perft runner for the standard starting position.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 4 --threaded`

use std::time::Instant;

use tile_chess::board::board::Board;
use tile_chess::utils::perft::{perft, perft_divide, perft_multi_threaded};
use tracing::Level;

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

fn parse_arg_level(flag: &str, default: Level) -> Level {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<Level>() {
                return v;
            }
        }
    }
    default
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(parse_arg_level("--log-level", Level::WARN))
        .with_writer(std::io::stderr)
        .init();

    let depth = parse_arg_u8("--depth", 3);
    let board = Board::standard_initial()?;

    if has_flag("--divide") {
        for (token, nodes) in perft_divide(&board, depth)? {
            println!("{token}: {nodes}");
        }
    }

    let start = Instant::now();
    let counts = if has_flag("--threaded") {
        perft_multi_threaded(&board, depth)?
    } else {
        perft(&board, depth)?
    };
    let elapsed_ms = start.elapsed().as_millis();
    println!(
        "depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={} elapsed_ms={elapsed_ms}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
    );
    Ok(())
}
