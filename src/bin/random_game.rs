//! Plays one game of uniformly random moves from the starting position.
//!
//! Usage:
//! `cargo run --bin random_game -- --seed 7 --max-plies 120`

use tile_chess::board::board::Board;
use tile_chess::utils::random_game::{play_random_game, RandomGameConfig};
use tracing::Level;

fn parse_arg<T: std::str::FromStr>(flag: &str) -> Option<T> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return Some(v);
            }
        }
    }
    None
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(parse_arg::<Level>("--log-level").unwrap_or(Level::WARN))
        .with_writer(std::io::stderr)
        .init();

    let defaults = RandomGameConfig::default();
    let config = RandomGameConfig {
        max_plies: parse_arg("--max-plies").unwrap_or(defaults.max_plies),
        seed: parse_arg("--seed"),
    };

    let report = play_random_game(Board::standard_initial()?, &config)?;
    for (turn, pair) in report.moves.chunks(2).enumerate() {
        println!("{}. {}", turn + 1, pair.join(" "));
    }
    println!("{}", report.final_board);
    println!("result: {}", report.outcome);
    Ok(())
}
