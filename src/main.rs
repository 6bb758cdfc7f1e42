//! Terminal move-entry driver.
//!
//! Reads moves as origin/destination pairs (`e2e4`) from stdin, applies them
//! for the side to move and prints the resulting board and status.
//!
//! Usage:
//! `cargo run --bin tile_chess -- --log-level debug`

use std::io::{self, BufRead, Write};

use tile_chess::board::board::Board;
use tile_chess::board::board_utils::algebraic_to_square;
use tile_chess::errors::{ChessError, ChessResult};
use tile_chess::moves::chess_move::Move;
use tile_chess::moves::move_factory::MoveFactory;
use tracing::Level;

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

fn parse_move_text(board: &Board, text: &str) -> ChessResult<Move> {
    let (Some(from), Some(to)) = (text.get(..2), text.get(2..)) else {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    };
    let from = algebraic_to_square(from)?;
    let to = algebraic_to_square(to)?;
    Ok(MoveFactory::create_move(board, from, to))
}

fn print_position(board: &Board) {
    println!("{board}");
    let player = board.current_player();
    if player.is_in_check_mate() {
        println!("{} is checkmated", player);
    } else if player.is_in_stale_mate() {
        println!("{} is stalemated", player);
    } else if player.is_in_check() {
        println!("{} to move (in check)", player);
    } else {
        println!("{} to move", player);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(parse_arg_level("--log-level", Level::WARN))
        .with_writer(io::stderr)
        .init();

    let mut board = Board::standard_initial()?;
    print_position(&board);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        match text {
            "" => continue,
            "quit" | "exit" => break,
            "moves" => {
                let player = board.current_player();
                let tokens: Vec<String> =
                    player.safe_moves().iter().map(|mv| mv.to_string()).collect();
                println!("{}", tokens.join(" "));
                continue;
            }
            _ => {}
        }

        let mv = match parse_move_text(&board, text) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if mv.is_null() {
            println!("no legal move matches {text}");
            continue;
        }

        let transition = board.current_player().make_move(&mv)?;
        let status = transition.move_status();
        if status.is_done() {
            println!("{mv}");
            board = transition.into_board();
            print_position(&board);
        } else {
            println!("{mv}: {status}");
        }
        io::stdout().flush()?;
    }

    Ok(())
}
