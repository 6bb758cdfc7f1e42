//! Perft: count the leaf positions reachable in exactly `depth` plies.
//!
//! Used to check the rules against published node counts. Only moves that
//! `make_move` accepts are followed.

use std::thread;

use crate::board::board::Board;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (mv, next) in legal_transitions(board)? {
        perft_recurse(&mv, &next, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts as `perft`, with one thread per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(board, depth);
    }

    let root = legal_transitions(board)?;
    let mut handles = Vec::with_capacity(root.len());
    for (mv, next) in root {
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(&mv, &next, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().map_err(|_| ChessError::WorkerPanicked)?;
        result?;
        total.merge(local);
    }
    Ok(total)
}

fn legal_transitions(board: &Board) -> ChessResult<Vec<(Move, Board)>> {
    let player = board.current_player();
    let mut out = Vec::with_capacity(player.legal_moves().len());
    for mv in player.legal_moves() {
        if let Ok(next) = player.attempt(mv)? {
            out.push((mv.clone(), next));
        }
    }
    Ok(out)
}

fn perft_recurse(
    mv: &Move,
    board_after_move: &Board,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_attack() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castling_move() {
            counts.castles += 1;
        }
        if mv.is_promotion() {
            counts.promotions += 1;
        }
        let defender = board_after_move.current_player();
        if defender.is_in_check() {
            counts.checks += 1;
            if defender.is_in_check_mate() {
                counts.checkmates += 1;
            }
        }
        return Ok(());
    }

    for (child, next) in legal_transitions(board_after_move)? {
        perft_recurse(&child, &next, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}

/// Divide: per-root-move node counts, keyed by the move token.
pub fn perft_divide(board: &Board, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for (mv, next) in legal_transitions(board)? {
        let nodes = perft(&next, depth - 1)?.nodes;
        out.push((mv.to_string(), nodes));
    }
    Ok(out)
}
