//! Shared walkers for the offset-driven pieces.
//!
//! Every non-pawn piece is described by a list of offsets on the row-major
//! index plus a predicate that rejects an offset from a given square when
//! it would wrap around a board edge. Sliders repeat an offset until they
//! leave the board, hit an edge or hit a piece; knights and kings take one
//! step.

use crate::board::board::Board;
use crate::board::board_utils::{offset_square, Square};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;

/// `true` when `offset` from `square` would wrap onto another rank.
pub type EdgeExclusion = fn(square: Square, offset: i8) -> bool;

pub fn generate_sliding_moves(
    piece: &Piece,
    board: &Board,
    vectors: &[i8],
    is_excluded: EdgeExclusion,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for &offset in vectors {
        let mut current = piece.position();
        loop {
            if is_excluded(current, offset) {
                break;
            }
            let Some(candidate) = offset_square(current, offset) else {
                break;
            };
            if !push_candidate(piece, board, candidate, &mut moves) {
                break;
            }
            current = candidate;
        }
    }

    moves
}

pub fn generate_stepping_moves(
    piece: &Piece,
    board: &Board,
    offsets: &[i8],
    is_excluded: EdgeExclusion,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for &offset in offsets {
        if is_excluded(piece.position(), offset) {
            continue;
        }
        if let Some(candidate) = offset_square(piece.position(), offset) {
            push_candidate(piece, board, candidate, &mut moves);
        }
    }

    moves
}

/// Emit a quiet move or a capture onto `candidate`. Returns whether the
/// square was empty, i.e. whether a slider may keep walking.
fn push_candidate(piece: &Piece, board: &Board, candidate: Square, out: &mut Vec<Move>) -> bool {
    match board.piece_at(candidate) {
        None => {
            out.push(Move::Major {
                piece: *piece,
                destination: candidate,
            });
            true
        }
        Some(occupant) => {
            if occupant.alliance() != piece.alliance() {
                out.push(Move::MajorAttack {
                    piece: *piece,
                    destination: candidate,
                    attacked: *occupant,
                });
            }
            false
        }
    }
}
