//! Single-step king moves. Castling is derived by the player layer, which
//! needs the opponent's moves.

use crate::board::board::Board;
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::pieces::queen_moves::{is_queen_excluded, QUEEN_VECTORS};
use crate::pieces::sliding_moves::generate_stepping_moves;

pub fn generate_king_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    generate_stepping_moves(piece, board, &QUEEN_VECTORS, is_queen_excluded)
}
