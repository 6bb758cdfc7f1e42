use crate::board::board::Board;
use crate::board::board_utils::{Square, A_FILE, H_FILE};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::pieces::sliding_moves::generate_sliding_moves;

pub const ROOK_VECTORS: [i8; 4] = [-8, -1, 1, 8];

pub fn generate_rook_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    generate_sliding_moves(piece, board, &ROOK_VECTORS, is_rook_excluded)
}

pub fn is_rook_excluded(square: Square, offset: i8) -> bool {
    (A_FILE[square as usize] && offset == -1) || (H_FILE[square as usize] && offset == 1)
}
