use crate::board::board::Board;
use crate::board::board_utils::{Square, A_FILE, B_FILE, G_FILE, H_FILE};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::pieces::sliding_moves::generate_stepping_moves;

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn generate_knight_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    generate_stepping_moves(piece, board, &KNIGHT_OFFSETS, is_knight_excluded)
}

fn is_knight_excluded(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (A_FILE[sq] && matches!(offset, -17 | -10 | 6 | 15))
        || (B_FILE[sq] && matches!(offset, -10 | 6))
        || (G_FILE[sq] && matches!(offset, -6 | 10))
        || (H_FILE[sq] && matches!(offset, -15 | -6 | 10 | 17))
}
