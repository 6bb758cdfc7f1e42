use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::moves::chess_move::Move;
use crate::pieces::bishop_moves::is_bishop_excluded;
use crate::pieces::piece::Piece;
use crate::pieces::rook_moves::is_rook_excluded;
use crate::pieces::sliding_moves::generate_sliding_moves;

/// Union of the bishop and rook vectors.
pub const QUEEN_VECTORS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_queen_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    generate_sliding_moves(piece, board, &QUEEN_VECTORS, is_queen_excluded)
}

pub fn is_queen_excluded(square: Square, offset: i8) -> bool {
    is_bishop_excluded(square, offset) || is_rook_excluded(square, offset)
}
