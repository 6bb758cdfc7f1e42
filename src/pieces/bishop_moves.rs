use crate::board::board::Board;
use crate::board::board_utils::{Square, A_FILE, H_FILE};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::pieces::sliding_moves::generate_sliding_moves;

pub const BISHOP_VECTORS: [i8; 4] = [-9, -7, 7, 9];

pub fn generate_bishop_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    generate_sliding_moves(piece, board, &BISHOP_VECTORS, is_bishop_excluded)
}

pub fn is_bishop_excluded(square: Square, offset: i8) -> bool {
    (A_FILE[square as usize] && (offset == -9 || offset == 7))
        || (H_FILE[square as usize] && (offset == -7 || offset == 9))
}

#[cfg(test)]
mod tests {
    use crate::board::alliance::Alliance;
    use crate::board::board_builder::BoardBuilder;
    use crate::moves::chess_move::Move;
    use crate::pieces::piece::{Piece, PieceKind};

    #[test]
    fn bishop_on_a_corner_diagonal_does_not_wrap() {
        // Bishop on a1 (56) sees the long diagonal up to h8 (7) only.
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 0))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::White, 56));
        let board = builder.build().expect("kings are present");
        let bishop = board.piece_at(56).expect("bishop on a1");
        let moves = bishop.legal_moves(&board);

        let destinations: Vec<u8> = moves.iter().filter_map(Move::destination).collect();
        assert_eq!(destinations, vec![49, 42, 35, 28, 21, 14, 7]);
    }

    #[test]
    fn bishop_stops_on_capture_and_before_friend() {
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 7))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::White, 35))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 17))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 44));
        let board = builder.build().expect("kings are present");
        let bishop = board.piece_at(35).expect("bishop on d4");
        let moves = bishop.legal_moves(&board);

        assert!(moves.iter().any(|m| m.is_attack() && m.destination() == Some(17)));
        assert!(!moves.iter().any(|m| m.destination() == Some(8)));
        assert!(!moves.iter().any(|m| m.destination() == Some(44)));
        // 26 on the way to b6.
        assert!(moves.iter().any(|m| m.destination() == Some(26)));
    }
}
