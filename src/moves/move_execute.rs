//! Applying a move to its origin board.
//!
//! Execution never patches the origin: it copies every surviving piece into
//! a fresh `BoardBuilder`, places the landed piece (and the castling rook),
//! hands the move to the opponent and builds a new board. Only a double
//! pawn push records an en-passant pawn, so that eligibility lasts one ply.

use crate::board::board::Board;
use crate::board::board_builder::BoardBuilder;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;

impl Move {
    /// Build the board that results from playing this move on `board`.
    ///
    /// Fails with `NullMoveExecution` for `Move::Null`, and propagates any
    /// build error of the resulting position.
    pub fn execute(&self, board: &Board) -> ChessResult<Board> {
        let (Some(moved), Some(destination)) = (self.moved_piece(), self.destination()) else {
            return Err(ChessError::NullMoveExecution);
        };
        let mover = moved.alliance();
        let castle_rook = self.castle_rook();
        let captured = self.attacked_piece();

        let mut builder = BoardBuilder::new(mover.opponent());
        for piece in board.active_pieces(mover) {
            if piece != moved && Some(piece) != castle_rook {
                builder.set_piece(*piece);
            }
        }
        for piece in board.active_pieces(mover.opponent()) {
            if Some(piece) != captured {
                builder.set_piece(*piece);
            }
        }

        let landed = if self.is_promotion() {
            moved.promotion_piece(destination)
        } else {
            moved.moved_to(destination)
        };
        builder.set_piece(landed);

        match self {
            Move::KingSideCastle {
                rook,
                rook_destination,
                ..
            }
            | Move::QueenSideCastle {
                rook,
                rook_destination,
                ..
            } => {
                builder.set_piece(rook.moved_to(*rook_destination));
            }
            Move::PawnJump { .. } => {
                builder.set_en_passant_pawn(landed);
            }
            _ => {}
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::alliance::Alliance;
    use crate::board::board::Board;
    use crate::board::board_builder::BoardBuilder;
    use crate::errors::ChessError;
    use crate::moves::chess_move::Move;
    use crate::pieces::piece::{Piece, PieceKind};

    #[test]
    fn quiet_move_flips_side_and_vacates_origin() {
        let board = Board::standard_initial().expect("standard board should build");
        let knight = *board.piece_at(62).expect("g1 knight");
        let next = Move::Major { piece: knight, destination: 45 }
            .execute(&board)
            .expect("move should execute");

        assert_eq!(next.side_to_move(), Alliance::Black);
        assert!(!next.is_occupied(62));
        let landed = next.piece_at(45).expect("knight should land on f3");
        assert_eq!(landed.kind(), PieceKind::Knight);
        assert!(!landed.is_first_move());
        assert!(next.en_passant_pawn().is_none());
        // Origin board is untouched.
        assert!(board.is_occupied(62));
    }

    #[test]
    fn pawn_jump_records_the_en_passant_pawn() {
        let board = Board::standard_initial().expect("standard board should build");
        let pawn = *board.piece_at(52).expect("e2 pawn");
        let next = Move::PawnJump { piece: pawn, destination: 36 }
            .execute(&board)
            .expect("move should execute");
        let ep = next.en_passant_pawn().expect("jump should set en passant");
        assert_eq!(ep.position(), 36);
        assert_eq!(ep.alliance(), Alliance::White);
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_destination() {
        let jumper = Piece::new(PieceKind::Pawn, Alliance::Black, 11).moved_to(27);
        let attacker = Piece::new(PieceKind::Pawn, Alliance::White, 28).moved_to(28);
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(attacker)
            .set_piece(jumper)
            .set_en_passant_pawn(jumper);
        let board = builder.build().expect("kings are present");

        let next = Move::PawnEnPassantAttack {
            piece: attacker,
            destination: 19,
            attacked: jumper,
        }
        .execute(&board)
        .expect("en passant should execute");

        assert!(!next.is_occupied(27));
        assert!(!next.is_occupied(28));
        assert_eq!(next.piece_at(19).map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(next.black_pieces().len(), 1);
        assert!(next.en_passant_pawn().is_none());
    }

    #[test]
    fn castle_relocates_king_and_rook() {
        let king = Piece::new(PieceKind::King, Alliance::White, 60);
        let rook = Piece::new(PieceKind::Rook, Alliance::White, 56);
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(king)
            .set_piece(rook)
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4));
        let board = builder.build().expect("kings are present");

        let next = Move::QueenSideCastle {
            king,
            destination: 58,
            rook,
            rook_destination: 59,
        }
        .execute(&board)
        .expect("castle should execute");

        assert_eq!(next.piece_at(58).map(|p| p.kind()), Some(PieceKind::King));
        assert_eq!(next.piece_at(59).map(|p| p.kind()), Some(PieceKind::Rook));
        assert!(!next.is_occupied(56));
        assert!(!next.is_occupied(60));
        assert!(next.white_pieces().iter().all(|p| !p.is_first_move()));
    }

    #[test]
    fn promotion_places_a_queen() {
        let pawn = Piece::new(PieceKind::Pawn, Alliance::Black, 51).moved_to(51);
        let mut builder = BoardBuilder::new(Alliance::Black);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(pawn);
        let board = builder.build().expect("kings are present");

        let next = Move::Pawn { piece: pawn, destination: 59 }
            .promoting_if(true)
            .execute(&board)
            .expect("promotion should execute");
        let queen = next.piece_at(59).expect("d1 should be occupied");
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.alliance(), Alliance::Black);
        assert!(!next
            .black_pieces()
            .iter()
            .any(|p| p.kind() == PieceKind::Pawn));
    }

    #[test]
    fn null_move_cannot_execute() {
        let board = Board::standard_initial().expect("standard board should build");
        assert_eq!(Move::Null.execute(&board), Err(ChessError::NullMoveExecution));
    }
}
