//! Castling eligibility.
//!
//! Computed once per board for each side from the unmoved king and rooks.
//! King-side and queen-side are independent and produce at most one move
//! each.

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::moves::chess_move::Move;
use crate::pieces::pawn_moves::pawn_attack_squares;
use crate::pieces::piece::{Piece, PieceKind};
use crate::player::player::calculate_attacks_on_tile;

#[derive(Debug, Clone, Copy)]
enum CastleSide {
    KingSide,
    QueenSide,
}

struct CastleLayout {
    side: CastleSide,
    king_start: Square,
    king_destination: Square,
    rook_start: Square,
    rook_destination: Square,
    /// Squares strictly between king and rook.
    between: &'static [Square],
    /// Squares the king crosses, destination included.
    transit: &'static [Square],
}

const WHITE_LAYOUTS: [CastleLayout; 2] = [
    CastleLayout {
        side: CastleSide::KingSide,
        king_start: 60,
        king_destination: 62,
        rook_start: 63,
        rook_destination: 61,
        between: &[61, 62],
        transit: &[61, 62],
    },
    CastleLayout {
        side: CastleSide::QueenSide,
        king_start: 60,
        king_destination: 58,
        rook_start: 56,
        rook_destination: 59,
        between: &[57, 58, 59],
        transit: &[59, 58],
    },
];

const BLACK_LAYOUTS: [CastleLayout; 2] = [
    CastleLayout {
        side: CastleSide::KingSide,
        king_start: 4,
        king_destination: 6,
        rook_start: 7,
        rook_destination: 5,
        between: &[5, 6],
        transit: &[5, 6],
    },
    CastleLayout {
        side: CastleSide::QueenSide,
        king_start: 4,
        king_destination: 2,
        rook_start: 0,
        rook_destination: 3,
        between: &[1, 2, 3],
        transit: &[3, 2],
    },
];

pub(crate) fn calculate_king_castles(
    board: &Board,
    king: &Piece,
    opponent_moves: &[Move],
    in_check: bool,
) -> Vec<Move> {
    let mut castles = Vec::new();
    if in_check || !king.is_first_move() {
        return castles;
    }

    let layouts = match king.alliance() {
        Alliance::White => &WHITE_LAYOUTS,
        Alliance::Black => &BLACK_LAYOUTS,
    };

    for layout in layouts {
        if king.position() != layout.king_start {
            continue;
        }
        let Some(rook) = board.piece_at(layout.rook_start) else {
            continue;
        };
        if !rook.kind().is_rook()
            || rook.alliance() != king.alliance()
            || !rook.is_first_move()
        {
            continue;
        }
        if layout.between.iter().any(|sq| board.is_occupied(*sq)) {
            continue;
        }
        let attacker = king.alliance().opponent();
        if layout
            .transit
            .iter()
            .any(|sq| is_tile_attacked(board, *sq, attacker, opponent_moves))
        {
            continue;
        }

        castles.push(match layout.side {
            CastleSide::KingSide => Move::KingSideCastle {
                king: *king,
                destination: layout.king_destination,
                rook: *rook,
                rook_destination: layout.rook_destination,
            },
            CastleSide::QueenSide => Move::QueenSideCastle {
                king: *king,
                destination: layout.king_destination,
                rook: *rook,
                rook_destination: layout.rook_destination,
            },
        });
    }

    castles
}

/// Whether `attacker` could capture on `square`. Pawns are checked by
/// their diagonals because they generate no move onto an empty square they
/// guard.
pub(crate) fn is_tile_attacked(
    board: &Board,
    square: Square,
    attacker: Alliance,
    attacker_moves: &[Move],
) -> bool {
    !calculate_attacks_on_tile(square, attacker_moves).is_empty()
        || board
            .active_pieces(attacker)
            .iter()
            .filter(|piece| piece.kind() == PieceKind::Pawn)
            .any(|pawn| pawn_attack_squares(pawn).any(|target| target == square))
}
