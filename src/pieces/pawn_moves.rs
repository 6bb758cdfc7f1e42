//! Pawn move generation.
//!
//! Offsets `{7, 8, 9, 16}` are scaled by the alliance direction. The
//! diagonal offsets need the alliance-specific edge exclusions: for White
//! `-7` heads north-east and `-9` north-west, for Black `+7` heads
//! south-west and `+9` south-east.

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::{offset_square, Square, A_FILE, H_FILE};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;

const PAWN_OFFSETS: [i8; 4] = [7, 8, 9, 16];

pub fn generate_pawn_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let alliance = piece.alliance();
    let from = piece.position();
    let mut moves = Vec::new();

    for offset in PAWN_OFFSETS {
        let Some(to) = offset_square(from, alliance.direction() * offset) else {
            continue;
        };
        let promotes = alliance.is_pawn_promotion_square(to);

        match offset {
            8 => {
                if !board.is_occupied(to) {
                    moves.push(
                        Move::Pawn {
                            piece: *piece,
                            destination: to,
                        }
                        .promoting_if(promotes),
                    );
                }
            }
            16 => {
                if !piece.is_first_move() || !alliance.is_pawn_start_square(from) {
                    continue;
                }
                let Some(behind) = offset_square(from, alliance.direction() * 8) else {
                    continue;
                };
                if !board.is_occupied(behind) && !board.is_occupied(to) {
                    moves.push(Move::PawnJump {
                        piece: *piece,
                        destination: to,
                    });
                }
            }
            _ => {
                if is_diagonal_excluded(from, alliance, offset) {
                    continue;
                }
                if let Some(mv) = diagonal_move(piece, board, to, offset) {
                    moves.push(mv.promoting_if(promotes));
                }
            }
        }
    }

    moves
}

/// Squares this pawn attacks diagonally, whether or not they are occupied.
pub fn pawn_attack_squares(piece: &Piece) -> impl Iterator<Item = Square> + '_ {
    [7i8, 9].into_iter().filter_map(move |offset| {
        if is_diagonal_excluded(piece.position(), piece.alliance(), offset) {
            None
        } else {
            offset_square(piece.position(), piece.alliance().direction() * offset)
        }
    })
}

fn is_diagonal_excluded(from: Square, alliance: Alliance, offset: i8) -> bool {
    let on_a = A_FILE[from as usize];
    let on_h = H_FILE[from as usize];
    match offset {
        7 => (on_a && alliance.is_black()) || (on_h && alliance.is_white()),
        9 => (on_a && alliance.is_white()) || (on_h && alliance.is_black()),
        _ => false,
    }
}

fn diagonal_move(piece: &Piece, board: &Board, to: Square, offset: i8) -> Option<Move> {
    if let Some(occupant) = board.piece_at(to) {
        if occupant.alliance() == piece.alliance() {
            return None;
        }
        return Some(Move::PawnAttack {
            piece: *piece,
            destination: to,
            attacked: *occupant,
        });
    }

    let en_passant = board.en_passant_pawn()?;
    if en_passant.alliance() == piece.alliance() {
        return None;
    }
    // The double-stepped pawn sits beside us, on the file we are moving to.
    let direction = piece.alliance().direction();
    let lateral = if offset == 7 { -direction } else { direction };
    if offset_square(piece.position(), lateral) != Some(en_passant.position()) {
        return None;
    }
    Some(Move::PawnEnPassantAttack {
        piece: *piece,
        destination: to,
        attacked: *en_passant,
    })
}
