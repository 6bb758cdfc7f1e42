//! Move variants.
//!
//! A move names the piece that moves, where it goes and, for captures, the
//! piece it removes. Moves carry no board; `Move::execute` takes the origin
//! board explicitly (see `move_execute`).
//!
//! Two moves are equal when they are the same variant over the same moved
//! piece (which includes its origin square), destination and captured
//! piece. Castles additionally compare their rook.

use std::fmt;

use crate::board::board_utils::{square_to_algebraic, Square};
use crate::pieces::piece::{Piece, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move by a non-pawn piece.
    Major { piece: Piece, destination: Square },
    /// Capture by a non-pawn piece.
    MajorAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Single-step pawn push.
    Pawn { piece: Piece, destination: Square },
    /// Diagonal pawn capture.
    PawnAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Pawn capture of a pawn that double-stepped on the previous ply. The
    /// captured pawn is not on `destination`.
    PawnEnPassantAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Double pawn push; the moved pawn becomes the en-passant pawn.
    PawnJump { piece: Piece, destination: Square },
    /// A pawn move or capture landing on the far rank.
    PawnPromotion { decorated: Box<Move> },
    KingSideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
    QueenSideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
    /// "No such move" sentinel returned by `MoveFactory`. Never executable.
    Null,
}

impl Move {
    /// Wrap `self` as a promotion when `piece` lands on its far rank.
    pub(crate) fn promoting_if(self, promote: bool) -> Move {
        if promote {
            Move::PawnPromotion {
                decorated: Box::new(self),
            }
        } else {
            self
        }
    }

    pub fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::MajorAttack { piece, .. }
            | Move::Pawn { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnJump { piece, .. } => Some(piece),
            Move::KingSideCastle { king, .. } | Move::QueenSideCastle { king, .. } => Some(king),
            Move::PawnPromotion { decorated } => decorated.moved_piece(),
            Move::Null => None,
        }
    }

    /// Origin square of the moved piece.
    pub fn current_square(&self) -> Option<Square> {
        self.moved_piece().map(Piece::position)
    }

    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Major { destination, .. }
            | Move::MajorAttack { destination, .. }
            | Move::Pawn { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::KingSideCastle { destination, .. }
            | Move::QueenSideCastle { destination, .. } => Some(*destination),
            Move::PawnPromotion { decorated } => decorated.destination(),
            Move::Null => None,
        }
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::MajorAttack { attacked, .. }
            | Move::PawnAttack { attacked, .. }
            | Move::PawnEnPassantAttack { attacked, .. } => Some(attacked),
            Move::PawnPromotion { decorated } => decorated.attacked_piece(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    pub fn is_castling_move(&self) -> bool {
        matches!(self, Move::KingSideCastle { .. } | Move::QueenSideCastle { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    pub fn is_en_passant(&self) -> bool {
        match self {
            Move::PawnEnPassantAttack { .. } => true,
            Move::PawnPromotion { decorated } => decorated.is_en_passant(),
            _ => false,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Whether this move can capture on its destination. Quiet pawn pushes
    /// are the only moves that reach a square without attacking it.
    pub(crate) fn covers_destination(&self) -> bool {
        match self {
            Move::Pawn { .. } | Move::PawnJump { .. } | Move::Null => false,
            Move::PawnPromotion { decorated } => decorated.covers_destination(),
            _ => true,
        }
    }

    pub fn castle_rook(&self) -> Option<&Piece> {
        match self {
            Move::KingSideCastle { rook, .. } | Move::QueenSideCastle { rook, .. } => Some(rook),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Major { piece, destination } => {
                write!(f, "{}{}", piece.kind(), square_to_algebraic(*destination))
            }
            Move::MajorAttack {
                piece, destination, ..
            } => write!(f, "{}x{}", piece.kind(), square_to_algebraic(*destination)),
            Move::Pawn { destination, .. } | Move::PawnJump { destination, .. } => {
                write!(f, "{}", square_to_algebraic(*destination))
            }
            Move::PawnAttack {
                piece, destination, ..
            } => write!(f, "{}x{}", origin_file(piece), square_to_algebraic(*destination)),
            Move::PawnEnPassantAttack {
                piece, destination, ..
            } => write!(
                f,
                "{}x{}e.p.",
                origin_file(piece),
                square_to_algebraic(*destination)
            ),
            Move::PawnPromotion { decorated } => write!(f, "{decorated}={}", PieceKind::Queen),
            Move::KingSideCastle { .. } => write!(f, "O-O"),
            Move::QueenSideCastle { .. } => write!(f, "O-O-O"),
            Move::Null => write!(f, "null"),
        }
    }
}

fn origin_file(piece: &Piece) -> char {
    square_to_algebraic(piece.position())
        .chars()
        .next()
        .unwrap_or('?')
}
