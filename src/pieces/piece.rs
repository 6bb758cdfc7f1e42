//! Immutable piece values and per-kind move dispatch.
//!
//! A piece is a plain `Copy` value. Moving it produces a new piece at the
//! destination with the first-move flag cleared; nothing is mutated.

use std::fmt;

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::moves::chess_move::Move;
use crate::pieces::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

/// Piece kind (alliance is stored separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// One-letter display tag.
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Square,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Square) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move: true,
        }
    }

    pub const fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: Square,
        first_move: bool,
    ) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.kind.value()
    }

    /// The same piece standing on `destination`, marked as moved.
    pub const fn moved_to(&self, destination: Square) -> Self {
        Self::with_first_move(self.kind, self.alliance, destination, false)
    }

    /// The piece a pawn of this alliance becomes on the far rank.
    pub const fn promotion_piece(&self, destination: Square) -> Self {
        Self::with_first_move(PieceKind::Queen, self.alliance, destination, false)
    }

    /// Pseudo-legal moves for this piece on `board`, ignoring self-check.
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => pawn_moves::generate_pawn_moves(self, board),
            PieceKind::Knight => knight_moves::generate_knight_moves(self, board),
            PieceKind::Bishop => bishop_moves::generate_bishop_moves(self, board),
            PieceKind::Rook => rook_moves::generate_rook_moves(self, board),
            PieceKind::Queen => queen_moves::generate_queen_moves(self, board),
            PieceKind::King => king_moves::generate_king_moves(self, board),
        }
    }
}

/// Uppercase tag for White, lowercase for Black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind.tag();
        match self.alliance {
            Alliance::White => write!(f, "{tag}"),
            Alliance::Black => write!(f, "{}", tag.to_ascii_lowercase()),
        }
    }
}
