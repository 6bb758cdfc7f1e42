//! The two sides of the game.
//!
//! An alliance knows which way its pawns travel along the row-major square
//! index and which rank they promote on.

use std::fmt;

use crate::board::board_utils::{FIRST_RANK, EIGHTH_RANK, SECOND_RANK, SEVENTH_RANK};
use crate::board::board_utils::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Rank-step multiplier: White moves toward index 0, Black toward 63.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Alliance::Black)
    }

    /// True when a pawn of this alliance landing on `square` must promote.
    #[inline]
    pub fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[square as usize],
            Alliance::Black => FIRST_RANK[square as usize],
        }
    }

    /// True when `square` is on the rank this alliance's pawns start from.
    #[inline]
    pub fn is_pawn_start_square(self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_RANK[square as usize],
            Alliance::Black => SEVENTH_RANK[square as usize],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Alliance;

    #[test]
    fn directions_point_toward_the_opponent() {
        assert_eq!(Alliance::White.direction(), -1);
        assert_eq!(Alliance::Black.direction(), 1);
        assert_eq!(Alliance::White.opponent(), Alliance::Black);
    }

    #[test]
    fn promotion_ranks_are_the_far_back_ranks() {
        // a8 and h8 sit on row 0, a1 and h1 on row 7.
        assert!(Alliance::White.is_pawn_promotion_square(0));
        assert!(Alliance::White.is_pawn_promotion_square(7));
        assert!(!Alliance::White.is_pawn_promotion_square(56));
        assert!(Alliance::Black.is_pawn_promotion_square(63));
        assert!(!Alliance::Black.is_pawn_promotion_square(3));
    }

    #[test]
    fn start_ranks() {
        assert!(Alliance::White.is_pawn_start_square(52));
        assert!(Alliance::Black.is_pawn_start_square(12));
        assert!(!Alliance::Black.is_pawn_start_square(52));
    }
}
