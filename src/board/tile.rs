//! One square of the board: empty, or holding exactly one piece.

use std::fmt;

use crate::board::board_utils::{Square, NUM_TILES};
use crate::pieces::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty { square: Square },
    Occupied { piece: Piece },
}

/// Every empty tile, shared by all boards.
pub const EMPTY_TILES: [Tile; NUM_TILES] = generate_empty_tiles();

const fn generate_empty_tiles() -> [Tile; NUM_TILES] {
    let mut table = [Tile::Empty { square: 0 }; NUM_TILES];
    let mut sq = 0usize;
    while sq < NUM_TILES {
        table[sq] = Tile::Empty { square: sq as Square };
        sq += 1;
    }
    table
}

impl Tile {
    /// Tile for `square`, occupied by `piece` when one is given.
    #[inline]
    pub fn create(square: Square, piece: Option<Piece>) -> Tile {
        match piece {
            Some(piece) => Tile::Occupied { piece },
            None => EMPTY_TILES[square as usize],
        }
    }

    #[inline]
    pub fn square(&self) -> Square {
        match self {
            Tile::Empty { square } => *square,
            Tile::Occupied { piece } => piece.position(),
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied { .. })
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty { .. } => None,
            Tile::Occupied { piece } => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty { .. } => write!(f, "-"),
            Tile::Occupied { piece } => write!(f, "{piece}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tile, EMPTY_TILES};
    use crate::board::alliance::Alliance;
    use crate::pieces::piece::{Piece, PieceKind};

    #[test]
    fn empty_tiles_cover_every_square() {
        for (index, tile) in EMPTY_TILES.iter().enumerate() {
            assert_eq!(tile.square() as usize, index);
            assert!(!tile.is_occupied());
            assert!(tile.piece().is_none());
        }
    }

    #[test]
    fn occupied_tile_wraps_the_piece() {
        let rook = Piece::new(PieceKind::Rook, Alliance::Black, 7);
        let tile = Tile::create(7, Some(rook));
        assert!(tile.is_occupied());
        assert_eq!(tile.piece(), Some(&rook));
        assert_eq!(tile.square(), 7);
        assert_eq!(tile.to_string(), "r");
        assert_eq!(Tile::create(9, None).to_string(), "-");
    }
}
