//! Immutable board snapshot.
//!
//! A `Board` is only produced by `BoardBuilder::build`, which derives the
//! tiles, active pieces, both players' move sets and the side to move in one
//! step. Nothing on a built board changes afterward; every move yields a new
//! board.

use std::fmt;

use crate::board::alliance::Alliance;
use crate::board::board_builder::BoardBuilder;
use crate::board::board_utils::{checked_square, Square, NUM_TILES, NUM_TILES_PER_ROW};
use crate::board::tile::Tile;
use crate::errors::ChessResult;
use crate::moves::chess_move::Move;
use crate::pieces::piece::{Piece, PieceKind};
use crate::player::player::{Player, PlayerState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) tiles: [Tile; NUM_TILES],
    pub(crate) white_pieces: Vec<Piece>,
    pub(crate) black_pieces: Vec<Piece>,
    // Indexed by `Alliance::index`.
    pub(crate) players: [PlayerState; 2],
    pub(crate) side_to_move: Alliance,
    pub(crate) en_passant_pawn: Option<Piece>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position with White to move.
    pub fn standard_initial() -> ChessResult<Board> {
        let mut builder = BoardBuilder::new(Alliance::White);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as Square;
            builder
                .set_piece(Piece::new(*kind, Alliance::Black, file))
                .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 8 + file))
                .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 48 + file))
                .set_piece(Piece::new(*kind, Alliance::White, 56 + file));
        }
        builder.build()
    }

    #[inline]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square as usize]
    }

    /// Like `tile`, for indices that come from outside the engine.
    pub fn tile_at(&self, coordinate: i16) -> ChessResult<&Tile> {
        checked_square(coordinate).map(|square| self.tile(square))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_occupied()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    /// The pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    #[inline]
    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        &self.players[alliance.index()]
    }

    /// White's legal moves followed by Black's.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.players[Alliance::White.index()]
            .legal_moves
            .iter()
            .chain(self.players[Alliance::Black.index()].legal_moves.iter())
    }
}

/// 8x8 dump, one right-aligned token per square, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile.to_string())?;
            if (index + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::board::alliance::Alliance;
    use crate::pieces::piece::PieceKind;

    #[test]
    fn standard_initial_layout() {
        let board = Board::standard_initial().expect("standard board should build");
        assert_eq!(board.white_pieces().len(), 16);
        assert_eq!(board.black_pieces().len(), 16);
        assert_eq!(board.side_to_move(), Alliance::White);
        assert!(board.en_passant_pawn().is_none());

        let king = board.piece_at(60).expect("e1 should hold a piece");
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.alliance(), Alliance::White);
        let queen = board.piece_at(3).expect("d8 should hold a piece");
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.alliance(), Alliance::Black);
        for square in 16..48 {
            assert!(!board.is_occupied(square));
        }
    }

    #[test]
    fn text_dump_is_eight_rows_of_eight_tokens() {
        let board = Board::standard_initial().expect("standard board should build");
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "  r  n  b  q  k  b  n  r");
        assert_eq!(rows[3], "  -  -  -  -  -  -  -  -");
        assert_eq!(rows[7], "  R  N  B  Q  K  B  N  R");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn tile_at_rejects_out_of_range() {
        let board = Board::standard_initial().expect("standard board should build");
        assert!(board.tile_at(64).is_err());
        assert!(board.tile_at(-1).is_err());
        assert!(board.tile_at(0).expect("a8 is on the board").is_occupied());
    }

    #[test]
    fn all_legal_moves_concatenates_both_sides() {
        let board = Board::standard_initial().expect("standard board should build");
        assert_eq!(board.all_legal_moves().count(), 40);
        let first_black = board
            .all_legal_moves()
            .position(|mv| mv.moved_piece().map(|p| p.alliance()) == Some(Alliance::Black))
            .expect("black moves should be present");
        assert_eq!(first_black, 20);
    }
}
