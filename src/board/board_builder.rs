//! Staged construction of a `Board`.
//!
//! The builder only accumulates square -> piece assignments, the side to
//! move and an optional en-passant pawn. `build` performs every derivation
//! at once.

use std::collections::BTreeMap;

use tracing::trace;

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::{Square, NUM_TILES};
use crate::board::tile::{Tile, EMPTY_TILES};
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::player::player::PlayerState;

#[derive(Debug, Clone)]
pub struct BoardBuilder {
    config: BTreeMap<Square, Piece>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl BoardBuilder {
    pub fn new(next_move_maker: Alliance) -> Self {
        Self {
            config: BTreeMap::new(),
            next_move_maker,
            en_passant_pawn: None,
        }
    }

    /// Place `piece` on its own square, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.config.insert(piece.position(), piece);
        self
    }

    pub fn set_move_maker(&mut self, next_move_maker: Alliance) -> &mut Self {
        self.next_move_maker = next_move_maker;
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Derive tiles, active pieces, both players and the side to move.
    ///
    /// Fails with `InvalidPosition` when either alliance has no king.
    pub fn build(&self) -> ChessResult<Board> {
        let tiles = self.create_game_board()?;
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);
        let white_king = PlayerState::establish_king(&white_pieces, Alliance::White)?;
        let black_king = PlayerState::establish_king(&black_pieces, Alliance::Black)?;

        let mut board = Board {
            tiles,
            white_pieces,
            black_pieces,
            players: [
                PlayerState::pending(white_king),
                PlayerState::pending(black_king),
            ],
            side_to_move: self.next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
        };

        let white_moves = calculate_legal_moves(&board, &board.white_pieces);
        let black_moves = calculate_legal_moves(&board, &board.black_pieces);
        let white_player = PlayerState::new(&board, white_king, &white_moves, &black_moves);
        let black_player = PlayerState::new(&board, black_king, &black_moves, &white_moves);
        board.players = [white_player, black_player];

        trace!(
            white_pieces = board.white_pieces.len(),
            black_pieces = board.black_pieces.len(),
            white_moves = board.players[0].legal_moves.len(),
            black_moves = board.players[1].legal_moves.len(),
            side_to_move = %board.side_to_move,
            "built board"
        );

        Ok(board)
    }

    fn create_game_board(&self) -> ChessResult<[Tile; NUM_TILES]> {
        let mut tiles = EMPTY_TILES;
        for (square, piece) in &self.config {
            if *square as usize >= NUM_TILES {
                return Err(ChessError::InvalidSquare(*square as i16));
            }
            tiles[*square as usize] = Tile::create(*square, Some(*piece));
        }
        Ok(tiles)
    }
}

fn calculate_active_pieces(tiles: &[Tile], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

fn calculate_legal_moves(board: &Board, pieces: &[Piece]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for piece in pieces {
        moves.extend(piece.legal_moves(board));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::BoardBuilder;
    use crate::board::alliance::Alliance;
    use crate::errors::ChessError;
    use crate::pieces::piece::{Piece, PieceKind};

    #[test]
    fn missing_king_is_an_invalid_position() {
        let mut builder = BoardBuilder::new(Alliance::White);
        builder.set_piece(Piece::new(PieceKind::King, Alliance::White, 60));
        assert_eq!(
            builder.build(),
            Err(ChessError::InvalidPosition {
                alliance: Alliance::Black
            })
        );
    }

    #[test]
    fn second_king_of_one_colour_is_an_invalid_position() {
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 40))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4));
        assert_eq!(
            builder.build(),
            Err(ChessError::InvalidPosition {
                alliance: Alliance::White
            })
        );
    }

    #[test]
    fn later_assignment_replaces_earlier_on_the_same_square() {
        let mut builder = BoardBuilder::new(Alliance::Black);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, 20))
            .set_piece(Piece::new(PieceKind::Knight, Alliance::Black, 20));
        let board = builder.build().expect("kings are present");
        assert_eq!(board.white_pieces().len(), 1);
        assert_eq!(board.black_pieces().len(), 2);
        let knight = board.piece_at(20).expect("square 20 should be occupied");
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(board.side_to_move(), Alliance::Black);
    }

    #[test]
    fn off_board_piece_is_rejected() {
        let mut builder = BoardBuilder::new(Alliance::White);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 70));
        assert_eq!(builder.build(), Err(ChessError::InvalidSquare(70)));
    }

    #[test]
    fn en_passant_pawn_is_carried_onto_the_board() {
        let pawn = Piece::new(PieceKind::Pawn, Alliance::White, 36).moved_to(36);
        let mut builder = BoardBuilder::new(Alliance::Black);
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(pawn)
            .set_en_passant_pawn(pawn);
        let board = builder.build().expect("kings are present");
        assert_eq!(board.en_passant_pawn(), Some(&pawn));
    }
}
