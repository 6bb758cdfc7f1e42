//! Players: legality, check, checkmate and stalemate.
//!
//! Each board stores one `PlayerState` per alliance, derived when the board
//! is built. `Player` is a borrowed view pairing a board with an alliance;
//! `opponent()` is simply the sibling view over the same board, so there is
//! no reference cycle between the two sides.
//!
//! `make_move` applies a move and then re-derives attacks on the resulting
//! board to reject moves that leave the mover's king attacked. Checkmate
//! and stalemate probe every legal move that way.

use std::fmt;

use tracing::debug;

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::player::castling::calculate_king_castles;
use crate::player::move_transition::{MoveStatus, MoveTransition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayerState {
    pub(crate) king: Piece,
    /// Pseudo-legal moves plus any legal castles.
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) king_castles: Vec<Move>,
    pub(crate) in_check: bool,
}

impl PlayerState {
    /// The single king of `alliance`. Zero or several kings is an invalid
    /// position.
    pub(crate) fn establish_king(pieces: &[Piece], alliance: Alliance) -> ChessResult<Piece> {
        let mut kings = pieces.iter().filter(|piece| piece.kind().is_king());
        match (kings.next(), kings.next()) {
            (Some(king), None) => Ok(*king),
            _ => Err(ChessError::InvalidPosition { alliance }),
        }
    }

    /// Placeholder used while the board's move sets are being generated.
    pub(crate) fn pending(king: Piece) -> Self {
        Self {
            king,
            legal_moves: Vec::new(),
            king_castles: Vec::new(),
            in_check: false,
        }
    }

    pub(crate) fn new(
        board: &Board,
        king: Piece,
        standard_moves: &[Move],
        opponent_moves: &[Move],
    ) -> Self {
        let in_check = !calculate_attacks_on_tile(king.position(), opponent_moves).is_empty();
        let king_castles = calculate_king_castles(board, &king, opponent_moves, in_check);
        let mut legal_moves = Vec::with_capacity(standard_moves.len() + king_castles.len());
        legal_moves.extend_from_slice(standard_moves);
        legal_moves.extend(king_castles.iter().cloned());
        Self {
            king,
            legal_moves,
            king_castles,
            in_check,
        }
    }
}

/// Moves among `moves` that capture on `square`.
pub fn calculate_attacks_on_tile(square: Square, moves: &[Move]) -> Vec<&Move> {
    moves
        .iter()
        .filter(|mv| mv.destination() == Some(square) && mv.covers_destination())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Self { board, alliance }
    }

    fn state(&self) -> &'a PlayerState {
        self.board.player_state(self.alliance)
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn king(&self) -> &'a Piece {
        &self.state().king
    }

    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state().legal_moves
    }

    pub fn king_castles(&self) -> &'a [Move] {
        &self.state().king_castles
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opponent())
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.state().in_check
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Legal moves that `make_move` would accept.
    pub fn safe_moves(&self) -> Vec<&'a Move> {
        self.legal_moves()
            .iter()
            .filter(|mv| matches!(self.attempt(mv), Ok(Ok(_))))
            .collect()
    }

    fn has_escape_moves(&self) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| matches!(self.attempt(mv), Ok(Ok(_))))
    }

    /// Apply `mv` for this player.
    ///
    /// Rejections are reported through the transition's status together
    /// with the unchanged board. `Err` is reserved for structural failures
    /// while building the resulting position.
    pub fn make_move(&self, mv: &Move) -> ChessResult<MoveTransition> {
        match self.attempt(mv)? {
            Ok(next) => Ok(MoveTransition::new(next, mv.clone(), MoveStatus::Done)),
            Err(status) => {
                debug!(player = %self.alliance, mv = %mv, %status, "move rejected");
                Ok(MoveTransition::new(self.board.clone(), mv.clone(), status))
            }
        }
    }

    pub(crate) fn attempt(&self, mv: &Move) -> ChessResult<Result<Board, MoveStatus>> {
        if !self.is_move_legal(mv) {
            return Ok(Err(MoveStatus::IllegalMove));
        }

        let transition_board = mv.execute(self.board)?;
        let current = transition_board.current_player();
        let king_square = current.opponent().king().position();
        if !calculate_attacks_on_tile(king_square, current.legal_moves()).is_empty() {
            return Ok(Err(MoveStatus::LeavesPlayerInCheck));
        }

        Ok(Ok(transition_board))
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alliance)
    }
}
