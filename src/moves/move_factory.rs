//! Lookup of a move by its origin and destination squares, as a UI or
//! terminal driver would request it.

use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::moves::chess_move::Move;

pub struct MoveFactory;

impl MoveFactory {
    /// The first legal move on `board` (either side) from `current` to
    /// `destination`, or `Move::Null` when there is none.
    pub fn create_move(board: &Board, current: Square, destination: Square) -> Move {
        board
            .all_legal_moves()
            .find(|mv| {
                mv.current_square() == Some(current) && mv.destination() == Some(destination)
            })
            .cloned()
            .unwrap_or(Move::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::MoveFactory;
    use crate::board::board::Board;
    use crate::moves::chess_move::Move;

    #[test]
    fn finds_moves_for_either_side() {
        let board = Board::standard_initial().expect("standard board should build");
        let white = MoveFactory::create_move(&board, 52, 36);
        assert!(matches!(white, Move::PawnJump { destination: 36, .. }));
        let black = MoveFactory::create_move(&board, 1, 18);
        assert!(matches!(black, Move::Major { destination: 18, .. }));
    }

    #[test]
    fn unmatched_pair_is_the_null_move() {
        let board = Board::standard_initial().expect("standard board should build");
        assert_eq!(MoveFactory::create_move(&board, 52, 28), Move::Null);
        assert_eq!(MoveFactory::create_move(&board, 30, 22), Move::Null);
    }
}
