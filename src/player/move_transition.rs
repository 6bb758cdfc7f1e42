//! Outcome of asking a player to make a move.

use std::fmt;

use crate::board::board::Board;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Done,
    /// The move is not in the player's legal-move set.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// The resulting board, the move attempted and its status. On rejection the
/// board is the unchanged origin board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTransition {
    transition_board: Board,
    attempted_move: Move,
    move_status: MoveStatus,
}

impl MoveTransition {
    pub fn new(transition_board: Board, attempted_move: Move, move_status: MoveStatus) -> Self {
        Self {
            transition_board,
            attempted_move,
            move_status,
        }
    }

    pub fn transition_board(&self) -> &Board {
        &self.transition_board
    }

    pub fn into_board(self) -> Board {
        self.transition_board
    }

    pub fn attempted_move(&self) -> &Move {
        &self.attempted_move
    }

    pub fn move_status(&self) -> MoveStatus {
        self.move_status
    }
}
