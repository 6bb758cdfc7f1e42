//! Errors used throughout the rules engine.
//!
//! Only structurally invalid input ends up here. An illegal move request is
//! an ordinary outcome and is reported through `MoveStatus` instead.

use thiserror::Error;

use crate::board::alliance::Alliance;

/// Unified error type for the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The builder was asked to finalize a position without a king for
    /// `alliance`. This is a caller bug, never a normal-play outcome.
    #[error("invalid position: no {alliance} king on the board")]
    InvalidPosition { alliance: Alliance },

    /// `Move::Null` is a lookup sentinel and cannot be applied.
    #[error("cannot execute the null move")]
    NullMoveExecution,

    /// A square index outside `0..64`.
    #[error("invalid square index: {0} (must be 0-63)")]
    InvalidSquare(i16),

    /// Text that does not name a square, e.g. `z9`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

/// Result alias for engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
