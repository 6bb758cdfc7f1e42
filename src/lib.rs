//! Crate root module declarations for the tile chess rules engine.
//!
//! Exposes the board model, per-piece move generation, move execution,
//! player legality checks and the perft/random-game utilities so binaries,
//! benches and tests can import stable module paths.

pub mod errors;

pub mod board {
    pub mod alliance;
    pub mod board;
    pub mod board_builder;
    pub mod board_utils;
    pub mod tile;
}

pub mod pieces {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_execute;
    pub mod move_factory;
}

pub mod player {
    pub mod castling;
    pub mod move_transition;
    pub mod player;
}

pub mod utils {
    pub mod perft;
    pub mod random_game;
}
