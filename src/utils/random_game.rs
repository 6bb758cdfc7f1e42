//! Self-play with uniformly random moves.
//!
//! Each ply picks one of the side to move's safe moves. Play stops on
//! checkmate, stalemate or the ply limit.

use std::fmt;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::errors::ChessResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGameConfig {
    pub max_plies: u16,
    /// Fixed seed for reproducible games. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RandomGameConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Alliance },
    Stalemate,
    PlyLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::PlyLimit => write!(f, "ply limit reached"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomGameReport {
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub final_board: Board,
}

pub fn play_random_game(board: Board, config: &RandomGameConfig) -> ChessResult<RandomGameReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut board = board;
    let mut moves = Vec::new();

    let outcome = loop {
        let player = board.current_player();
        if player.is_in_check_mate() {
            break GameOutcome::Checkmate {
                winner: player.alliance().opponent(),
            };
        }
        if player.is_in_stale_mate() {
            break GameOutcome::Stalemate;
        }
        if moves.len() >= usize::from(config.max_plies) {
            break GameOutcome::PlyLimit;
        }

        let transition = {
            let safe = player.safe_moves();
            let Some(picked) = safe.choose(&mut rng).copied() else {
                break GameOutcome::Stalemate;
            };
            debug!(ply = moves.len() + 1, mv = %picked, "random move");
            moves.push(picked.to_string());
            player.make_move(picked)?
        };
        board = transition.into_board();
    };

    info!(plies = moves.len(), %outcome, "random game finished");
    Ok(RandomGameReport {
        moves,
        outcome,
        final_board: board,
    })
}

#[cfg(test)]
mod tests {
    use super::{play_random_game, GameOutcome, RandomGameConfig};
    use crate::board::board::Board;

    #[test]
    fn same_seed_plays_same_game() {
        let config = RandomGameConfig {
            max_plies: 60,
            seed: Some(7),
        };
        let first = play_random_game(Board::standard_initial().expect("board"), &config)
            .expect("game should run");
        let second = play_random_game(Board::standard_initial().expect("board"), &config)
            .expect("game should run");
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.final_board.to_string(), second.final_board.to_string());
    }

    #[test]
    fn ply_limit_caps_game_length() {
        let config = RandomGameConfig {
            max_plies: 10,
            seed: Some(42),
        };
        let report = play_random_game(Board::standard_initial().expect("board"), &config)
            .expect("game should run");
        assert!(report.moves.len() <= 10);
        // No mate is reachable in fewer than four plies.
        assert!(report.moves.len() >= 4);
        if report.moves.len() < 10 {
            assert_ne!(report.outcome, GameOutcome::PlyLimit);
        }
    }

    #[test]
    fn zero_plies_returns_start_position() {
        let config = RandomGameConfig {
            max_plies: 0,
            seed: Some(1),
        };
        let report = play_random_game(Board::standard_initial().expect("board"), &config)
            .expect("game should run");
        assert!(report.moves.is_empty());
        assert_eq!(report.outcome, GameOutcome::PlyLimit);
    }

    #[test]
    fn default_config_has_ply_limit() {
        let config = RandomGameConfig::default();
        assert_eq!(config.max_plies, 200);
        assert_eq!(config.seed, None);
    }
}
