//! Easy strategy
//!
//! Picks uniformly at random among the legal moves.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Strategy;
use crate::board::{Board, Move, Player};
use crate::rules;

/// Random move selection. Seedable so tests can reproduce a game.
pub struct EasyStrategy {
    rng: ChaCha8Rng,
}

impl EasyStrategy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for EasyStrategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Move {
        let moves = rules::legal_moves(board, player);
        moves[self.rng.gen_range(0..moves.len())]
    }
}
