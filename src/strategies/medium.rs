//! Medium strategy
//!
//! Greedy: takes the move that flips the most discs right now.

use super::Strategy;
use crate::board::{Board, Move, Player};
use crate::rules;

/// Greedy flip-count maximizer. Ties go to the first move in row-major
/// enumeration order, which keeps the tier fully deterministic.
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GreedyStrategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Move {
        let moves = rules::legal_moves(board, player);

        let mut best = moves[0];
        let mut best_flips = rules::flippable_count(board, best, player);

        for &mv in &moves[1..] {
            let flips = rules::flippable_count(board, mv, player);
            // Strict >: the first-seen move wins ties.
            if flips > best_flips {
                best = mv;
                best_flips = flips;
            }
        }

        best
    }
}
