//! AI strategies
//!
//! Three interchangeable move-selection policies over the rules engine, one
//! per difficulty tier.

mod easy;
mod hard;
mod medium;

pub use easy::EasyStrategy;
pub use hard::MinimaxStrategy;
pub use medium::GreedyStrategy;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};

/// AI difficulty tier, chosen once per session and immutable for its
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Move-selection policy.
///
/// `choose_move` is only called on positions where `player` has at least one
/// legal move; the turn controller checks [`crate::rules::has_any_move`]
/// first. Calling it on a blocked position is a contract violation and
/// panics.
pub trait Strategy: Send {
    fn choose_move(&mut self, board: &Board, player: Player) -> Move;
}

/// Build the strategy for a difficulty tier. A seed makes the Easy tier
/// reproducible; the other tiers are deterministic and ignore it.
pub fn strategy_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => match seed {
            Some(seed) => Box::new(EasyStrategy::with_seed(seed)),
            None => Box::new(EasyStrategy::new()),
        },
        Difficulty::Medium => Box::new(GreedyStrategy::new()),
        Difficulty::Hard => Box::new(MinimaxStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_string_round_trip() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_str("impossible"), None);
    }

    #[test]
    fn test_strategy_for_dispatches_every_tier() {
        let board = Board::new(8).unwrap();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut strategy = strategy_for(difficulty, Some(7));
            let mv = strategy.choose_move(&board, Player::One);
            assert!(crate::rules::is_legal(&board, mv, Player::One));
        }
    }
}
