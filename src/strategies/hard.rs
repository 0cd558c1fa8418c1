//! Hard strategy
//!
//! Fixed-depth minimax over cloned boards with a disc-differential
//! evaluation. Player Two maximizes and Player One minimizes, regardless of
//! which side invoked the search.

use super::Strategy;
use crate::board::{Board, Move, Player};
use crate::rules;

/// Search depth in plies.
const SEARCH_DEPTH: u32 = 3;

/// Depth-limited minimax. Deterministic: ties go to the first move in
/// row-major enumeration order.
pub struct MinimaxStrategy {
    depth: u32,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self {
            depth: SEARCH_DEPTH,
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Move {
        let moves = rules::legal_moves(board, player);

        let mut best = moves[0];
        let mut best_score = None;

        for &mv in &moves {
            let child = match play(board, mv, player) {
                Some(child) => child,
                None => continue,
            };
            let score = search(&child, player.opponent(), self.depth - 1);

            let better = match best_score {
                None => true,
                // Strict comparisons keep the first-seen move on ties.
                Some(current) => match player {
                    Player::Two => score > current,
                    Player::One => score < current,
                },
            };
            if better {
                best = mv;
                best_score = Some(score);
            }
        }

        best
    }
}

/// Disc-count differential; positive favors Player Two.
fn evaluate(board: &Board) -> i32 {
    board.count(Player::Two) as i32 - board.count(Player::One) as i32
}

/// Apply a known-legal move to a scratch clone. `legal_moves` rules out the
/// `None` arm; the live board is never touched.
fn play(board: &Board, mv: Move, player: Player) -> Option<Board> {
    let mut child = board.clone();
    rules::apply_move(&mut child, mv, player).ok()?;
    Some(child)
}

/// Minimax value of `board` with `to_move` to act and `depth` plies left.
/// A blocked side scores as a leaf for that branch only.
fn search(board: &Board, to_move: Player, depth: u32) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let moves = rules::legal_moves(board, to_move);
    if moves.is_empty() {
        return evaluate(board);
    }

    let mut best = match to_move {
        Player::Two => i32::MIN,
        Player::One => i32::MAX,
    };

    for mv in moves {
        let child = match play(board, mv, to_move) {
            Some(child) => child,
            None => continue,
        };
        let score = search(&child, to_move.opponent(), depth - 1);
        best = match to_move {
            Player::Two => best.max(score),
            Player::One => best.min(score),
        };
    }

    best
}
