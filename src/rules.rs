//! Capture rules - legality, flipping, and move enumeration
//!
//! The only module that knows the Reversi capture rule. Every operation here
//! walks the eight compass rays outward from a candidate cell: a ray that
//! crosses one or more contiguous opponent discs and then lands on a
//! same-player disc captures everything in between.

use smallvec::SmallVec;
use thiserror::Error;

use crate::board::{Board, Cell, Move, Player};

/// The eight compass offsets used by every ray scan.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A move that fails the capture rule. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move at ({row}, {col})")]
pub struct IllegalMove {
    pub row: usize,
    pub col: usize,
}

/// Opponent discs captured along one ray, or 0 when the ray runs off the
/// board, hits an empty cell, or has no opponent discs before a same-player
/// disc.
fn ray_captures(board: &Board, mv: Move, player: Player, dir: (isize, isize)) -> usize {
    let opponent = player.opponent().cell();
    let size = board.size() as isize;
    let mut row = mv.row as isize + dir.0;
    let mut col = mv.col as isize + dir.1;
    let mut captured = 0;

    while row >= 0 && row < size && col >= 0 && col < size {
        match board.at(row as usize, col as usize) {
            cell if cell == opponent => {
                captured += 1;
                row += dir.0;
                col += dir.1;
            }
            cell if cell == player.cell() => return captured,
            _ => return 0,
        }
    }

    0
}

/// A move is legal onto an empty in-bounds cell from which at least one ray
/// captures.
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    if !board.in_bounds(mv.row, mv.col) || board.at(mv.row, mv.col) != Cell::Empty {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&dir| ray_captures(board, mv, player, dir) > 0)
}

/// Total discs the move would capture across all rays, without mutating the
/// board. Zero for illegal targets.
pub fn flippable_count(board: &Board, mv: Move, player: Player) -> usize {
    if !board.in_bounds(mv.row, mv.col) || board.at(mv.row, mv.col) != Cell::Empty {
        return 0;
    }

    DIRECTIONS
        .iter()
        .map(|&dir| ray_captures(board, mv, player, dir))
        .sum()
}

/// Place the mover's disc and recolor every captured ray. Returns the number
/// of flipped discs. The sole mutating operation in the engine; on error the
/// board is untouched.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Result<usize, IllegalMove> {
    if !is_legal(board, mv, player) {
        return Err(IllegalMove {
            row: mv.row,
            col: mv.col,
        });
    }

    board.put(mv.row, mv.col, player.cell());

    let opponent = player.opponent().cell();
    let size = board.size() as isize;
    let mut flipped = 0;

    for dir in DIRECTIONS {
        let mut ray: SmallVec<[(usize, usize); 8]> = SmallVec::new();
        let mut row = mv.row as isize + dir.0;
        let mut col = mv.col as isize + dir.1;

        while row >= 0 && row < size && col >= 0 && col < size
            && board.at(row as usize, col as usize) == opponent
        {
            ray.push((row as usize, col as usize));
            row += dir.0;
            col += dir.1;
        }

        let closed = !ray.is_empty()
            && row >= 0 && row < size && col >= 0 && col < size
            && board.at(row as usize, col as usize) == player.cell();

        if closed {
            for &(r, c) in &ray {
                board.put(r, c, player.cell());
            }
            flipped += ray.len();
        }
    }

    Ok(flipped)
}

/// Every legal move for `player`, in row-major order. The order is part of
/// the contract: the greedy and minimax strategies break ties on the first
/// move seen, so enumeration must stay deterministic.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            let mv = Move { row, col };
            if is_legal(board, mv, player) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Canonical no-moves check.
pub fn has_any_move(board: &Board, player: Player) -> bool {
    !legal_moves(board, player).is_empty()
}
