//! Board - square disc grid with the standard Reversi opening
//!
//! Pure value semantics: cell storage and derived counts only. The capture
//! rule lives in [`crate::rules`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest playable board; the four opening discs need a centered 2x2 block.
pub const MIN_BOARD_SIZE: usize = 4;

/// One of the two sides. Player One is the human by convention, but nothing
/// in the engine hard-codes that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell holding one of this player's discs.
    #[inline]
    pub fn cell(self) -> Cell {
        Cell::Occupied(self)
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A board coordinate. Only meaningful relative to a specific board and the
/// player placing a disc there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {size} is invalid: must be even and at least 4")]
    InvalidSize { size: usize },
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard four-disc opening in the center:
    /// Two on the main diagonal of the 2x2 block, One on the anti-diagonal.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE || size % 2 != 0 {
            return Err(BoardError::InvalidSize { size });
        }

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
        };

        let mid = size / 2;
        board.put(mid - 1, mid - 1, Player::Two.cell());
        board.put(mid, mid, Player::Two.cell());
        board.put(mid - 1, mid, Player::One.cell());
        board.put(mid, mid - 1, Player::One.cell());

        Ok(board)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.at(row, col))
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        self.put(row, col, cell);
        Ok(())
    }

    /// Cell at a coordinate already known to be in bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        let index = row * self.size + col;
        self.cells[index] = cell;
    }

    /// Number of discs belonging to `player`.
    pub fn count(&self, player: Player) -> usize {
        let target = player.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Disc counts as `(one, two)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.count(Player::One), self.count(Player::Two))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Number of empty cells.
    pub fn empty(&self) -> usize {
        self.size * self.size - self.occupied()
    }

    /// Row-major grid of cells, for snapshots and rendering.
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_standard_opening() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.at(3, 3), Player::Two.cell());
        assert_eq!(board.at(4, 4), Player::Two.cell());
        assert_eq!(board.at(3, 4), Player::One.cell());
        assert_eq!(board.at(4, 3), Player::One.cell());

        for row in 0..8 {
            for col in 0..8 {
                if !(3..=4).contains(&row) || !(3..=4).contains(&col) {
                    assert_eq!(board.at(row, col), Cell::Empty);
                }
            }
        }

        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.empty(), 60);
    }

    #[test]
    fn test_new_scales_opening_to_board_size() {
        let board = Board::new(6).unwrap();

        assert_eq!(board.at(2, 2), Player::Two.cell());
        assert_eq!(board.at(3, 3), Player::Two.cell());
        assert_eq!(board.at(2, 3), Player::One.cell());
        assert_eq!(board.at(3, 2), Player::One.cell());
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        for size in [0, 2, 3, 5, 7, 9] {
            assert_eq!(
                Board::new(size),
                Err(BoardError::InvalidSize { size }),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut board = Board::new(4).unwrap();

        assert_eq!(board.get(0, 0), Ok(Cell::Empty));
        assert_eq!(
            board.get(4, 0),
            Err(BoardError::OutOfBounds {
                row: 4,
                col: 0,
                size: 4
            })
        );
        assert_eq!(
            board.set(0, 4, Cell::Empty),
            Err(BoardError::OutOfBounds {
                row: 0,
                col: 4,
                size: 4
            })
        );

        board.set(0, 0, Player::One.cell()).unwrap();
        assert_eq!(board.get(0, 0), Ok(Player::One.cell()));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new(4).unwrap();
        let mut copy = board.clone();

        copy.put(0, 0, Player::Two.cell());

        assert_eq!(board.at(0, 0), Cell::Empty);
        assert_eq!(copy.at(0, 0), Player::Two.cell());
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_grid_is_row_major() {
        let board = Board::new(4).unwrap();
        let grid = board.grid();

        assert_eq!(grid.len(), 4);
        assert_eq!(grid[1][1], Player::Two.cell());
        assert_eq!(grid[1][2], Player::One.cell());
        assert_eq!(grid[0][0], Cell::Empty);
    }
}
