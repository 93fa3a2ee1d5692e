//! Grid-of-codes board representation.
//!
//! `Board` exclusively owns its cells. Constructing from an external grid and
//! calling `copy` both deep-clone, so scratch boards used during evaluation
//! never alias the live game board. Row lengths are not forced to match: a
//! jagged input is stored as given and out-of-row probes read as off-board.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<PieceCode>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Empty `size x size` board.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![EMPTY; size]; size],
        }
    }

    /// Standard 8x8 opening layout: black on the top three rows, red on the
    /// bottom three, dark squares only.
    pub fn standard() -> Self {
        let mut board = Self::new(STANDARD_BOARD_SIZE);
        let size = STANDARD_BOARD_SIZE;
        for row in 0..size {
            for col in 0..size {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < STANDARD_STARTING_ROWS {
                    board.cells[row][col] = BLACK;
                } else if row >= size - STANDARD_STARTING_ROWS {
                    board.cells[row][col] = RED;
                }
            }
        }
        board
    }

    /// Deep copy of an externally owned grid.
    pub fn from_grid(grid: &[Vec<PieceCode>]) -> Self {
        Self {
            cells: grid.to_vec(),
        }
    }

    /// Independent deep clone.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Number of rows.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.cells.len()
            && (col as usize) < self.cells[row as usize].len()
    }

    /// Non-failing probe used by the rules: `None` when off the board.
    #[inline]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<PieceCode> {
        if self.contains(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn get_piece(&self, row: i32, col: i32) -> CheckersResult<PieceCode> {
        self.piece_at(row, col)
            .ok_or(CheckersError::OutOfBounds { row, col })
    }

    pub fn set_piece(&mut self, row: i32, col: i32, code: PieceCode) -> CheckersResult<()> {
        if !self.contains(row, col) {
            return Err(CheckersError::OutOfBounds { row, col });
        }
        self.cells[row as usize][col as usize] = code;
        Ok(())
    }

    /// Deep copy of the cells, for handing back to external owners.
    pub fn to_grid(&self) -> Vec<Vec<PieceCode>> {
        self.cells.clone()
    }

    /// Row-major iterator over `(row, col, code)`.
    pub fn squares(&self) -> impl Iterator<Item = (i32, i32, PieceCode)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, code)| (row as i32, col as i32, *code))
        })
    }

    pub fn count(&self, code: PieceCode) -> usize {
        self.squares().filter(|(_, _, c)| *c == code).count()
    }

    pub fn pieces_of(&self, side: Side) -> usize {
        self.count(side.color()) + self.count(side.king_color())
    }

    pub fn has_pieces_of(&self, side: Side) -> bool {
        self.squares().any(|(_, _, c)| Side::of(c) == Some(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_twelve_men_per_side() {
        let board = Board::standard();
        assert_eq!(board.size(), 8);
        assert_eq!(board.count(RED), 12);
        assert_eq!(board.count(BLACK), 12);
        assert_eq!(board.get_piece(0, 1), Ok(BLACK));
        assert_eq!(board.get_piece(7, 0), Ok(RED));
        assert_eq!(board.get_piece(3, 2), Ok(EMPTY));
    }

    #[test]
    fn copy_is_independent_both_ways() {
        let mut original = Board::standard();
        let mut copy = original.copy();

        original.set_piece(3, 2, RED_KING).expect("in bounds");
        assert_eq!(copy.get_piece(3, 2), Ok(EMPTY));

        copy.set_piece(4, 1, BLACK_KING).expect("in bounds");
        assert_eq!(original.get_piece(4, 1), Ok(EMPTY));
    }

    #[test]
    fn from_grid_deep_copies_the_input() {
        let mut grid = vec![vec![EMPTY; 4]; 4];
        grid[1][1] = RED;
        let board = Board::from_grid(&grid);
        grid[1][1] = BLACK;
        assert_eq!(board.get_piece(1, 1), Ok(RED));

        let mut exported = board.to_grid();
        exported[0][0] = BLACK_KING;
        assert_eq!(board.get_piece(0, 0), Ok(EMPTY));
    }

    #[test]
    fn out_of_bounds_access_fails_fast() {
        let mut board = Board::new(8);
        assert_eq!(
            board.get_piece(8, 0),
            Err(CheckersError::OutOfBounds { row: 8, col: 0 })
        );
        assert!(board.set_piece(-1, 3, RED).is_err());
        assert_eq!(board.piece_at(0, -1), None);
    }

    #[test]
    fn jagged_grids_treat_missing_cells_as_off_board() {
        let grid = vec![vec![EMPTY; 3], vec![RED], vec![EMPTY; 2]];
        let board = Board::from_grid(&grid);
        assert_eq!(board.size(), 3);
        assert!(board.contains(0, 2));
        assert!(!board.contains(1, 1));
        assert_eq!(board.get_piece(1, 0), Ok(RED));
        assert!(board.has_pieces_of(Side::Red));
        assert!(!board.has_pieces_of(Side::Black));
    }
}
