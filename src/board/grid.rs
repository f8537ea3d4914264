//! Square grid storage and the whole-board transforms.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::row::slide_left;
use crate::core::cell::{self, Cell, BLOCKED, EMPTY};
use crate::core::{BoardError, Direction};

/// An N×N grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Copy a layout given as rows.
    ///
    /// The layout must be square and every cell must be empty, blocked, or a
    /// power of two.
    ///
    /// ```
    /// use tile_2048::board::Board;
    ///
    /// let board = Board::from_rows(&[[0, 2], [4, -1]]).unwrap();
    /// assert_eq!(board.get(1, 0), 4);
    /// assert!(Board::from_rows(&[[0, 3], [0, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::RaggedLayout {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !cell::is_valid(value) {
                    return Err(BoardError::InvalidCell { row: r, col: c, value });
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.size + col] = value;
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    /// Owned copy as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Flat row-major view.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == EMPTY)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of non-empty, non-blocked cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| cell::is_tile(v)).count()
    }

    /// Largest tile, or 0 for a board with no tiles.
    #[must_use]
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().filter(|&v| cell::is_tile(v)).max().unwrap_or(EMPTY)
    }

    /// Empty every cell, blocked ones included.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Mirror horizontally.
    pub fn reverse(&mut self) {
        for row in self.cells.chunks_exact_mut(self.size) {
            row.reverse();
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&mut self) {
        let n = self.size;
        for r in 0..n {
            for c in (r + 1)..n {
                self.cells.swap(r * n + c, c * n + r);
            }
        }
    }

    /// Slide every row toward column 0. Returns whether anything changed and
    /// the points won by merges.
    pub fn slide_left(&mut self) -> (bool, u64) {
        self.cells
            .chunks_exact_mut(self.size)
            .map(slide_left)
            .fold((false, 0u64), |(moved, gained), (m, g)| {
                (moved || m, gained.saturating_add(g))
            })
    }

    /// Slide in any direction by conjugating [`Board::slide_left`] with
    /// reverse and transpose.
    pub fn slide(&mut self, direction: Direction) -> (bool, u64) {
        match direction {
            Direction::Left => self.slide_left(),
            Direction::Right => {
                self.reverse();
                let result = self.slide_left();
                self.reverse();
                result
            }
            Direction::Up => {
                self.transpose();
                let result = self.slide_left();
                self.transpose();
                result
            }
            Direction::Down => {
                self.transpose();
                let result = self.slide(Direction::Right);
                self.transpose();
                result
            }
        }
    }

    /// True if some cell is empty or two orthogonal neighbours hold the same
    /// value.
    ///
    /// Values are compared as plain integers, so two adjacent blocked cells
    /// also count even though they can never merge.
    #[must_use]
    pub fn can_move(&self) -> bool {
        if self.cells.contains(&EMPTY) {
            return true;
        }
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.get(r, c);
                if c + 1 < n && v == self.get(r, c + 1) {
                    return true;
                }
                if r + 1 < n && v == self.get(r + 1, c) {
                    return true;
                }
            }
        }
        false
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.cells[row * self.size + col]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for &v in row {
                if !first {
                    f.write_str("\t")?;
                }
                first = false;
                match v {
                    EMPTY => f.write_str(".")?,
                    BLOCKED => f.write_str("X")?,
                    _ => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
