//! Grid module - the playfield's locked cells
//!
//! The grid is `width x height` cells, each empty or holding a color.
//! Uses a flat row-major vector; every lookup goes through a bounds check.
//! Coordinates: (x, y) where x grows to the right and y grows downwards,
//! row 0 is the top of the visible area.

use crate::error::GridError;
use crate::types::{Cell, Rgb};

/// Outcome of evaluating the grid after a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClear {
    /// The top row is occupied: the board overflowed and the game is over.
    Overflow,
    /// Number of full rows removed (may be 0).
    Cleared(usize),
}

/// The game grid, sized at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// Fails if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is in bounds and empty
    pub fn is_valid_coordinate(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Write `color` into every in-bounds cell, then evaluate lines.
    ///
    /// Cells outside the grid (a piece still poking out above row 0) are
    /// skipped.
    pub fn deposit(&mut self, cells: &[(i32, i32)], color: Rgb) -> LineClear {
        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }
        self.evaluate_lines()
    }

    /// Detect overflow, otherwise remove full rows.
    ///
    /// Any occupied cell in row 0 means overflow, regardless of full rows below.
    /// Otherwise full rows are removed and the same number of empty rows
    /// appear at the top.
    pub fn evaluate_lines(&mut self) -> LineClear {
        if !self.is_row_empty(0) {
            return LineClear::Overflow;
        }
        LineClear::Cleared(self.clear_full_rows())
    }

    /// Compact the grid over full rows and return how many were removed.
    /// Two-pointer scan from the bottom, no extra allocation.
    fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Empty every cell, keeping the dimensions
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}
