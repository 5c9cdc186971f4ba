//! Grid representation and utilities for the simulation

use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative `(row, col)` offsets of the Moore neighborhood. The 8 compass
/// directions are a closed set, so they live in a constant table.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded 2D grid of live/dead cells.
///
/// Cells are stored row-major; `width` is the number of columns and
/// `height` the number of rows, and both are fixed for the grid's
/// lifetime. `cells.len()` is always exactly `width * height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create a grid from nested rows of booleans.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to the flat index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell value at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Set the cell value at the given coordinates.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), LifeError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), LifeError> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Count living neighbors of a cell, clipping at the grid edges.
    /// Positions outside the grid are simply not counted.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                r >= 0
                    && r < self.height as isize
                    && c >= 0
                    && c < self.width as isize
                    && self.cells[self.index(r as usize, c as usize)]
            })
            .count() as u8
    }

    /// Coordinates of all living cells, row-major.
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.index(row, col)] {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count of living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True iff every cell is dead.
    pub fn all_dead(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.cells[self.index(row, col)] {
                    '█'
                } else {
                    '·'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
