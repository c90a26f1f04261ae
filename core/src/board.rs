// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Serialize, Deserialize};

use crate::{Coord, GameError, Piece};

/// Rectangular grid of cells, each empty or holding one piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Number of rows, fixed at construction
    rows: u8,
    /// Number of columns, fixed at construction
    cols: u8,
    /// Cells in row-major order
    cells: Vec<Option<Piece>>,
}

impl Grid {
    /// Create a new empty grid with the specified dimensions
    pub fn new(rows: u8, cols: u8) -> Self {
        let cell_count = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            cells: vec![None; cell_count],
        }
    }

    /// Get the number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Check if a coordinate lies on the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Get the cell at the specified coordinate.
    ///
    /// Out-of-bounds access is a reported error, never conflated with an
    /// empty cell.
    pub fn get(&self, coord: Coord) -> Result<Option<Piece>, GameError> {
        if !self.in_bounds(coord) {
            return Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(self.cells[self.coord_to_index(coord)])
    }

    /// Write the cell at the specified coordinate, same bounds contract
    /// as [`Grid::get`]. This is the only mutator.
    pub fn set(&mut self, coord: Coord, cell: Option<Piece>) -> Result<(), GameError> {
        if !self.in_bounds(coord) {
            return Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        let idx = self.coord_to_index(coord);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if an in-bounds cell is empty.
    ///
    /// Callers bounds-check first; an out-of-range coordinate reports
    /// `false`.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(None))
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Option<Piece>> + '_ {
        self.cells.iter().copied()
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.row as usize) * (self.cols as usize) + (coord.col as usize)
    }
}
