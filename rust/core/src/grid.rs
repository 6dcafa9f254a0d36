// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Occupancy grid data model

use crate::error::{Error, Result};

/// Classification of a single floor plan cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No structure (plan value `0` or anything unrecognized).
    Empty,
    /// Occupied room cell (plan value `1`).
    Room,
    /// Occupied variant cell (plan value `-1`), e.g. a different room type.
    /// Bears walls like [`Cell::Room`] but never satisfies a predicate that
    /// requires exactly a room cell.
    Annex,
}

impl Cell {
    /// Classify a numeric plan value.
    #[inline]
    pub fn from_value(value: f64) -> Self {
        if value == 1.0 {
            Cell::Room
        } else if value == -1.0 {
            Cell::Annex
        } else {
            Cell::Empty
        }
    }

    /// Whether the cell bears walls at all (room or variant).
    #[inline]
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Room | Cell::Annex)
    }
}

/// Rectangular 2-D occupancy grid, indexed `[x][y]` with `x` as the row axis.
///
/// The grid is read-only input: it is built once by the loader and only read
/// afterwards. Rectangularity is enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl OccupancyGrid {
    /// Build a grid from parsed rows.
    ///
    /// Fails with [`Error::RaggedRow`] when rows differ in length and with
    /// [`Error::EmptyPlan`] when there are no cells at all.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(Error::EmptyPlan);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    line: index + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows (extent along the first index).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (extent along the second index).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(x, y)`.
    ///
    /// Panics when the coordinate is out of range; callers iterate within
    /// `rows()`/`cols()` bounds.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.rows && y < self.cols, "cell index out of range");
        self.cells[x * self.cols + y]
    }

    /// Whether the cell at `(x, y)` is room or variant.
    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_occupied()
    }
}
