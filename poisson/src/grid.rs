//! Background acceleration grid.
//!
//! Cells are `min_distance / sqrt(2)` wide, so a cell can hold at most one
//! accepted point and every point within `min_distance` of a candidate lies
//! in the 5x5 block of cells around it.

use crate::config::Config;
use crate::error::PoissonError;
use crate::point::Point;

/// Upper bound on the memory a single grid may allocate (4 GiB).
const MAX_GRID_BYTES: u64 = 4 << 30;

/// Half-width of the neighbourhood scanned by [`Grid::is_too_close`].
const NEIGHBOURHOOD: usize = 2;

/// Dense grid of accepted points, indexed by `floor(coord / cell_size)`.
#[derive(Clone, Debug)]
pub struct Grid {
    cell_size: f32,
    min_distance: f32,
    width: f32,
    height: f32,
    columns: usize,
    rows: usize,
    cells: Vec<Option<Point>>,
    occupied: usize,
}

impl Grid {
    /// Builds an empty grid covering the domain of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoissonError::GridTooLarge`] if the cell count is not addressable.
    pub fn new(config: &Config) -> Result<Self, PoissonError> {
        let (columns, rows) = Self::dimensions(config)?;
        Ok(Self {
            cell_size: config.cell_size(),
            min_distance: config.min_distance,
            width: config.width,
            height: config.height,
            columns,
            rows,
            cells: vec![None; columns * rows],
            occupied: 0,
        })
    }

    /// Columns and rows needed to cover the domain of `config`.
    pub(crate) fn dimensions(config: &Config) -> Result<(usize, usize), PoissonError> {
        let cell_size = config.cell_size();
        // Float-to-int casts saturate, so absurd extents surface below. An
        // extent far smaller than a cell can round to zero; keep one cell.
        let columns = ((config.width / cell_size).ceil() as usize).max(1);
        let rows = ((config.height / cell_size).ceil() as usize).max(1);

        let too_large = PoissonError::GridTooLarge { columns, rows };
        let cells = columns
            .checked_mul(rows)
            .ok_or_else(|| too_large.clone())?;
        let bytes = (cells as u64).saturating_mul(std::mem::size_of::<Option<Point>>() as u64);
        if bytes > MAX_GRID_BYTES {
            return Err(too_large);
        }
        Ok((columns, rows))
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Contents of a cell, or `None` when the cell is empty or out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<Point> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Maps a point to its `(column, row)` cell.
    ///
    /// An in-domain point whose division rounds up to the grid edge is
    /// clamped into the last cell.
    ///
    /// # Errors
    ///
    /// Returns [`PoissonError::OutOfDomain`] for points outside
    /// `[0, width) x [0, height)`, including non-finite ones.
    pub fn cell_of(&self, p: Point) -> Result<(usize, usize), PoissonError> {
        let inside = p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height;
        if !inside {
            return Err(PoissonError::OutOfDomain { x: p.x, y: p.y });
        }
        let column = ((p.x / self.cell_size) as usize).min(self.columns - 1);
        let row = ((p.y / self.cell_size) as usize).min(self.rows - 1);
        Ok((column, row))
    }

    /// Stores `p` in its cell, replacing whatever was there.
    pub fn record(&mut self, p: Point) -> Result<(), PoissonError> {
        let (column, row) = self.cell_of(p)?;
        let cell = &mut self.cells[row * self.columns + column];
        if cell.is_none() {
            self.occupied += 1;
        }
        *cell = Some(p);
        Ok(())
    }

    /// Whether any recorded point lies strictly within `min_distance` of `p`.
    pub fn is_too_close(&self, p: Point) -> Result<bool, PoissonError> {
        let (column, row) = self.cell_of(p)?;

        if self.cells[row * self.columns + column].is_some() {
            return Ok(true);
        }

        let min_distance_squared = self.min_distance * self.min_distance;
        let columns =
            column.saturating_sub(NEIGHBOURHOOD)..=(column + NEIGHBOURHOOD).min(self.columns - 1);
        let rows = row.saturating_sub(NEIGHBOURHOOD)..=(row + NEIGHBOURHOOD).min(self.rows - 1);

        for y in rows {
            let line = &self.cells[y * self.columns..(y + 1) * self.columns];
            let close = line[columns.clone()]
                .iter()
                .flatten()
                .any(|q| p.squared_distance(q) < min_distance_squared);
            if close {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
