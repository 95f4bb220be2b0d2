use std::fmt;

use poisson::Point;

/// Largest grid worth printing to a terminal.
const MAX_CELLS: usize = 1 << 28;

/// Character grid with one cell per unit square of the sampling domain.
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Raster {
    /// `None` if the grid would exceed [`MAX_CELLS`] cells.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let cells = width.checked_mul(height).filter(|&n| n <= MAX_CELLS)?;
        Some(Self {
            width,
            height,
            cells: vec![false; cells],
        })
    }

    /// Marks the cell under `p`. Points off the grid are ignored.
    pub fn plot(&mut self, p: Point) -> bool {
        if !(p.x >= 0.0 && p.y >= 0.0) {
            return false;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] = true;
        true
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for &cell in row {
                f.write_str(if cell { "." } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
