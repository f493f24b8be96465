use nalgebra::DMatrix;

use crate::geometry::Point;

/// Lazy row-major walk over the occupied cells of a canvas grid.
///
/// Created by [`Canvas::occupied`](super::Canvas::occupied); ask the canvas
/// again to restart from the first cell.
#[derive(Debug, Clone)]
pub struct OccupiedCells<'a> {
    grid: &'a DMatrix<bool>,
    next: usize,
}

impl<'a> OccupiedCells<'a> {
    pub(crate) fn new(grid: &'a DMatrix<bool>) -> Self {
        Self { grid, next: 0 }
    }
}

impl Iterator for OccupiedCells<'_> {
    type Item = Point;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Point> {
        let (rows, cols) = self.grid.shape();
        while self.next < rows * cols {
            let (row, col) = (self.next / cols, self.next % cols);
            self.next += 1;
            if self.grid[(row, col)] {
                return Some(Point::new(col as f64, row as f64));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (rows, cols) = self.grid.shape();
        (0, Some(rows * cols - self.next))
    }
}
