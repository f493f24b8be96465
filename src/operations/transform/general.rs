use nalgebra::DMatrix;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{Result, TransformError};
use crate::geometry::{Line, Point};
use crate::math::affine_2d::transform_point;
use crate::math::Matrix3;

/// Applies an arbitrary 3x3 homogeneous matrix to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralTransform {
    matrix: Matrix3,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Creates the operation from a dynamically sized matrix.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidMatrixShape` unless the matrix is 3x3.
    pub fn from_dynamic(matrix: &DMatrix<f64>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if (rows, cols) != (3, 3) {
            return Err(TransformError::InvalidMatrixShape { rows, cols }.into());
        }
        Ok(Self::new(matrix.fixed_view::<3, 3>(0, 0).into_owned()))
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Maps a point and rounds it to the nearest grid coordinate.
    #[must_use]
    pub fn apply_rounded(&self, point: &Point) -> Point {
        let q = transform_point(&self.matrix, &point.to_point2());
        Point::new(q.x.round(), q.y.round())
    }

    /// Executes the transformation, rebuilding the canvas in one batch.
    ///
    /// Every stored point is mapped and rounded; results off the grid are
    /// dropped. Every line endpoint is mapped and rounded and always kept.
    /// The grid is rebuilt from the surviving points.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` if the determinant is zero.
    /// The canvas is left untouched in that case.
    pub fn execute(&self, canvas: &mut Canvas) -> Result<()> {
        self.check_invertible()?;

        let before = canvas.points().len();
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);
        let points: Vec<Point> = canvas
            .points()
            .iter()
            .map(|p| self.apply_rounded(p))
            .filter(|p| (0.0..width).contains(&p.x()) && (0.0..height).contains(&p.y()))
            .collect();

        for line in canvas.lines_mut() {
            *line = Line::new_unchecked(self.apply_rounded(line.start()), self.apply_rounded(line.end()));
        }

        let kept = points.len();
        canvas.reset_points(points);
        debug!(before, kept, lines = canvas.lines().len(), "applied affine transform");
        Ok(())
    }

    #[allow(clippy::float_cmp)]
    pub(crate) fn check_invertible(&self) -> Result<()> {
        if self.matrix.determinant() == 0.0 {
            return Err(TransformError::SingularMatrix.into());
        }
        Ok(())
    }
}
