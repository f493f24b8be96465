use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::affine_2d::scaling_matrix;

use super::GeneralTransform;

/// Scales canvas content about a pivot.
///
/// Without an explicit pivot the canvas center is used.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    sx: f64,
    sy: f64,
    center: Option<Point>,
}

impl Scale {
    /// Creates a scaling about the canvas center.
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy, center: None }
    }

    /// Creates a scaling about `center`.
    #[must_use]
    pub fn about(sx: f64, sy: f64, center: Point) -> Self {
        Self {
            sx,
            sy,
            center: Some(center),
        }
    }

    /// Builds the equivalent general transform for `canvas`.
    #[must_use]
    pub fn to_general(&self, canvas: &Canvas) -> GeneralTransform {
        let center = self.center.unwrap_or_else(|| canvas.center());
        GeneralTransform::new(scaling_matrix(self.sx, self.sy, &center.to_point2()))
    }

    /// Executes the scaling, modifying the canvas in-place.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` if either factor is zero.
    pub fn execute(&self, canvas: &mut Canvas) -> Result<()> {
        self.to_general(canvas).execute(canvas)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PlanarError, TransformError};

    #[test]
    fn doubles_distance_from_center() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.add_point(Point::new(60.0, 45.0));
        Scale::new(2.0, 2.0).execute(&mut canvas).unwrap();
        assert_eq!(canvas.points(), &[Point::new(70.0, 40.0)]);
    }

    #[test]
    fn zero_factor_is_singular() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.add_point(Point::new(60.0, 45.0));
        let result = Scale::about(0.0, 1.0, Point::new(0.0, 0.0)).execute(&mut canvas);
        assert!(matches!(
            result,
            Err(PlanarError::Transform(TransformError::SingularMatrix))
        ));
        assert_eq!(canvas.points(), &[Point::new(60.0, 45.0)]);
    }
}
