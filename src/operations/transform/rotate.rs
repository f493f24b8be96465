use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::affine_2d::rotation_matrix;

use super::GeneralTransform;

/// Rotates canvas content about a pivot.
///
/// Without an explicit pivot the canvas center is used.
#[derive(Debug, Clone, Copy)]
pub struct Rotate {
    angle_degrees: f64,
    center: Option<Point>,
}

impl Rotate {
    /// Creates a rotation about the canvas center.
    #[must_use]
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            center: None,
        }
    }

    /// Creates a rotation about `center`.
    #[must_use]
    pub fn about(angle_degrees: f64, center: Point) -> Self {
        Self {
            angle_degrees,
            center: Some(center),
        }
    }

    /// Builds the equivalent general transform for `canvas`.
    #[must_use]
    pub fn to_general(&self, canvas: &Canvas) -> GeneralTransform {
        let center = self.center.unwrap_or_else(|| canvas.center());
        GeneralTransform::new(rotation_matrix(self.angle_degrees, &center.to_point2()))
    }

    /// Executes the rotation, modifying the canvas in-place.
    ///
    /// # Errors
    ///
    /// Never fails for finite angles; see [`GeneralTransform::execute`].
    pub fn execute(&self, canvas: &mut Canvas) -> Result<()> {
        self.to_general(canvas).execute(canvas)
    }
}
