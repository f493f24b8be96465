use crate::canvas::Canvas;
use crate::error::Result;
use crate::math::affine_2d::translation_matrix;

use super::GeneralTransform;

/// Shifts canvas content by a displacement.
#[derive(Debug, Clone, Copy)]
pub struct Translate {
    dx: f64,
    dy: f64,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Builds the equivalent general transform.
    #[must_use]
    pub fn to_general(&self) -> GeneralTransform {
        GeneralTransform::new(translation_matrix(self.dx, self.dy))
    }

    /// Executes the translation, modifying the canvas in-place.
    ///
    /// # Errors
    ///
    /// Never fails for finite offsets; see [`GeneralTransform::execute`].
    pub fn execute(&self, canvas: &mut Canvas) -> Result<()> {
        self.to_general().execute(canvas)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn shifts_points() {
        let mut canvas = Canvas::new(50, 50).unwrap();
        canvas.add_point(Point::new(1.0, 2.0));
        Translate::new(3.0, 4.0).execute(&mut canvas).unwrap();
        assert_eq!(canvas.points(), &[Point::new(4.0, 6.0)]);
    }
}
