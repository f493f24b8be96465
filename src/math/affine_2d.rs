use super::{Matrix3, Point2, Vector2, Vector3};

/// Builds a homogeneous translation matrix.
#[must_use]
pub fn translation_matrix(dx: f64, dy: f64) -> Matrix3 {
    Matrix3::new_translation(&Vector2::new(dx, dy))
}

/// Builds a rotation by `angle_degrees` about `center`:
/// `translate(center) * rotate(angle) * translate(-center)`.
#[must_use]
pub fn rotation_matrix(angle_degrees: f64, center: &Point2) -> Matrix3 {
    about(center, &Matrix3::new_rotation(angle_degrees.to_radians()))
}

/// Builds a scaling by `(sx, sy)` about `center`:
/// `translate(center) * scale(sx, sy) * translate(-center)`.
#[must_use]
pub fn scaling_matrix(sx: f64, sy: f64, center: &Point2) -> Matrix3 {
    about(center, &Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)))
}

/// Composes two transforms so that `first` is applied before `second`.
#[must_use]
pub fn compose(first: &Matrix3, second: &Matrix3) -> Matrix3 {
    second * first
}

/// Multiplies `[x, y, 1]` by `matrix` and returns the first two components.
#[must_use]
pub fn transform_point(matrix: &Matrix3, point: &Point2) -> Point2 {
    let v = matrix * Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

fn about(center: &Point2, linear: &Matrix3) -> Matrix3 {
    let t = Matrix3::new_translation(&center.coords);
    let t_neg = Matrix3::new_translation(&(-center.coords));
    t * linear * t_neg
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn translate_moves_point() {
        let m = translation_matrix(3.0, -2.0);
        let q = transform_point(&m, &Point2::new(1.0, 1.0));
        assert_relative_eq!(q.x, 4.0);
        assert_relative_eq!(q.y, -1.0);
    }

    #[test]
    fn homogeneous_layout() {
        let t = translation_matrix(3.0, -2.0);
        assert_relative_eq!(t[(0, 2)], 3.0);
        assert_relative_eq!(t[(1, 2)], -2.0);
        assert_relative_eq!(t[(2, 2)], 1.0);

        let s = scaling_matrix(2.0, 5.0, &Point2::origin());
        assert_relative_eq!(s, Matrix3::new(2.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_quarter_turn_about_center() {
        let m = rotation_matrix(90.0, &Point2::new(5.0, 5.0));
        let q = transform_point(&m, &Point2::new(10.0, 5.0));
        assert_relative_eq!(q.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn center_is_fixed_point() {
        let c = Point2::new(12.0, -7.0);
        for m in [rotation_matrix(37.0, &c), scaling_matrix(2.5, 0.5, &c)] {
            let q = transform_point(&m, &c);
            assert_relative_eq!(q.x, c.x, epsilon = 1e-12);
            assert_relative_eq!(q.y, c.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn scale_about_center() {
        let m = scaling_matrix(2.0, 3.0, &Point2::new(1.0, 1.0));
        let q = transform_point(&m, &Point2::new(2.0, 2.0));
        assert_relative_eq!(q.x, 3.0);
        assert_relative_eq!(q.y, 4.0);
    }

    #[test]
    fn compose_applies_first_then_second() {
        let first = translation_matrix(1.0, 0.0);
        let second = scaling_matrix(2.0, 2.0, &Point2::origin());
        let q = transform_point(&compose(&first, &second), &Point2::new(1.0, 1.0));
        assert_relative_eq!(q.x, 4.0);
        assert_relative_eq!(q.y, 2.0);
    }

    #[test]
    fn opposite_rotations_cancel() {
        let c = Point2::new(150.0, 150.0);
        let m = compose(&rotation_matrix(33.0, &c), &rotation_matrix(-33.0, &c));
        assert_relative_eq!(m, Matrix3::identity(), epsilon = 1e-9);
    }
}
