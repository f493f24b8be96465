use tracing::trace;

use super::intersect_2d::segment_intersection;
use crate::error::{IntersectionError, Result};
use crate::geometry::Point;

/// Even-odd crossing-number test of `point` against a closed vertex list.
///
/// Edge `i` joins `vertices[i]` to `vertices[i - 1 mod n]`. Points exactly on
/// an edge get whatever the crossing formula yields; ties are not broken.
#[must_use]
pub fn point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    let (x, y) = point.coords();

    let mut inside = false;
    for i in 0..n {
        let (xi, yi) = vertices[i].coords();
        let (xj, yj) = vertices[(i + n - 1) % n].coords();

        if (yi > y) != (yj > y) && x <= (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
    }

    trace!(x, y, inside, "classified point against polygon");
    inside
}

/// Arithmetic mean of a point set.
///
/// # Errors
///
/// Returns `IntersectionError::EmptyRegion` if `points` is empty.
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(IntersectionError::EmptyRegion.into());
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Ok(Point::new(sx / n, sy / n))
}

/// Sorts points by `atan2(y - cy, x - cx)` around `center`, ascending.
///
/// The sort is stable, so points at equal angles keep their input order.
pub fn sort_by_angle(points: &mut [Point], center: &Point) {
    let angle = |p: &Point| (p.y() - center.y()).atan2(p.x() - center.x());
    points.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x() * points[j].y() - points[j].x() * points[i].y();
    }
    sum * 0.5
}

/// Signed area of the triangle `a, b, c`, positive when counter-clockwise
/// in a y-up frame.
#[must_use]
pub fn triangle_area(a: &Point, b: &Point, c: &Point) -> f64 {
    ((b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())) / 2.0
}

/// Returns `true` if no two non-adjacent edges of the closed polygon meet.
#[must_use]
pub fn is_simple_polygon(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let (a0, a1) = (&points[i], &points[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b0, b1) = (&points[j], &points[(j + 1) % n]);
            if segment_intersection(a0, a1, b0, b1).is_some() {
                return false;
            }
        }
    }
    true
}
