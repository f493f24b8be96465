use crate::geometry::{Point, SegmentPair};

/// Bounded segment-segment intersection in 2D.
///
/// Solves the two infinite lines through `(p1, p2)` and `(p3, p4)` with the
/// determinant formula, then keeps the result only if it lies inside the
/// closed bounding box of both segments. Parallel and coincident lines give
/// `None`, even when collinear segments overlap.
///
/// The returned point carries the tested segments as its [`SegmentPair`].
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn segment_intersection(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Option<Point> {
    let denom = (p1.x() - p2.x()) * (p3.y() - p4.y()) - (p1.y() - p2.y()) * (p3.x() - p4.x());
    if denom == 0.0 {
        return None;
    }

    let a = p1.x() * p2.y() - p1.y() * p2.x();
    let b = p3.x() * p4.y() - p3.y() * p4.x();
    let x = (a * (p3.x() - p4.x()) - (p1.x() - p2.x()) * b) / denom;
    let y = (a * (p3.y() - p4.y()) - (p1.y() - p2.y()) * b) / denom;

    if within_box(x, y, p1, p2) && within_box(x, y, p3, p4) {
        Some(Point::with_segments(x, y, SegmentPair::new(p1, p2, p3, p4)))
    } else {
        None
    }
}

/// Closed bounding-box test of `(x, y)` against the box spanned by `a` and `b`.
fn within_box(x: f64, y: f64, a: &Point, b: &Point) -> bool {
    a.x().min(b.x()) <= x && x <= a.x().max(b.x()) && a.y().min(b.y()) <= y && y <= a.y().max(b.y())
}
