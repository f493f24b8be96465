use tracing::trace;

use crate::geometry::{Line, Point};
use crate::math::intersect_2d::segment_intersection;

/// One accepted crossing between two registered lines.
#[derive(Debug, Clone, Copy)]
pub struct SegmentHit {
    /// The intersection point, tagged with its segment pair.
    pub point: Point,
    /// `[p1, p2, p3, p4]`: endpoints of the first and second line.
    pub endpoints: [Point; 4],
    /// `true` when the two lines share no endpoint.
    pub interior: bool,
}

/// Tests every unordered pair of distinct lines `(i, j)` with `i < j`.
///
/// Hits come back in pair order. A hit is interior iff none of the six
/// endpoint equalities among `{p1, p2, p3, p4}` holds.
#[must_use]
pub fn pairwise_intersections(lines: &[Line]) -> Vec<SegmentHit> {
    let mut hits = Vec::new();
    for (i, first) in lines.iter().enumerate() {
        for second in &lines[i + 1..] {
            let (p1, p2) = first.endpoints();
            let (p3, p4) = second.endpoints();
            let Some(point) = segment_intersection(&p1, &p2, &p3, &p4) else {
                continue;
            };

            let interior = !(p1 == p2 || p3 == p4 || p1 == p3 || p1 == p4 || p2 == p3 || p2 == p4);
            trace!(x = point.x(), y = point.y(), interior, "segment hit");
            hits.push(SegmentHit {
                point,
                endpoints: [p1, p2, p3, p4],
                interior,
            });
        }
    }
    hits
}
