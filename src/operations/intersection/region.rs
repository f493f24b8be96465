use std::collections::HashSet;

use tracing::debug;

use super::IntersectionIndex;
use crate::error::Result;
use crate::geometry::{Line, Point};
use crate::math::polygon_2d::{centroid, point_in_polygon, sort_by_angle};

/// Boundary of the overlap between two polygons, ordered by angle around
/// its centroid. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionRegion {
    pub boundary: Vec<Point>,
    pub centroid: Point,
}

impl IntersectionRegion {
    /// Closed boundary edges `boundary[i] -> boundary[i + 1 mod n]`.
    ///
    /// A single-vertex region yields one degenerate edge.
    #[must_use]
    pub fn edges(&self) -> Vec<Line> {
        let n = self.boundary.len();
        (0..n)
            .map(|i| Line::new_unchecked(self.boundary[i], self.boundary[(i + 1) % n]))
            .collect()
    }

    /// Spokes from the centroid to every boundary vertex, in boundary order.
    #[must_use]
    pub fn spokes(&self) -> Vec<Line> {
        self.boundary
            .iter()
            .map(|&v| Line::new_unchecked(self.centroid, v))
            .collect()
    }
}

/// Builds the overlap region of polygons `a` and `b`.
///
/// The vertex set is: vertices of `a` inside `b`, then vertices of `b`
/// inside `a`, then the interior intersection points, deduplicated by
/// coordinates. It is then sorted by `atan2` around its centroid.
///
/// # Errors
///
/// Returns `IntersectionError::EmptyRegion` if no vertex survives.
pub fn assemble_region(a: &[Point], b: &[Point], interior: &IntersectionIndex) -> Result<IntersectionRegion> {
    let mut seen = HashSet::new();
    let mut vertices = Vec::new();

    let kept_a = a.iter().filter(|v| point_in_polygon(v, b));
    let kept_b = b.iter().filter(|v| point_in_polygon(v, a));
    for &v in kept_a.chain(kept_b).chain(interior.keys()) {
        if seen.insert(v) {
            vertices.push(v);
        }
    }

    let center = centroid(&vertices)?;
    sort_by_angle(&mut vertices, &center);

    debug!(
        vertices = vertices.len(),
        cx = center.x(),
        cy = center.y(),
        "assembled intersection region"
    );
    Ok(IntersectionRegion {
        boundary: vertices,
        centroid: center,
    })
}
