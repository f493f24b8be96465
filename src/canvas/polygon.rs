use crate::geometry::{Line, Point};

slotmap::new_key_type! {
    /// Unique identifier for a polygon registered on a canvas.
    pub struct PolygonId;
}

/// Vertex list of a registered polygon, in boundary traversal order.
#[derive(Debug, Clone)]
pub struct PolygonData {
    pub vertices: Vec<Point>,
}

impl PolygonData {
    /// Creates polygon data from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Closed boundary edges `v[i] -> v[i + 1 mod n]`, skipping degenerate ones.
    #[must_use]
    pub fn edges(&self) -> Vec<Line> {
        let n = self.vertices.len();
        (0..n)
            .filter_map(|i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_close_the_loop_and_skip_repeats() {
        let data = PolygonData::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ]);
        let edges = data.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(*edges[2].end(), Point::new(0.0, 0.0));
    }
}
