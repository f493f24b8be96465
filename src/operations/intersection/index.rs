use std::collections::HashMap;

use crate::geometry::Point;

/// Maps an intersection point to the segment endpoints that produced it.
///
/// Keys compare by coordinates and are kept in discovery order; a later hit
/// at the same coordinates extends the existing entry.
#[derive(Debug, Clone, Default)]
pub struct IntersectionIndex {
    order: Vec<Point>,
    contributors: HashMap<Point, Vec<Point>>,
}

impl IntersectionIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `endpoints` to the entry for `point`, creating it if needed.
    pub fn extend(&mut self, point: Point, endpoints: &[Point]) {
        let entry = self.contributors.entry(point).or_insert_with(|| {
            self.order.push(point);
            Vec::new()
        });
        entry.extend_from_slice(endpoints);
    }

    /// Keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &Point> + '_ {
        self.order.iter()
    }

    /// Contributing endpoints recorded for `point`.
    #[must_use]
    pub fn get(&self, point: &Point) -> Option<&[Point]> {
        self.contributors.get(point).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.contributors.contains_key(point)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.contributors.clear();
    }
}
