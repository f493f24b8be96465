use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::Point2;

/// The two segments whose crossing produced an intersection point.
///
/// Stored as raw coordinates in the order they were tested:
/// `[(p1, p2), (p3, p4)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPair {
    pub first: [Point2; 2],
    pub second: [Point2; 2],
}

impl SegmentPair {
    /// Creates a provenance record from the four segment endpoints.
    #[must_use]
    pub fn new(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Self {
        Self {
            first: [p1.to_point2(), p2.to_point2()],
            second: [p3.to_point2(), p4.to_point2()],
        }
    }
}

/// A point on the canvas plane.
///
/// Equality and hashing look at the coordinates only; an attached
/// [`SegmentPair`] never makes two points distinct.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
    segments: Option<SegmentPair>,
}

impl Point {
    /// Creates a point with no provenance.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            segments: None,
        }
    }

    /// Creates a point tagged with the segment pair that produced it.
    #[must_use]
    pub fn with_segments(x: f64, y: f64, segments: SegmentPair) -> Self {
        Self {
            x,
            y,
            segments: Some(segments),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the contributing segment pair, if this point came from an
    /// intersection test.
    #[must_use]
    pub fn segments(&self) -> Option<&SegmentPair> {
        self.segments.as_ref()
    }

    /// Replaces the provenance tag.
    pub fn set_segments(&mut self, segments: Option<SegmentPair>) {
        self.segments = segments;
    }

    /// Decomposes into `(x, y)`.
    #[must_use]
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

// -0.0 and 0.0 compare equal, so they must hash equal too.
#[allow(clippy::float_cmp)]
fn coord_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0_f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        coord_bits(self.x) == coord_bits(other.x) && coord_bits(self.y) == coord_bits(other.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coord_bits(self.x).hash(state);
        coord_bits(self.y).hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.coords()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.segments {
            Some(s) => write!(
                f,
                "Point({}, {}, segments=[(({}, {}), ({}, {})), (({}, {}), ({}, {}))])",
                self.x,
                self.y,
                s.first[0].x,
                s.first[0].y,
                s.first[1].x,
                s.first[1].y,
                s.second[0].x,
                s.second[0].y,
                s.second[1].x,
                s.second[1].y,
            ),
            None => write!(f, "Point({}, {})", self.x, self.y),
        }
    }
}
