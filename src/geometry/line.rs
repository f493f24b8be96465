use std::fmt;

use crate::error::{GeometryError, Result};

use super::Point;

/// A finite segment between two points.
///
/// Equality compares both endpoints in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// Creates a segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if both endpoints coincide.
    pub fn new(start: Point, end: Point) -> Result<Self> {
        if start == end {
            return Err(GeometryError::DegenerateSegment {
                x: start.x(),
                y: start.y(),
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Creates a segment without checking for coincident endpoints.
    ///
    /// Transforms can collapse a segment; callers that care filter with
    /// [`Line::is_degenerate`].
    #[must_use]
    pub fn new_unchecked(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Decomposes into `(start, end)`.
    #[must_use]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if either endpoint equals `point`.
    #[must_use]
    pub fn is_incident_to(&self, point: &Point) -> bool {
        self.start == *point || self.end == *point
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.start, self.end)
    }
}
