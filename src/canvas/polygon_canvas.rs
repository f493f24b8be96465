use tracing::debug;

use super::{Canvas, PolygonId};
use crate::error::{IntersectionError, Result};
use crate::geometry::{Line, Point};
use crate::operations::intersection::{
    assemble_region, pairwise_intersections, IntersectionIndex, IntersectionRegion,
};
use crate::operations::transform::GeneralTransform;

/// Progress of the intersection engine on a [`PolygonCanvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No intersections computed since the last line change.
    Empty,
    /// Pairwise line intersections are indexed.
    IntersectionsComputed,
    /// The overlap region of the two registered polygons is available.
    RegionAssembled,
}

/// A [`Canvas`] that also tracks line intersections and the overlap region
/// of two registered polygons.
///
/// Changing the line set or applying a transform drops computed
/// intersections; registering a polygon drops the assembled region.
#[derive(Debug, Clone)]
pub struct PolygonCanvas {
    canvas: Canvas,
    intersections: IntersectionIndex,
    interior: IntersectionIndex,
    region: Option<IntersectionRegion>,
    state: EngineState,
}

impl PolygonCanvas {
    /// Creates an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            intersections: IntersectionIndex::new(),
            interior: IntersectionIndex::new(),
            region: None,
            state: EngineState::Empty,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Every intersection point with its contributing endpoints.
    #[must_use]
    pub fn intersections(&self) -> &IntersectionIndex {
        &self.intersections
    }

    /// Intersections between lines that share no endpoint.
    #[must_use]
    pub fn interior_intersections(&self) -> &IntersectionIndex {
        &self.interior
    }

    /// The last assembled region, if still valid.
    #[must_use]
    pub fn region(&self) -> Option<&IntersectionRegion> {
        self.region.as_ref()
    }

    pub fn add_point(&mut self, point: Point) {
        self.canvas.add_point(point);
    }

    pub fn add_points(&mut self, points: &[Point]) {
        self.canvas.add_points(points);
    }

    pub fn add_line(&mut self, line: Line) {
        self.canvas.add_line(line);
        self.invalidate();
    }

    /// Appends every non-degenerate line in order.
    pub fn add_lines(&mut self, lines: &[Line]) {
        self.canvas.add_lines(lines);
        self.invalidate();
    }

    /// See [`Canvas::remove_point`]. Computed intersections are dropped
    /// only if a line was removed with the point.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::OutOfBounds` for points outside the removable range.
    pub fn remove_point(&mut self, point: &Point) -> Result<bool> {
        let lines_before = self.canvas.lines().len();
        let removed = self.canvas.remove_point(point)?;
        if self.canvas.lines().len() != lines_before {
            self.invalidate();
        }
        Ok(removed)
    }

    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.canvas.contains(point)
    }

    /// See [`Canvas::register_polygon`].
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidPolygon` if fewer than 3 vertices are given.
    pub fn register_polygon(&mut self, vertices: Vec<Point>) -> Result<PolygonId> {
        let id = self.canvas.register_polygon(vertices)?;
        self.drop_region();
        Ok(id)
    }

    /// Registers a polygon and also adds its vertices as points and its
    /// closed boundary as lines.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidPolygon` if fewer than 3 vertices are given.
    pub fn add_polygon(&mut self, vertices: Vec<Point>) -> Result<PolygonId> {
        let id = self.register_polygon(vertices)?;
        let data = self.canvas.polygon(id)?.clone();
        self.add_points(&data.vertices);
        self.add_lines(&data.edges());
        Ok(id)
    }

    /// Empties points, lines, polygons and all intersection state.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.canvas.clear_lines();
        self.canvas.clear_polygons();
        self.invalidate();
    }

    /// Applies `transform` to the canvas and to every registered polygon.
    ///
    /// Polygon vertices are rounded like line endpoints and never dropped.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` if the matrix is singular;
    /// nothing changes in that case.
    pub fn transform(&mut self, transform: &GeneralTransform) -> Result<()> {
        transform.execute(&mut self.canvas)?;
        for polygon in self.canvas.polygons_mut() {
            for v in &mut polygon.vertices {
                *v = transform.apply_rounded(v);
            }
        }
        self.invalidate();
        Ok(())
    }

    /// Intersects every pair of registered lines.
    ///
    /// Each hit is added to the canvas as a point and indexed with its four
    /// endpoints; hits between lines sharing no endpoint are also indexed as
    /// interior. Previously indexed intersections are discarded first, but
    /// hit points added by earlier calls stay in the point list, so calling
    /// this twice lists every hit point twice. Returns the number of hits.
    pub fn compute_intersections(&mut self) -> usize {
        self.intersections.clear();
        self.interior.clear();
        self.region = None;

        let hits = pairwise_intersections(self.canvas.lines());
        for hit in &hits {
            self.canvas.add_point(hit.point);
            self.intersections.extend(hit.point, &hit.endpoints);
            if hit.interior {
                self.interior.extend(hit.point, &hit.endpoints);
            }
        }

        self.state = EngineState::IntersectionsComputed;
        debug!(
            lines = self.canvas.lines().len(),
            hits = hits.len(),
            distinct = self.intersections.len(),
            interior = self.interior.len(),
            "computed line intersections"
        );
        hits.len()
    }

    /// Assembles the overlap region of the two registered polygons,
    /// computing intersections first if needed.
    ///
    /// # Errors
    ///
    /// Returns `IntersectionError::PolygonCount` unless exactly two polygons
    /// are registered, and `IntersectionError::EmptyRegion` if the region has
    /// no vertices.
    pub fn assemble_region(&mut self) -> Result<&IntersectionRegion> {
        let found = self.canvas.polygon_count();
        if found != 2 {
            return Err(IntersectionError::PolygonCount { found }.into());
        }
        if self.state == EngineState::Empty {
            self.compute_intersections();
        }

        let mut polygons = self.canvas.polygons().map(|(_, data)| data.vertices.as_slice());
        let (Some(a), Some(b)) = (polygons.next(), polygons.next()) else {
            return Err(IntersectionError::PolygonCount { found }.into());
        };
        let region = assemble_region(a, b, &self.interior)?;

        self.state = EngineState::RegionAssembled;
        Ok(&*self.region.insert(region))
    }

    fn invalidate(&mut self) {
        self.intersections.clear();
        self.interior.clear();
        self.region = None;
        self.state = EngineState::Empty;
    }

    fn drop_region(&mut self) {
        self.region = None;
        if self.state == EngineState::RegionAssembled {
            self.state = EngineState::IntersectionsComputed;
        }
    }
}
