mod occupied;
mod polygon;
mod polygon_canvas;

pub use occupied::OccupiedCells;
pub use polygon::{PolygonData, PolygonId};
pub use polygon_canvas::{EngineState, PolygonCanvas};

use nalgebra::DMatrix;
use slotmap::SlotMap;
use tracing::trace;

use crate::error::{CanvasError, GeometryError, PlanarError, Result};
use crate::geometry::{Line, Point};
use crate::math::polygon_2d::triangle_area;

/// Discretized drawing surface: an occupancy grid plus the ordered points,
/// lines and polygons added to it.
///
/// The grid has `height` rows and `width` columns; a point at `(x, y)` lives
/// in cell `(trunc(y), trunc(x))`.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    grid: DMatrix<bool>,
    points: Vec<Point>,
    lines: Vec<Line>,
    polygons: SlotMap<PolygonId, PolygonData>,
    polygon_order: Vec<PolygonId>,
}

impl Canvas {
    /// Creates an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height }.into());
        }
        Ok(Self {
            width,
            height,
            grid: DMatrix::from_element(height, width, false),
            points: Vec::new(),
            lines: Vec::new(),
            polygons: SlotMap::with_key(),
            polygon_order: Vec::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Canvas center with integer division, the default pivot for
    /// rotations and scalings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// The occupancy grid, `height` rows by `width` columns.
    #[must_use]
    pub fn grid(&self) -> &DMatrix<bool> {
        &self.grid
    }

    /// Points in insertion order, duplicates included.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    // --- Point operations ---

    /// Appends a point and marks its cell if it lies on the grid.
    ///
    /// Points off the grid are still recorded in the point list.
    pub fn add_point(&mut self, point: Point) {
        if let Some(cell) = self.cell_index(&point) {
            self.grid[cell] = true;
        }
        self.points.push(point);
    }

    /// Adds every point in order.
    pub fn add_points(&mut self, points: &[Point]) {
        for &point in points {
            self.add_point(point);
        }
    }

    /// Clears the point's cell, drops the first equal list entry and the
    /// first line incident to it.
    ///
    /// Returns `true` if a list entry was removed.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::OutOfBounds` unless the point lies in
    /// `[0, width - 1) x [0, height - 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn remove_point(&mut self, point: &Point) -> Result<bool> {
        let (x, y) = point.coords();
        let x_range = 0.0..(self.width - 1) as f64;
        let y_range = 0.0..(self.height - 1) as f64;
        if !x_range.contains(&x) || !y_range.contains(&y) {
            return Err(self.out_of_bounds(point));
        }

        if let Some(cell) = self.cell_index(point) {
            self.grid[cell] = false;
        }

        let removed = match self.points.iter().position(|p| p == point) {
            Some(idx) => {
                self.points.remove(idx);
                true
            }
            None => false,
        };

        if let Some(idx) = self.lines.iter().position(|l| l.is_incident_to(point)) {
            self.lines.remove(idx);
        }

        trace!(x, y, removed, "removed point");
        Ok(removed)
    }

    /// Returns the grid value at the point's cell, `false` off the grid.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.cell_index(point).is_some_and(|cell| self.grid[cell])
    }

    /// Resets the grid and empties the point list.
    pub fn clear(&mut self) {
        self.grid.fill(false);
        self.points.clear();
    }

    /// Walks the occupied cells in row-major order.
    #[must_use]
    pub fn occupied(&self) -> OccupiedCells<'_> {
        OccupiedCells::new(&self.grid)
    }

    /// Adds every integer step point of the segment `start -> end`,
    /// endpoints included, and returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::OutOfBounds` if an endpoint lies outside
    /// `[0, width] x [0, height]`.
    pub fn rasterize_segment(&mut self, start: &Point, end: &Point) -> Result<usize> {
        self.check_drawable(start)?;
        self.check_drawable(end)?;
        Ok(self.walk_segment(start, end, f64::trunc))
    }

    // --- Triangle operations ---

    /// Adds the three vertices, then walks each edge `p1 -> p2 -> p3 -> p1`
    /// rounding every step to the nearest cell. Returns the number of
    /// points added.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::OutOfBounds` if a vertex lies outside
    /// `[0, width] x [0, height]`; nothing is added in that case.
    pub fn draw_triangle(&mut self, p1: &Point, p2: &Point, p3: &Point) -> Result<usize> {
        let corners = [*p1, *p2, *p3];
        for corner in &corners {
            self.check_drawable(corner)?;
        }

        self.add_points(&corners);
        let mut added = corners.len();
        for i in 0..3 {
            added += self.walk_segment(&corners[i], &corners[(i + 1) % 3], f64::round);
        }
        trace!(added, "drew triangle outline");
        Ok(added)
    }

    /// Adds every integer point of the triangle's bounding box whose
    /// barycentric weights are all non-negative. Returns the number of
    /// points added.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::OutOfBounds` if a vertex lies outside
    /// `[0, width) x [0, height)`, and `GeometryError::DegenerateTriangle`
    /// if the vertices are collinear.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn fill_triangle(&mut self, p1: &Point, p2: &Point, p3: &Point) -> Result<usize> {
        for corner in [p1, p2, p3] {
            if self.cell_index(corner).is_none() {
                return Err(self.out_of_bounds(corner));
            }
        }

        let area = triangle_area(p1, p2, p3);
        if area == 0.0 {
            return Err(GeometryError::DegenerateTriangle.into());
        }

        // Vertices are on the grid, so the truncated box stays within it.
        let x_min = p1.x().min(p2.x()).min(p3.x()) as i64;
        let x_max = p1.x().max(p2.x()).max(p3.x()) as i64;
        let y_min = p1.y().min(p2.y()).min(p3.y()) as i64;
        let y_max = p1.y().max(p2.y()).max(p3.y()) as i64;

        let mut added = 0;
        for x in x_min..=x_max {
            for y in y_min..=y_max {
                let p = Point::new(x as f64, y as f64);
                let u = triangle_area(&p, p2, p3) / area;
                let v = triangle_area(p1, &p, p3) / area;
                let w = triangle_area(p1, p2, &p) / area;
                if u < 0.0 || v < 0.0 || w < 0.0 {
                    continue;
                }
                self.add_point(p);
                added += 1;
            }
        }
        trace!(added, "filled triangle");
        Ok(added)
    }

    // --- Line operations ---

    /// Appends a line unconditionally.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Appends every non-degenerate line in order.
    pub fn add_lines(&mut self, lines: &[Line]) {
        for line in lines.iter().filter(|l| !l.is_degenerate()) {
            self.add_line(*line);
        }
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub(crate) fn clear_lines(&mut self) {
        self.lines.clear();
    }

    // --- Polygon operations ---

    /// Registers a polygon by its boundary vertices and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidPolygon` if fewer than 3 vertices are given.
    pub fn register_polygon(&mut self, vertices: Vec<Point>) -> Result<PolygonId> {
        if vertices.len() < 3 {
            return Err(CanvasError::InvalidPolygon {
                vertices: vertices.len(),
            }
            .into());
        }
        let id = self.polygons.insert(PolygonData::new(vertices));
        self.polygon_order.push(id);
        Ok(id)
    }

    /// Returns a registered polygon.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::PolygonNotFound` if the ID is stale.
    pub fn polygon(&self, id: PolygonId) -> Result<&PolygonData> {
        self.polygons
            .get(id)
            .ok_or_else(|| CanvasError::PolygonNotFound.into())
    }

    /// Registered polygons in registration order.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonId, &PolygonData)> + '_ {
        self.polygon_order
            .iter()
            .filter_map(|&id| self.polygons.get(id).map(|data| (id, data)))
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub(crate) fn polygons_mut(&mut self) -> impl Iterator<Item = &mut PolygonData> + '_ {
        self.polygons.values_mut()
    }

    pub(crate) fn clear_polygons(&mut self) {
        self.polygons.clear();
        self.polygon_order.clear();
    }

    // --- Grid rebuild ---

    /// Replaces the point list and rebuilds the grid from scratch.
    pub(crate) fn reset_points(&mut self, points: Vec<Point>) {
        self.clear();
        for point in points {
            self.add_point(point);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn check_drawable(&self, point: &Point) -> Result<()> {
        let (x, y) = point.coords();
        if (0.0..=self.width as f64).contains(&x) && (0.0..=self.height as f64).contains(&y) {
            Ok(())
        } else {
            Err(self.out_of_bounds(point))
        }
    }

    fn out_of_bounds(&self, point: &Point) -> PlanarError {
        CanvasError::OutOfBounds {
            x: point.x(),
            y: point.y(),
            width: self.width,
            height: self.height,
        }
        .into()
    }

    /// DDA walk from `start` to `end`, snapping each step with `snap`.
    /// A walk shorter than one step adds nothing.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn walk_segment(&mut self, start: &Point, end: &Point, snap: fn(f64) -> f64) -> usize {
        let dx = end.x() - start.x();
        let dy = end.y() - start.y();
        let steps = dx.abs().max(dy.abs()) as usize;
        if steps == 0 {
            return 0;
        }

        let x_inc = dx / steps as f64;
        let y_inc = dy / steps as f64;
        for i in 0..=steps {
            let t = i as f64;
            let x = snap(start.x() + t * x_inc);
            let y = snap(start.y() + t * y_inc);
            self.add_point(Point::new(x, y));
        }
        steps + 1
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn cell_index(&self, point: &Point) -> Option<(usize, usize)> {
        let (x, y) = point.coords();
        if (0.0..self.width as f64).contains(&x) && (0.0..self.height as f64).contains(&y) {
            Some((y as usize, x as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn zero_width_rejected() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(PlanarError::Canvas(CanvasError::InvalidDimensions { width: 0, height: 10 }))
        ));
        assert!(Canvas::new(10, 0).is_err());
    }

    #[test]
    fn add_marks_grid_and_keeps_off_grid_points() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.add_point(p(3.0, 4.0));
        canvas.add_point(p(9.0, 9.0));
        canvas.add_point(p(12.0, 4.0));
        canvas.add_point(p(-1.0, 0.0));

        assert_eq!(canvas.points().len(), 4);
        assert!(canvas.grid()[(4, 3)]);
        assert!(canvas.contains(&p(9.0, 9.0)));
        assert!(!canvas.contains(&p(12.0, 4.0)));
        assert!(!canvas.contains(&p(-1.0, 0.0)));
        assert_eq!(canvas.occupied().count(), 2);
    }

    #[test]
    fn fractional_point_uses_truncated_cell() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.add_point(p(2.7, 5.2));
        assert!(canvas.grid()[(5, 2)]);
        assert!(canvas.contains(&p(2.1, 5.9)));
    }

    #[test]
    fn remove_bounds_are_one_cell_tighter() {
        let mut canvas = Canvas::new(300, 300).unwrap();
        canvas.add_point(p(299.0, 299.0));
        canvas.add_point(p(298.0, 298.0));

        assert!(matches!(
            canvas.remove_point(&p(299.0, 299.0)),
            Err(PlanarError::Canvas(CanvasError::OutOfBounds { .. }))
        ));
        assert!(canvas.remove_point(&p(298.0, 298.0)).unwrap());
        assert!(!canvas.contains(&p(298.0, 298.0)));
        assert_eq!(canvas.points(), &[p(299.0, 299.0)]);
    }

    #[test]
    fn remove_drops_first_duplicate_and_first_incident_line() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let a = p(1.0, 1.0);
        let b = p(5.0, 5.0);
        let c = p(9.0, 1.0);
        canvas.add_points(&[a, b, a]);
        canvas.add_line(Line::new(b, c).unwrap());
        canvas.add_line(Line::new(a, b).unwrap());
        canvas.add_line(Line::new(c, a).unwrap());

        assert!(canvas.remove_point(&a).unwrap());
        assert_eq!(canvas.points(), &[b, a]);
        assert_eq!(canvas.lines().len(), 2);
        assert_eq!(canvas.lines()[0], Line::new(b, c).unwrap());
        assert_eq!(canvas.lines()[1], Line::new(c, a).unwrap());
        // The cell is cleared even though a duplicate remains in the list.
        assert!(!canvas.contains(&a));
    }

    #[test]
    fn remove_missing_point_reports_false() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        assert!(!canvas.remove_point(&p(3.0, 3.0)).unwrap());
    }

    #[test]
    fn clear_keeps_lines() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.add_point(p(1.0, 2.0));
        canvas.add_line(Line::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap());
        canvas.clear();
        assert!(canvas.points().is_empty());
        assert_eq!(canvas.occupied().next(), None);
        assert_eq!(canvas.lines().len(), 1);
    }

    #[test]
    fn add_lines_skips_degenerate() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let a = p(1.0, 1.0);
        canvas.add_lines(&[
            Line::new_unchecked(a, a),
            Line::new(a, p(2.0, 3.0)).unwrap(),
        ]);
        assert_eq!(canvas.lines().len(), 1);
    }

    #[test]
    fn occupied_walks_row_major_and_restarts() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        canvas.add_points(&[p(4.0, 0.0), p(1.0, 3.0), p(0.0, 0.0), p(2.0, 3.0)]);

        let first: Vec<Point> = canvas.occupied().collect();
        assert_eq!(first, vec![p(0.0, 0.0), p(4.0, 0.0), p(1.0, 3.0), p(2.0, 3.0)]);
        let second: Vec<Point> = canvas.occupied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn polygon_needs_three_vertices() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        assert!(matches!(
            canvas.register_polygon(vec![p(0.0, 0.0), p(1.0, 1.0)]),
            Err(PlanarError::Canvas(CanvasError::InvalidPolygon { vertices: 2 }))
        ));
        let id = canvas
            .register_polygon(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)])
            .unwrap();
        assert_eq!(canvas.polygon(id).unwrap().vertices.len(), 3);
        assert_eq!(canvas.polygon_count(), 1);
    }

    #[test]
    fn polygons_iterate_in_registration_order() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let first = canvas
            .register_polygon(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)])
            .unwrap();
        let second = canvas
            .register_polygon(vec![p(9.0, 9.0), p(5.0, 9.0), p(9.0, 5.0)])
            .unwrap();
        let ids: Vec<PolygonId> = canvas.polygons().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn rasterize_diagonal() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let added = canvas.rasterize_segment(&p(0.0, 0.0), &p(3.0, 3.0)).unwrap();
        assert_eq!(added, 4);
        assert_eq!(
            canvas.points(),
            &[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]
        );
    }

    #[test]
    fn rasterize_shallow_slope_truncates() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.rasterize_segment(&p(0.0, 0.0), &p(4.0, 2.0)).unwrap();
        assert_eq!(
            canvas.points(),
            &[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(3.0, 1.0), p(4.0, 2.0)]
        );
    }

    #[test]
    fn rasterize_zero_steps_and_bounds() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        assert_eq!(canvas.rasterize_segment(&p(2.0, 2.0), &p(2.5, 2.0)).unwrap(), 0);
        assert!(canvas.points().is_empty());
        assert!(canvas.rasterize_segment(&p(0.0, 0.0), &p(11.0, 2.0)).is_err());
        // The far border itself is allowed.
        assert!(canvas.rasterize_segment(&p(0.0, 0.0), &p(10.0, 10.0)).is_ok());
    }

    #[test]
    fn triangle_outline_rounds_steps() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let added = canvas
            .draw_triangle(&p(0.0, 0.0), &p(4.0, 2.0), &p(0.0, 2.0))
            .unwrap();
        assert_eq!(added, 3 + 5 + 5 + 3);
        assert_eq!(&canvas.points()[..3], &[p(0.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]);
        // (1, 0.5) rounds up where truncation would stay on row 0.
        assert!(canvas.contains(&p(1.0, 1.0)));
        assert!(!canvas.contains(&p(1.0, 0.0)));
    }

    #[test]
    fn triangle_outline_checks_every_vertex_first() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        assert!(matches!(
            canvas.draw_triangle(&p(0.0, 0.0), &p(5.0, 5.0), &p(11.0, 0.0)),
            Err(PlanarError::Canvas(CanvasError::OutOfBounds { .. }))
        ));
        assert!(canvas.points().is_empty());
        assert!(canvas.draw_triangle(&p(0.0, 0.0), &p(10.0, 10.0), &p(0.0, 10.0)).is_ok());
    }

    #[test]
    fn fill_covers_triangle_in_either_orientation() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));

        let mut ccw = Canvas::new(10, 10).unwrap();
        assert_eq!(ccw.fill_triangle(&a, &b, &c).unwrap(), 15);
        assert!(ccw.contains(&p(1.0, 1.0)));
        assert!(ccw.contains(&p(2.0, 2.0)));
        assert!(!ccw.contains(&p(3.0, 3.0)));

        let mut cw = Canvas::new(10, 10).unwrap();
        assert_eq!(cw.fill_triangle(&c, &b, &a).unwrap(), 15);
        let first: Vec<Point> = ccw.occupied().collect();
        let second: Vec<Point> = cw.occupied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fill_rejects_far_border_and_collinear_vertices() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        assert!(matches!(
            canvas.fill_triangle(&p(0.0, 0.0), &p(10.0, 0.0), &p(0.0, 5.0)),
            Err(PlanarError::Canvas(CanvasError::OutOfBounds { .. }))
        ));
        assert!(matches!(
            canvas.fill_triangle(&p(0.0, 0.0), &p(2.0, 2.0), &p(4.0, 4.0)),
            Err(PlanarError::Geometry(GeometryError::DegenerateTriangle))
        ));
        assert!(canvas.points().is_empty());
    }
}
