use thiserror::Error;

/// Top-level error type for the planar shape kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Intersection(#[from] IntersectionError),
}

/// Errors raised by geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: both endpoints are ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("degenerate triangle: the three vertices are collinear")]
    DegenerateTriangle,
}

/// Errors raised by canvas bookkeeping.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },

    #[error("a polygon needs at least 3 vertices, got {vertices}")]
    InvalidPolygon { vertices: usize },

    #[error("polygon not found")]
    PolygonNotFound,
}

/// Errors raised while building or applying an affine transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transformation matrix is singular")]
    SingularMatrix,

    #[error("transformation matrix must be 3x3, got {rows}x{cols}")]
    InvalidMatrixShape { rows: usize, cols: usize },
}

/// Errors raised by the polygon intersection engine.
#[derive(Debug, Error)]
pub enum IntersectionError {
    #[error("region assembly needs exactly 2 registered polygons, found {found}")]
    PolygonCount { found: usize },

    #[error("intersection region has no vertices")]
    EmptyRegion,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
