pub mod canvas;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use canvas::{Canvas, PolygonCanvas, PolygonId};
pub use error::{PlanarError, Result};
pub use geometry::{Line, Point, SegmentPair};
