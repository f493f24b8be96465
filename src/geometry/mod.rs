pub mod line;
pub mod point;

pub use line::Line;
pub use point::{Point, SegmentPair};
