mod index;
mod region;
mod sweep;

pub use index::IntersectionIndex;
pub use region::{assemble_region, IntersectionRegion};
pub use sweep::{pairwise_intersections, SegmentHit};
