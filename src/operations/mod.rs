pub mod intersection;
pub mod transform;
