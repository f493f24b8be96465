pub mod affine_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// Raw 2D coordinate pair, used where no provenance is attached.
pub type Point2 = nalgebra::Point2<f64>;

pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D homogeneous vector `[x, y, 1]`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 homogeneous 2D affine transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Tolerance for floating-point comparisons in helper predicates.
///
/// The core intersection and classification predicates compare exactly.
pub const TOLERANCE: f64 = 1e-10;
