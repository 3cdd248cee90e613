pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used for point equality, bounding-box containment and the tangency
/// classification of the circle kernels.
pub const TOLERANCE: f64 = 1e-5;
