pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
pub use geometry::{contains_point, Circle, Figure, Point, Polyline, Segment, Shape};
