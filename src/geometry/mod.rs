mod circle;
mod point;
mod polyline;
mod segment;
mod shape;

pub use circle::Circle;
pub use point::{contains_point, Point};
pub use polyline::Polyline;
pub use segment::Segment;
pub use shape::{Figure, Shape};
