mod intersect;
mod length;

pub use intersect::FigureIntersect;
pub use length::Length;
