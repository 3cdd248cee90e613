use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A point in the plane.
///
/// Equality is approximate: two points compare equal when both coordinate
/// deltas are below [`TOLERANCE`]. This relation is reflexive and symmetric
/// but not transitive, so `Point` deliberately implements neither `Eq` nor
/// `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new point, rejecting `NaN` and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFinite { x, y }.into());
        }
        Ok(Self { x, y })
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.to_point2(), &other.to_point2())
    }

    /// Returns whether the point lies strictly inside the axis-aligned box
    /// spanned by `corner1` and `corner2`, grown by [`TOLERANCE`] on each side.
    ///
    /// Only used to clip line-circle candidates to a finite segment.
    #[must_use]
    pub fn is_in_box(&self, corner1: &Point, corner2: &Point) -> bool {
        let (min_x, max_x) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
        let (min_y, max_y) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));

        self.x > min_x - TOLERANCE
            && self.x < max_x + TOLERANCE
            && self.y > min_y - TOLERANCE
            && self.y < max_y + TOLERANCE
    }

    /// Converts to an `nalgebra` point for the math kernels.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < TOLERANCE && (self.y - other.y).abs() < TOLERANCE
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        p.to_point2()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returns whether `points` holds a point equal to `p` under [`Point`]'s
/// approximate equality.
#[must_use]
pub fn contains_point(points: &[Point], p: &Point) -> bool {
    points.iter().any(|q| q == p)
}
