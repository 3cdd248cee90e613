use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::circle_circle_intersect_2d;

use super::{Point, Polyline, Segment};

/// A full circle in the plane.
///
/// The radius is never negative: [`Circle::new`] clamps negative input to
/// zero, [`Circle::try_new`] rejects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle, clamping a negative radius to `0`.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Creates a circle from raw center coordinates and radius.
    #[must_use]
    pub fn from_coords(x: f64, y: f64, radius: f64) -> Self {
        Self::new(Point::new(x, y), radius)
    }

    /// Creates a new circle without clamping.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite or the radius is negative
    /// or not finite.
    pub fn try_new(center: Point, radius: f64) -> Result<Self> {
        let center = Point::try_new(center.x(), center.y())?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersection with a segment; same point set as
    /// [`Segment::intersect_circle`].
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment) -> Vec<Point> {
        segment.intersect_circle(self)
    }

    /// Intersection with another circle: zero, one (tangent) or two points.
    #[must_use]
    pub fn intersect_circle(&self, other: &Circle) -> Vec<Point> {
        circle_circle_intersect_2d(
            &self.center.to_point2(),
            self.radius,
            &other.center.to_point2(),
            other.radius,
        )
        .into_iter()
        .map(Point::from)
        .collect()
    }

    /// Intersection with every segment of a polyline, in path order.
    #[must_use]
    pub fn intersect_polyline(&self, polyline: &Polyline) -> Vec<Point> {
        polyline
            .segments()
            .iter()
            .flat_map(|s| self.intersect_segment(s))
            .collect()
    }
}
