use crate::math::intersect_2d::{line_circle_intersect_2d, segment_segment_intersect_2d};

use super::{Circle, Point, Polyline};

/// A finite line segment between two points.
///
/// Degenerate segments (`start == end`) are allowed; they have zero length
/// and never intersect anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Intersection with another segment: zero or one point.
    ///
    /// Collinear segments report nothing, even when they overlap.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Vec<Point> {
        segment_segment_intersect_2d(
            &self.start.to_point2(),
            &self.end.to_point2(),
            &other.start.to_point2(),
            &other.end.to_point2(),
        )
        .map(Point::from)
        .into_iter()
        .collect()
    }

    /// Intersection with a circle: zero, one or two points, in no particular
    /// order.
    #[must_use]
    pub fn intersect_circle(&self, circle: &Circle) -> Vec<Point> {
        line_circle_intersect_2d(
            &self.start.to_point2(),
            &self.end.to_point2(),
            &circle.center().to_point2(),
            circle.radius(),
        )
        .into_iter()
        .map(Point::from)
        .filter(|p| p.is_in_box(&self.start, &self.end))
        .collect()
    }

    /// Intersection with every segment of a polyline, in path order.
    ///
    /// A crossing at a shared polyline vertex is reported once per adjacent
    /// segment.
    #[must_use]
    pub fn intersect_polyline(&self, polyline: &Polyline) -> Vec<Point> {
        polyline
            .segments()
            .iter()
            .flat_map(|s| self.intersect_segment(s))
            .collect()
    }
}
