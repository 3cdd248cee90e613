use tracing::trace;

use super::{Circle, Point, Polyline, Segment};

/// Capability shared by every figure kind.
pub trait Shape {
    /// Returns the length of the figure: perimeter for closed curves, path
    /// length for open ones and `0` for a point.
    fn length(&self) -> f64;

    /// Computes the intersection points of `self` with a figure whose kind
    /// is only known at runtime.
    ///
    /// The result is symmetric in its operands up to ordering and
    /// multiplicity. Points take part in no intersection and always yield an
    /// empty result.
    fn intersect(&self, other: &Figure) -> Vec<Point>;
}

/// Closed set of figure kinds, used to store heterogeneous figures and to
/// resolve a pairwise intersection when both concrete kinds are only known
/// at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Point(Point),
    Segment(Segment),
    Circle(Circle),
    Polyline(Polyline),
}

impl Figure {
    /// Returns the lowercase name of the figure kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment(_) => "segment",
            Self::Circle(_) => "circle",
            Self::Polyline(_) => "polyline",
        }
    }

    /// Returns whether this figure can take part in an intersection.
    #[must_use]
    pub fn is_intersectable(&self) -> bool {
        !matches!(self, Self::Point(_))
    }
}

impl Shape for Figure {
    fn length(&self) -> f64 {
        match self {
            Self::Point(p) => p.length(),
            Self::Segment(s) => s.length(),
            Self::Circle(c) => c.length(),
            Self::Polyline(pl) => pl.length(),
        }
    }

    fn intersect(&self, other: &Figure) -> Vec<Point> {
        trace!(lhs = self.kind(), rhs = other.kind(), "dispatching intersection");
        match self {
            Self::Point(p) => p.intersect(other),
            Self::Segment(s) => s.intersect(other),
            Self::Circle(c) => c.intersect(other),
            Self::Polyline(pl) => pl.intersect(other),
        }
    }
}

impl Shape for Point {
    fn length(&self) -> f64 {
        0.0
    }

    fn intersect(&self, _other: &Figure) -> Vec<Point> {
        Vec::new()
    }
}

impl Shape for Segment {
    fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    fn intersect(&self, other: &Figure) -> Vec<Point> {
        match other {
            Figure::Point(_) => Vec::new(),
            Figure::Segment(s) => self.intersect_segment(s),
            Figure::Circle(c) => self.intersect_circle(c),
            Figure::Polyline(pl) => self.intersect_polyline(pl),
        }
    }
}

impl Shape for Circle {
    fn length(&self) -> f64 {
        std::f64::consts::TAU * self.radius()
    }

    fn intersect(&self, other: &Figure) -> Vec<Point> {
        match other {
            Figure::Point(_) => Vec::new(),
            Figure::Segment(s) => self.intersect_segment(s),
            Figure::Circle(c) => self.intersect_circle(c),
            Figure::Polyline(pl) => self.intersect_polyline(pl),
        }
    }
}

impl Shape for Polyline {
    fn length(&self) -> f64 {
        self.points()
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    fn intersect(&self, other: &Figure) -> Vec<Point> {
        match other {
            Figure::Point(_) => Vec::new(),
            Figure::Segment(s) => self.intersect_segment(s),
            Figure::Circle(c) => self.intersect_circle(c),
            Figure::Polyline(pl) => self.intersect_polyline(pl),
        }
    }
}

impl From<Point> for Figure {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Figure {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Polyline> for Figure {
    fn from(pl: Polyline) -> Self {
        Self::Polyline(pl)
    }
}
