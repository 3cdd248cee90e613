use super::{Circle, Point, Segment};

/// An open path through an ordered list of vertices.
///
/// Consecutive vertices are joined by straight segments. The path is never
/// closed implicitly: repeat the first vertex at the end to close it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline through `points`, in order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polyline from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        coords.iter().copied().map(Point::from).collect()
    }

    /// Returns the vertices in path order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the segments between consecutive vertices, in path order.
    ///
    /// Empty when the polyline has fewer than two vertices.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect()
    }

    /// Intersection with a segment; same point set as
    /// [`Segment::intersect_polyline`].
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment) -> Vec<Point> {
        segment.intersect_polyline(self)
    }

    /// Intersection with a circle; same point set as
    /// [`Circle::intersect_polyline`].
    #[must_use]
    pub fn intersect_circle(&self, circle: &Circle) -> Vec<Point> {
        circle.intersect_polyline(self)
    }

    /// Intersection with another polyline: every own segment is tested
    /// against the whole of `other`. Duplicates are kept.
    #[must_use]
    pub fn intersect_polyline(&self, other: &Polyline) -> Vec<Point> {
        self.segments()
            .iter()
            .flat_map(|s| s.intersect_polyline(other))
            .collect()
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
