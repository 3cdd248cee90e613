use crate::geometry::{Figure, Shape};

/// Computes the length of a figure.
pub struct Length<'a> {
    figure: &'a Figure,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }

    /// Executes the query, returning the figure length.
    ///
    /// For a `Segment`, this is the distance between its endpoints.
    /// For a `Circle`, this is `2 * pi * radius`.
    /// For a `Polyline`, this is the sum of its segment lengths.
    /// A `Point` has length `0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.figure.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Point, Polyline, Segment};
    use approx::assert_relative_eq;

    #[test]
    fn segment_length() {
        let fig = Segment::from_coords(0.0, 0.0, 3.0, 4.0).into();
        assert_relative_eq!(Length::new(&fig).execute(), 5.0);
    }

    #[test]
    fn circle_length() {
        let fig = Circle::from_coords(5.0, 5.0, 1.0).into();
        assert_relative_eq!(Length::new(&fig).execute(), std::f64::consts::TAU);
    }

    #[test]
    fn polyline_length() {
        let fig = Polyline::from_coords(&[(0.0, 0.0), (0.0, 5.0), (10.0, 5.0)]).into();
        assert_relative_eq!(Length::new(&fig).execute(), 15.0);
    }

    #[test]
    fn point_length() {
        let fig = Point::new(5.0, 5.0).into();
        assert_relative_eq!(Length::new(&fig).execute(), 0.0);
    }
}
