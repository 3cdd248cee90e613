use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{contains_point, Figure, Point, Shape};

/// Computes the intersection points of two figures.
///
/// Unlike [`Shape::intersect`], which silently returns nothing for a point
/// operand, this query reports such pairs as unsupported.
pub struct FigureIntersect<'a> {
    lhs: &'a Figure,
    rhs: &'a Figure,
    unique: bool,
}

impl<'a> FigureIntersect<'a> {
    /// Creates a new `FigureIntersect` query. Duplicates are kept by default.
    #[must_use]
    pub fn new(lhs: &'a Figure, rhs: &'a Figure) -> Self {
        Self {
            lhs,
            rhs,
            unique: false,
        }
    }

    /// Drops points equal (within tolerance) to one already reported,
    /// keeping the first occurrence.
    #[must_use]
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Executes the query, returning all intersection points.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unsupported`] if either figure is a point.
    pub fn execute(&self) -> Result<Vec<Point>> {
        if !self.lhs.is_intersectable() || !self.rhs.is_intersectable() {
            debug!(
                lhs = self.lhs.kind(),
                rhs = self.rhs.kind(),
                "rejecting intersection with a point operand"
            );
            return Err(OperationError::Unsupported {
                lhs: self.lhs.kind(),
                rhs: self.rhs.kind(),
            }
            .into());
        }

        let hits = self.lhs.intersect(self.rhs);
        if !self.unique {
            return Ok(hits);
        }

        let mut unique = Vec::with_capacity(hits.len());
        for p in hits {
            if !contains_point(&unique, &p) {
                unique.push(p);
            }
        }
        Ok(unique)
    }
}
