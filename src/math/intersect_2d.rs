use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Solves the two lines through `a0 -> a1` and `b0 -> b1` parametrically and
/// keeps the crossing only when both parameters lie in `[0, 1]`, so shared
/// endpoints count as a hit.
///
/// Parallel and collinear inputs make the denominator zero. The division is
/// left to produce `inf`/`NaN`, which fails the range check, so collinear
/// segments never report an intersection, overlapping or not.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let denom = (b1.y - b0.y) * (a1.x - a0.x) - (b1.x - b0.x) * (a1.y - a0.y);
    let ua = ((b1.x - b0.x) * (a0.y - b0.y) - (b1.y - b0.y) * (a0.x - b0.x)) / denom;
    let ub = ((a1.x - a0.x) * (a0.y - b0.y) - (a1.y - a0.y) * (a0.x - b0.x)) / denom;

    let unit = 0.0..=1.0;
    if unit.contains(&ua) && unit.contains(&ub) {
        Some(a0 + (a1 - a0) * ua)
    } else {
        None
    }
}

/// Intersection of the infinite line through `p0` and `p1` with a circle.
///
/// The line is moved into the circle's frame and written as
/// `A*x + B*y + C = 0`. The foot of the perpendicular from the center is the
/// tangent point; `C^2` against `r^2 * (A^2 + B^2)` decides between zero, one
/// and two points.
///
/// Candidates are not clipped to the segment `p0 -> p1`; callers that need a
/// bounded result filter them themselves.
#[must_use]
pub fn line_circle_intersect_2d(
    p0: &Point2,
    p1: &Point2,
    center: &Point2,
    radius: f64,
) -> Vec<Point2> {
    let q0 = p0 - center;
    let q1 = p1 - center;

    let a = q0.y - q1.y;
    let b = q1.x - q0.x;
    let c = q0.x * q1.y - q1.x * q0.y;

    let norm_sq = a * a + b * b;
    let foot = Vector2::new(-a * c / norm_sq, -b * c / norm_sq);

    let c_sq = c * c;
    let r_sq_norm = radius * radius * norm_sq;

    if (c_sq - r_sq_norm).abs() < TOLERANCE {
        return vec![center + foot];
    }
    if c_sq > r_sq_norm {
        return Vec::new();
    }

    let d = radius * radius - c_sq / norm_sq;
    let mult = (d / norm_sq).sqrt();
    let offset = Vector2::new(b * mult, -a * mult);

    vec![center + foot + offset, center + foot - offset]
}

/// Intersection of two full circles in 2D.
///
/// Returns nothing when one circle strictly nests inside the other or when
/// they are too far apart. Exact external tangency (`dist == r1 + r2`) gives
/// the single touching point; every other overlap gives two points symmetric
/// about the center axis, which coincide for internal tangency.
///
/// The crossing points lie on the radical line at distance `b` from `c1`
/// (`a` from `c2`), offset perpendicular by `h = sqrt(r2^2 - a^2)`.
///
/// Concentric circles divide by a zero center distance and yield non-finite
/// points.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn circle_circle_intersect_2d(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    let axis = c2 - c1;
    let dist = axis.norm();

    let nesting = (r2 - r1).abs() > dist;
    let overlapping = dist <= r1 + r2;
    if nesting || !overlapping {
        return Vec::new();
    }

    let b = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let a = dist - b;

    let dir = axis / dist;
    let base = c1 + dir * b;

    if dist == r1 + r2 {
        return vec![base];
    }

    // Rounding can push r2^2 - a^2 just below zero at internal tangency.
    let h = (r2 * r2 - a * a).max(0.0).sqrt();
    let perp = Vector2::new(-dir.y, dir.x) * h;

    vec![base + perp, base - perp]
}
