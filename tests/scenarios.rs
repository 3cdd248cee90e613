#![allow(clippy::unwrap_used)]

use std::sync::Once;

use approx::assert_relative_eq;
use planar::operations::query::{FigureIntersect, Length};
use planar::{contains_point, Circle, Figure, Point, Polyline, Segment, Shape};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Asserts both slices hold the same points under approximate equality,
/// ignoring order and multiplicity.
fn assert_same_set(a: &[Point], b: &[Point]) {
    for p in a {
        assert!(contains_point(b, p), "{p} missing from {b:?}");
    }
    for p in b {
        assert!(contains_point(a, p), "{p} missing from {a:?}");
    }
}

fn sample_figures() -> Vec<Figure> {
    vec![
        Segment::from_coords(-5.0, 0.0, 10.0, 0.0).into(),
        Segment::from_coords(1.0, -3.0, 1.5, 4.0).into(),
        Segment::from_coords(5.0, 5.0, 5.0, 2.0).into(),
        Circle::from_coords(0.0, 0.0, 2.0).into(),
        Circle::from_coords(3.0, 0.0, 1.0).into(),
        Circle::from_coords(1.0, 1.0, 2.5).into(),
        Polyline::from_coords(&[(1.0, 3.0), (4.0, 3.0), (4.0, 1.0), (6.0, 1.0), (6.0, 3.0)]).into(),
        Polyline::from_coords(&[(-3.0, -3.0), (3.0, 3.0), (3.0, -1.0), (-2.0, 2.5)]).into(),
    ]
}

#[test]
fn segment_length() {
    init_tracing();
    assert_relative_eq!(Segment::from_coords(10.0, 10.0, 100.0, 10.0).length(), 90.0);
}

#[test]
fn circle_length() {
    assert_relative_eq!(
        Circle::from_coords(10.0, 10.0, 2.0).length(),
        12.566_370_614_359_172,
        epsilon = 1e-12
    );
}

#[test]
fn polyline_length() {
    let fig: Figure = Polyline::from_coords(&[(0.0, 0.0), (0.0, 5.0), (10.0, 5.0)]).into();
    assert_relative_eq!(Length::new(&fig).execute(), 15.0);
}

#[test]
fn perpendicular_segments() {
    init_tracing();
    let a: Figure = Segment::from_coords(10.0, 10.0, 100.0, 10.0).into();
    let b: Figure = Segment::from_coords(20.0, 100.0, 20.0, 0.0).into();
    assert_eq!(a.intersect(&b), vec![Point::new(20.0, 10.0)]);
    assert_eq!(b.intersect(&a), vec![Point::new(20.0, 10.0)]);
}

#[test]
fn segment_through_circle() {
    let s: Figure = Segment::from_coords(-5.0, 0.0, 10.0, 0.0).into();
    let c: Figure = Circle::from_coords(0.0, 0.0, 2.0).into();
    let hits = s.intersect(&c);
    assert_eq!(hits.len(), 2);
    assert_same_set(&hits, &[Point::new(-2.0, 0.0), Point::new(2.0, 0.0)]);
    assert_same_set(&c.intersect(&s), &hits);
}

#[test]
fn tangent_circles() {
    let a: Figure = Circle::from_coords(0.0, 0.0, 2.0).into();
    let b: Figure = Circle::from_coords(3.0, 0.0, 1.0).into();
    assert_eq!(a.intersect(&b), vec![Point::new(2.0, 0.0)]);
    assert_eq!(b.intersect(&a), vec![Point::new(2.0, 0.0)]);
}

#[test]
fn segment_misses_polyline() {
    let s: Figure = Segment::from_coords(5.0, 5.0, 5.0, 2.0).into();
    let pl: Figure =
        Polyline::from_coords(&[(1.0, 3.0), (4.0, 3.0), (4.0, 1.0), (6.0, 1.0), (6.0, 3.0)]).into();
    assert!(s.intersect(&pl).is_empty());
    assert!(pl.intersect(&s).is_empty());
}

#[test]
fn colinear_overlapping_segments() {
    let a: Figure = Segment::from_coords(0.0, 0.0, 10.0, 0.0).into();
    let b: Figure = Segment::from_coords(5.0, 0.0, 15.0, 0.0).into();
    assert!(a.intersect(&b).is_empty());
    assert!(b.intersect(&a).is_empty());
}

#[test]
fn polyline_length_is_additive() {
    for fig in sample_figures() {
        if let Figure::Polyline(pl) = &fig {
            let sum: f64 = pl.segments().iter().map(Shape::length).sum();
            assert_relative_eq!(pl.length(), sum, epsilon = 1e-12);
        }
    }
}

#[test]
fn strict_query_rejects_points() {
    let p: Figure = Point::new(0.0, 0.0).into();
    let c: Figure = Circle::from_coords(0.0, 0.0, 1.0).into();
    assert!(FigureIntersect::new(&p, &c).execute().is_err());
    assert!(c.intersect(&p).is_empty());
}

#[test]
fn shapes_are_shareable_across_threads() {
    let figures = std::sync::Arc::new(sample_figures());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let figures = std::sync::Arc::clone(&figures);
            std::thread::spawn(move || figures[0].intersect(&figures[3]).len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 2);
    }
}
