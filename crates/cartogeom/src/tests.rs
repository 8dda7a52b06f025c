//! Cross-module properties, fuzzed with proptest.

use proptest::prelude::*;

use crate::hull::{convex_hull, ConvexHull, Hull, HullCfg};
use crate::intersect::{intersect, Intersection};
use crate::locate::{locate_in_polygon, PointLocator};
use crate::ring::{is_ccw, locate_in_ring};
use crate::robust::{orient_exact, orientation_index};
use crate::types::{Location, Point};
use crate::{Geometry, Polygon};
use nalgebra::vector;

/// Integer grid points: exact differences, frequent collinear and repeated cases.
fn grid_point() -> impl Strategy<Value = Point> {
    (-20i32..=20, -20i32..=20).prop_map(|(x, y)| vector![x as f64, y as f64])
}

fn float_point() -> impl Strategy<Value = Point> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| vector![x, y])
}

/// Order-independent view of an intersection outcome.
fn canonical(r: Intersection) -> (u8, Vec<(u64, u64)>) {
    let tag = match r {
        Intersection::None => 0,
        Intersection::Point { proper: false, .. } => 1,
        Intersection::Point { proper: true, .. } => 2,
        Intersection::Collinear(..) => 3,
    };
    let mut pts: Vec<(u64, u64)> = r
        .points()
        .iter()
        .map(|p| ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()))
        .collect();
    pts.sort_unstable();
    (tag, pts)
}

/// Up to 120 points scattered within 1e-15 of the line y = 7x, optionally
/// moved far from the origin where the coordinates themselves round.
fn needle_cloud() -> impl Strategy<Value = Vec<Point>> {
    (
        prop::collection::vec((0u32..1000, -1e-15f64..1e-15), 3..120),
        prop_oneof![Just(0.0), Just(1e3), Just(-3.7e5), Just(1e8)],
    )
        .prop_map(|(raw, shift)| {
            raw.into_iter()
                .map(|(k, e)| {
                    let s = f64::from(k) * 0.01;
                    vector![0.1 * s + shift, 0.7 * s + e + shift]
                })
                .collect()
        })
}

/// `k` or more integer points on a line through the grid, vertical included.
fn grid_line() -> impl Strategy<Value = Vec<Point>> {
    (
        grid_point(),
        (-3i32..=3, -3i32..=3).prop_filter("direction", |d| *d != (0, 0)),
        prop::collection::vec(-8i32..=8, 3..20),
    )
        .prop_map(|(o, (dx, dy), ts)| {
            ts.into_iter()
                .map(|t| o + vector![f64::from(t * dx), f64::from(t * dy)])
                .collect()
        })
}

/// Every hull guarantee checked with exact turns: strictly convex simple CCW
/// ring, vertices drawn from the input, no input point outside.
fn check_hull(pts: &[Point], hull: &Hull) -> Result<(), TestCaseError> {
    for v in hull.vertices() {
        prop_assert!(pts.contains(&v), "vertex {:?} not in input", v);
    }
    match hull {
        Hull::Empty => prop_assert!(pts.is_empty()),
        Hull::Point(a) => prop_assert!(pts.iter().all(|p| p == a)),
        Hull::Segment(a, b) => {
            prop_assert_ne!(a, b);
            prop_assert!(!(b.y < a.y || (b.y == a.y && b.x < a.x)), "lower end first");
            for p in pts {
                prop_assert_eq!(orient_exact(*a, *b, *p), 0);
                prop_assert!(p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x));
                prop_assert!(p.y >= a.y && p.y <= b.y);
            }
        }
        Hull::Polygon(poly) => {
            let ring = &poly.exterior;
            let m = ring.len() - 1;
            prop_assert!(m >= 3);
            prop_assert_eq!(ring[0], ring[m]);
            for i in 0..m {
                prop_assert_eq!(orient_exact(ring[i], ring[(i + 1) % m], ring[(i + 2) % m]), 1);
            }
            // One turn around the start vertex, so the ring does not wind twice.
            for i in 1..m - 1 {
                prop_assert_eq!(orient_exact(ring[0], ring[i], ring[i + 1]), 1);
            }
            for p in pts {
                prop_assert!(ring.windows(2).all(|w| orient_exact(w[0], w[1], *p) >= 0));
            }
        }
    }
    Ok(())
}

fn square_ring(x0: f64, y0: f64, side: f64) -> Vec<Point> {
    vec![
        vector![x0, y0],
        vector![x0 + side, y0],
        vector![x0 + side, y0 + side],
        vector![x0, y0 + side],
        vector![x0, y0],
    ]
}

proptest! {
    #[test]
    fn orientation_flips_with_the_first_two_points(
        p1 in grid_point(), p2 in grid_point(), q in grid_point()
    ) {
        prop_assert_eq!(orientation_index(p1, p2, q), -orientation_index(p2, p1, q));
    }

    #[test]
    fn orientation_flips_for_float_triples(
        p1 in float_point(), p2 in float_point(), q in float_point()
    ) {
        prop_assume!(p1 != p2);
        prop_assert_eq!(orientation_index(p1, p2, q), -orientation_index(p2, p1, q));
    }

    #[test]
    fn intersection_ignores_argument_order(
        p1 in grid_point(), p2 in grid_point(), q1 in grid_point(), q2 in grid_point()
    ) {
        prop_assert_eq!(
            canonical(intersect(p1, p2, q1, q2)),
            canonical(intersect(q1, q2, p1, p2))
        );
    }

    #[test]
    fn float_intersection_ignores_argument_order(
        p1 in float_point(), p2 in float_point(), q1 in float_point(), q2 in float_point()
    ) {
        prop_assert_eq!(
            canonical(intersect(p1, p2, q1, q2)),
            canonical(intersect(q1, q2, p1, p2))
        );
    }

    #[test]
    fn hull_is_idempotent_on_grid_points(pts in prop::collection::vec(grid_point(), 0..120)) {
        let hull = convex_hull(&pts);
        prop_assert_eq!(convex_hull(&hull.vertices()), hull);
    }

    #[test]
    fn hull_is_idempotent_on_float_points(pts in prop::collection::vec(float_point(), 0..300)) {
        let hull = convex_hull(&pts);
        prop_assert_eq!(convex_hull(&hull.vertices()), hull);
    }

    #[test]
    fn hull_contains_every_input_point(pts in prop::collection::vec(float_point(), 3..500)) {
        let hull = convex_hull(&pts);
        if let Some(ring) = hull.ring() {
            prop_assert!(is_ccw(ring));
            for p in &pts {
                prop_assert_ne!(locate_in_ring(*p, ring), Location::Exterior);
            }
        }
    }

    #[test]
    fn grid_hull_meets_every_guarantee(pts in prop::collection::vec(grid_point(), 0..150)) {
        check_hull(&pts, &convex_hull(&pts))?;
    }

    #[test]
    fn points_on_a_line_hull_to_their_extremes(pts in grid_line()) {
        let hull = convex_hull(&pts);
        check_hull(&pts, &hull)?;
        let lower = |p: &&Point, q: &&Point| (p.y, p.x).partial_cmp(&(q.y, q.x)).unwrap();
        let lo = *pts.iter().min_by(lower).unwrap();
        let hi = *pts.iter().max_by(lower).unwrap();
        if lo == hi {
            prop_assert_eq!(hull, Hull::Point(lo));
        } else {
            prop_assert_eq!(hull, Hull::Segment(lo, hi));
        }
    }

    #[test]
    fn needle_clouds_stay_convex_and_contain_their_input(pts in needle_cloud()) {
        let hull = convex_hull(&pts);
        check_hull(&pts, &hull)?;
        prop_assert_eq!(convex_hull(&hull.vertices()), hull.clone());
        let plain = ConvexHull::new(&pts)
            .with_cfg(HullCfg { reduce_threshold: usize::MAX })
            .hull();
        prop_assert_eq!(plain, hull);
    }

    #[test]
    fn reduction_matches_plain_scan(pts in prop::collection::vec(grid_point(), 0..200)) {
        let plain = ConvexHull::new(&pts)
            .with_cfg(HullCfg { reduce_threshold: usize::MAX })
            .hull();
        let reduced = ConvexHull::new(&pts)
            .with_cfg(HullCfg { reduce_threshold: 3 })
            .hull();
        prop_assert_eq!(reduced, plain);
    }

    #[test]
    fn near_collinear_orientation_is_stable(k in 1u32..10_000) {
        let p1 = vector![0.0, 0.0];
        let p2 = vector![1e8, 1.0];
        let q = p2 + vector![1e8, 1.0] * (1e-9 * k as f64) + vector![1e-9, 1e-9];
        let first = orientation_index(p1, p2, q);
        for _ in 0..5 {
            prop_assert_eq!(orientation_index(p1, p2, q), first);
        }
    }

    #[test]
    fn single_polygon_agrees_with_point_locator(p in grid_point()) {
        let poly = Polygon::new(
            square_ring(-10.0, -10.0, 20.0),
            vec![square_ring(-4.0, -4.0, 8.0)],
        );
        let g = Geometry::Surface(poly.clone());
        prop_assert_eq!(PointLocator::locate(p, &g), locate_in_polygon(p, &poly));
    }
}

#[test]
fn square_ring_classification() {
    let ring = square_ring(0.0, 0.0, 10.0);
    assert_eq!(locate_in_ring(vector![5.0, 5.0], &ring), Location::Interior);
    assert_eq!(locate_in_ring(vector![15.0, 5.0], &ring), Location::Exterior);
    assert_eq!(locate_in_ring(vector![0.0, 5.0], &ring), Location::Boundary);
    assert_eq!(locate_in_ring(vector![10.0, 10.0], &ring), Location::Boundary);
}

#[test]
fn polygon_with_hole_classification() {
    let poly = Polygon::new(square_ring(0.0, 0.0, 10.0), vec![square_ring(2.0, 2.0, 6.0)]);
    assert_eq!(locate_in_polygon(vector![5.0, 5.0], &poly), Location::Exterior);
    assert_eq!(locate_in_polygon(vector![1.0, 1.0], &poly), Location::Interior);
    assert_eq!(locate_in_polygon(vector![2.0, 2.0], &poly), Location::Boundary);
}

#[test]
fn collinear_input_hulls_to_a_segment() {
    let pts = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![3.0, 0.0],
    ];
    assert_eq!(
        convex_hull(&pts),
        Hull::Segment(vector![0.0, 0.0], vector![3.0, 0.0])
    );
}
