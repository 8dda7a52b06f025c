//! Closed rings: point classification and orientation.
//!
//! A ring is a `&[Point]` whose first and last elements are equal. None of the
//! functions here check that; `close_ring` and `validate_ring` exist for callers
//! that build rings from untrusted input.

use crate::intersect::is_on_segment;
use crate::robust::{orientation_index, sign_of_det2x2};
use crate::types::{equals_eps, unique_points, GeomError, Location, Point};

/// Classify `p` against a closed ring: on an edge → `Boundary`, otherwise
/// crossing-number parity.
pub fn locate_in_ring(p: Point, ring: &[Point]) -> Location {
    if is_on_line(p, ring) {
        Location::Boundary
    } else if is_point_in_ring(p, ring) {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Horizontal-ray crossing parity.
///
/// Counts edges that straddle `p.y` (one end strictly above, the other at or
/// below) and whose x-intercept lies strictly right of `p`. The answer is
/// arbitrary for points on the ring itself; use `locate_in_ring` when that
/// matters.
pub fn is_point_in_ring(p: Point, ring: &[Point]) -> bool {
    let mut crossings = 0usize;
    for w in ring.windows(2) {
        let x1 = w[1].x - p.x;
        let y1 = w[1].y - p.y;
        let x2 = w[0].x - p.x;
        let y2 = w[0].y - p.y;
        if (y1 > 0.0 && y2 <= 0.0) || (y2 > 0.0 && y1 <= 0.0) {
            // x-intercept = det / (y2 - y1); only its sign is needed.
            let x_int = f64::from(sign_of_det2x2(x1, y1, x2, y2)) / (y2 - y1);
            if x_int > 0.0 {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

/// Whether `p` lies on any segment of the polyline `pts`.
pub fn is_on_line(p: Point, pts: &[Point]) -> bool {
    pts.windows(2).any(|w| is_on_segment(p, w[0], w[1]))
}

/// Counterclockwise test from the turn at the highest vertex.
///
/// The first vertex with maximal y is taken; its nearest distinct neighbours on
/// either side decide via `orientation_index`. If the three are collinear the
/// ring is CCW iff the previous neighbour lies right of the next one.
///
/// Degenerate rings (fewer than 3 points before closure, or no two distinct
/// neighbours around the top vertex) return `false`. This is a fallback, not a
/// geometric answer.
pub fn is_ccw(ring: &[Point]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let n = ring.len() - 1;

    let mut hi = 0;
    for i in 1..=n {
        if ring[i].y > ring[hi].y {
            hi = i;
        }
    }
    let top = ring[hi];

    let mut i_prev = hi;
    loop {
        i_prev = if i_prev == 0 { n } else { i_prev - 1 };
        if ring[i_prev] != top || i_prev == hi {
            break;
        }
    }
    let mut i_next = hi;
    loop {
        i_next = (i_next + 1) % n;
        if ring[i_next] != top || i_next == hi {
            break;
        }
    }

    let prev = ring[i_prev];
    let next = ring[i_next];
    if prev == top || next == top || prev == next {
        return false;
    }
    match orientation_index(prev, top, next) {
        0 => prev.x > next.x,
        disc => disc > 0,
    }
}

/// Shoelace area; positive for counterclockwise rings.
///
/// Coordinates are shifted by the first vertex to limit cancellation.
pub fn signed_area(ring: &[Point]) -> f64 {
    let Some(origin) = ring.first().copied() else {
        return 0.0;
    };
    let twice: f64 = ring
        .windows(2)
        .map(|w| {
            let a = w[0] - origin;
            let b = w[1] - origin;
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

/// Close an open point sequence into a ring.
///
/// Ends that match within `POSITION_EPS` are snapped together; otherwise the
/// first point is appended. The result must have at least 3 distinct points.
pub fn close_ring(points: &[Point]) -> Result<Vec<Point>, GeomError> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(GeomError::EmptyInput),
    };
    let mut ring = points.to_vec();
    if first != last {
        if equals_eps(first, last) && ring.len() > 1 {
            let end = ring.len() - 1;
            ring[end] = first;
        } else {
            ring.push(first);
        }
    }
    check_distinct(&ring)?;
    Ok(ring)
}

/// Check closure and the 3-distinct-points minimum without modifying the ring.
pub fn validate_ring(ring: &[Point]) -> Result<(), GeomError> {
    let (first, last) = match (ring.first(), ring.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(GeomError::EmptyInput),
    };
    if first != last {
        return Err(GeomError::RingNotClosed { first, last });
    }
    check_distinct(ring)
}

fn check_distinct(ring: &[Point]) -> Result<(), GeomError> {
    let got = unique_points(ring).len();
    if got < 3 {
        return Err(GeomError::TooFewPoints { needed: 3, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![0.0, 0.0],
        ]
    }

    #[test]
    fn square_classification() {
        let r = square();
        assert_eq!(locate_in_ring(vector![5.0, 5.0], &r), Location::Interior);
        assert_eq!(locate_in_ring(vector![15.0, 5.0], &r), Location::Exterior);
        assert_eq!(locate_in_ring(vector![0.0, 5.0], &r), Location::Boundary);
        assert_eq!(locate_in_ring(vector![10.0, 10.0], &r), Location::Boundary);
        assert_eq!(locate_in_ring(vector![-1.0, 10.0], &r), Location::Exterior);
    }

    #[test]
    fn ray_through_vertices_counts_once() {
        // Diamond: the ray from (0,0) to +x passes exactly through vertex (2,0).
        let diamond = vec![
            vector![2.0, 0.0],
            vector![0.0, 2.0],
            vector![-2.0, 0.0],
            vector![0.0, -2.0],
            vector![2.0, 0.0],
        ];
        assert!(is_point_in_ring(vector![0.0, 0.0], &diamond));
        assert!(!is_point_in_ring(vector![-3.0, 0.0], &diamond));
        // Concave notch whose bottom vertex sits on the ray.
        let notch = vec![
            vector![0.0, 0.0],
            vector![6.0, 0.0],
            vector![6.0, 4.0],
            vector![4.0, 4.0],
            vector![3.0, 2.0],
            vector![2.0, 4.0],
            vector![0.0, 4.0],
            vector![0.0, 0.0],
        ];
        assert_eq!(locate_in_ring(vector![1.0, 2.0], &notch), Location::Interior);
        assert_eq!(locate_in_ring(vector![3.0, 3.0], &notch), Location::Exterior);
        assert_eq!(locate_in_ring(vector![3.0, 2.0], &notch), Location::Boundary);
    }

    #[test]
    fn orientation_of_square() {
        let r = square();
        assert!(is_ccw(&r));
        let rev: Vec<Point> = r.iter().rev().copied().collect();
        assert!(!is_ccw(&rev));
        assert!(signed_area(&r) > 0.0);
        assert_eq!(signed_area(&rev), -100.0);
    }

    #[test]
    fn orientation_with_duplicate_top_and_flat_top() {
        // Duplicate top vertex must be skipped.
        let dup = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 3.0],
            vector![2.0, 3.0],
            vector![0.0, 0.0],
        ];
        assert!(is_ccw(&dup));
        // Top vertex in the middle of a horizontal run: tie broken on x.
        let flat = vec![
            vector![5.0, 10.0],
            vector![0.0, 10.0],
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![5.0, 10.0],
        ];
        assert!(is_ccw(&flat));
        let flat_rev: Vec<Point> = flat.iter().rev().copied().collect();
        assert!(!is_ccw(&flat_rev));
    }

    #[test]
    fn degenerate_rings_fall_back_to_false() {
        assert!(!is_ccw(&[]));
        assert!(!is_ccw(&[vector![0.0, 0.0], vector![1.0, 1.0], vector![0.0, 0.0]]));
        // Spike: both neighbours of the top vertex coincide.
        let spike = vec![
            vector![0.0, 0.0],
            vector![1.0, 5.0],
            vector![0.0, 0.0],
            vector![0.0, 0.0],
        ];
        assert!(!is_ccw(&spike));
    }

    #[test]
    fn close_and_validate() {
        let open = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
        let closed = close_ring(&open).unwrap();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[0], closed[3]);

        let almost = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![1e-7, -1e-7],
        ];
        let snapped = close_ring(&almost).unwrap();
        assert_eq!(snapped.len(), 4);
        assert_eq!(snapped[3], vector![0.0, 0.0]);

        assert_eq!(close_ring(&[]), Err(GeomError::EmptyInput));
        assert_eq!(
            close_ring(&[vector![0.0, 0.0], vector![1.0, 0.0]]),
            Err(GeomError::TooFewPoints { needed: 3, got: 2 })
        );
        assert!(matches!(
            validate_ring(&open),
            Err(GeomError::RingNotClosed { .. })
        ));
        assert!(validate_ring(&square()).is_ok());
    }
}
