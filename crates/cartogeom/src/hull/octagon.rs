//! Octagon point reduction for large hull inputs.
//!
//! The extremes in x, y, x+y and x-y are all hull vertices. Walked in the order
//! below they form a convex polygon inside the hull, so any point strictly
//! inside it can be discarded before the scan.

use crate::robust::orient_exact;
use crate::types::{unique_points, Point};

/// The eight directional extremes, clockwise from the west:
/// min x, min(x-y), max y, max(x+y), max x, max(x-y), min y, min(x+y).
/// The first point reaching each extreme wins.
fn extremes(pts: &[Point]) -> [Point; 8] {
    let mut oct = [pts[0]; 8];
    for &p in &pts[1..] {
        if p.x < oct[0].x {
            oct[0] = p;
        }
        if p.x - p.y < oct[1].x - oct[1].y {
            oct[1] = p;
        }
        if p.y > oct[2].y {
            oct[2] = p;
        }
        if p.x + p.y > oct[3].x + oct[3].y {
            oct[3] = p;
        }
        if p.x > oct[4].x {
            oct[4] = p;
        }
        if p.x - p.y > oct[5].x - oct[5].y {
            oct[5] = p;
        }
        if p.y < oct[6].y {
            oct[6] = p;
        }
        if p.x + p.y < oct[7].x + oct[7].y {
            oct[7] = p;
        }
    }
    oct
}

/// Closed octagon ring with consecutive repeats removed, or `None` when fewer
/// than 3 points remain before closing.
pub fn octagon_ring(pts: &[Point]) -> Option<Vec<Point>> {
    if pts.is_empty() {
        return None;
    }
    let mut ring: Vec<Point> = Vec::with_capacity(9);
    for p in extremes(pts) {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    if ring.len() < 3 {
        return None;
    }
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    Some(ring)
}

/// Octagon vertices plus every input point not strictly inside the octagon,
/// deduplicated. Falls back to the whole input when no usable octagon exists.
pub fn reduce(pts: &[Point]) -> Vec<Point> {
    let Some(ring) = octagon_ring(pts) else {
        return pts.to_vec();
    };
    let mut kept = ring.clone();
    kept.extend(pts.iter().copied().filter(|p| !strictly_inside(*p, &ring)));
    let kept = unique_points(&kept);
    if kept.len() < 3 {
        return pts.to_vec();
    }
    kept
}

/// Strictly right of every edge of the clockwise octagon ring. Collinear or
/// backtracking edges make the test fail, which only keeps more points.
fn strictly_inside(p: Point, ring: &[Point]) -> bool {
    ring.windows(2).all(|w| orient_exact(w[0], w[1], p) < 0)
}
