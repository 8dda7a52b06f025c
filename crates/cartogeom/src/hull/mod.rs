//! Convex hull of a point set (Graham scan).
//!
//! Purpose
//! - Return the smallest convex geometry containing every input point, typed by
//!   its dimension: empty, a point, a segment, or a CCW polygon without holes.
//!
//! Pipeline
//! 1. Exact dedup of the input (`unique_points`).
//! 2. For inputs above `HullCfg::reduce_threshold`, drop every point strictly
//!    inside the octagon of directional extremes (see `octagon`).
//! 3. Radial presort around the lowest point (min y, then min x) using the exact
//!    turn sign; collinear ties break on distance from the pivot.
//! 4. Stack scan that pops on non-left turns, then closes on the pivot.
//! 5. Ring cleanup removes repeats and collinear middle vertices. A cleaned ring
//!    of three points (two distinct plus closure) is reported as a segment.
//!
//! Sort, scan, cleanup and reduction all decide turns with `robust::orient_exact`
//! on the input coordinates. A predicate on rounded differences would let the
//! radial order disagree with the scan on near-collinear input and fold the
//! ring back on itself.

mod octagon;

use std::cmp::Ordering;

use tracing::debug;

use crate::cfg::HULL_REDUCE_THRESHOLD;
use crate::geometry::{Geometry, Polygon};
use crate::robust::orient_exact;
use crate::types::{unique_points, Point};

pub use octagon::{octagon_ring, reduce};

/// Hull construction knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    /// Octagon reduction runs only for more distinct points than this.
    /// `usize::MAX` disables it.
    pub reduce_threshold: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            reduce_threshold: HULL_REDUCE_THRESHOLD,
        }
    }
}

/// Hull result, typed by dimension.
#[derive(Clone, Debug, PartialEq)]
pub enum Hull {
    Empty,
    Point(Point),
    Segment(Point, Point),
    /// Closed CCW exterior ring, no holes, no collinear or repeated vertices.
    Polygon(Polygon),
}

impl Hull {
    /// Distinct hull vertices (the ring's closing point is not repeated).
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Hull::Empty => Vec::new(),
            Hull::Point(p) => vec![*p],
            Hull::Segment(a, b) => vec![*a, *b],
            Hull::Polygon(poly) => {
                let ring = &poly.exterior;
                ring[..ring.len().saturating_sub(1)].to_vec()
            }
        }
    }

    /// Closed exterior ring for polygonal hulls.
    pub fn ring(&self) -> Option<&[Point]> {
        match self {
            Hull::Polygon(poly) => Some(&poly.exterior),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Hull::Empty => "empty",
            Hull::Point(_) => "point",
            Hull::Segment(..) => "segment",
            Hull::Polygon(_) => "polygon",
        }
    }

    pub fn into_geometry(self) -> Geometry {
        match self {
            Hull::Empty => Geometry::MultiPrimitive(Vec::new()),
            Hull::Point(p) => Geometry::Point(p),
            Hull::Segment(a, b) => Geometry::Curve(vec![a, b]),
            Hull::Polygon(poly) => Geometry::Surface(poly),
        }
    }
}

/// Hull builder over the distinct coordinates of its input.
#[derive(Clone, Debug)]
pub struct ConvexHull {
    points: Vec<Point>,
    cfg: HullCfg,
}

impl ConvexHull {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: unique_points(points),
            cfg: HullCfg::default(),
        }
    }

    /// Hull input from every coordinate of a geometry.
    pub fn from_geometry(geom: &Geometry) -> Self {
        Self::new(&geom.coordinates())
    }

    pub fn with_cfg(mut self, cfg: HullCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Number of distinct input points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn hull(&self) -> Hull {
        let pts = &self.points;
        match pts.len() {
            0 => return Hull::Empty,
            1 => return Hull::Point(pts[0]),
            2 if is_lower(pts[1], pts[0]) => return Hull::Segment(pts[1], pts[0]),
            2 => return Hull::Segment(pts[0], pts[1]),
            _ => {}
        }

        let mut work = if pts.len() > self.cfg.reduce_threshold {
            reduce(pts)
        } else {
            pts.clone()
        };
        pre_sort(&mut work);
        let scanned = graham_scan(&work);
        let ring = clean_ring(&scanned);

        let hull = match ring.len() {
            0 => Hull::Empty,
            1 | 2 => Hull::Point(ring[0]),
            3 => Hull::Segment(ring[0], ring[1]),
            _ => Hull::Polygon(Polygon::new(ring, Vec::new())),
        };
        debug!(
            input = pts.len(),
            scanned = work.len(),
            vertices = hull.vertices().len(),
            kind = hull.kind(),
            "convex hull"
        );
        hull
    }
}

/// Hull of a point slice with the default configuration.
pub fn convex_hull(points: &[Point]) -> Hull {
    ConvexHull::new(points).hull()
}

/// Move the pivot (min y, then min x) to the front and sort the rest by angle.
fn pre_sort(pts: &mut [Point]) {
    let mut lo = 0;
    for i in 1..pts.len() {
        if is_lower(pts[i], pts[lo]) {
            lo = i;
        }
    }
    pts.swap(0, lo);
    let o = pts[0];
    pts[1..].sort_by(|p, q| polar_cmp(o, *p, *q));
}

/// Pivot order: smaller y, then smaller x. Segment hulls start at the lower end.
#[inline]
fn is_lower(p: Point, q: Point) -> bool {
    p.y < q.y || (p.y == q.y && p.x < q.x)
}

/// Angular order around `o`: counterclockwise is greater, ties by distance.
///
/// All points lie in the closed upper half-plane of `o` (with points on its
/// horizontal ray only to the right), so the exact turn sign is a total order.
fn polar_cmp(o: Point, p: Point, q: Point) -> Ordering {
    match orient_exact(o, p, q) {
        1 => Ordering::Less,
        -1 => Ordering::Greater,
        _ => ray_cmp(o, p, q),
    }
}

/// Distance order of `p` and `q` on one ray from `o`, compared on raw
/// coordinates so that no rounded difference can tie distinct points.
fn ray_cmp(o: Point, p: Point, q: Point) -> Ordering {
    match p.x.partial_cmp(&o.x) {
        Some(Ordering::Greater) => p.x.partial_cmp(&q.x),
        Some(Ordering::Less) => q.x.partial_cmp(&p.x),
        _ => p.y.partial_cmp(&q.y),
    }
    .unwrap_or(Ordering::Equal)
}

/// Stack scan over presorted points (`pts[0]` is the pivot, at least 3 points).
/// The returned ring is closed on the pivot.
fn graham_scan(pts: &[Point]) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::with_capacity(pts.len() + 1);
    stack.extend_from_slice(&pts[..3]);
    for &c in &pts[3..] {
        while stack.len() >= 2
            && orient_exact(stack[stack.len() - 2], stack[stack.len() - 1], c) <= 0
        {
            stack.pop();
        }
        stack.push(c);
    }
    stack.push(pts[0]);
    stack
}

/// Drop consecutive repeats and vertices lying between their neighbours.
fn clean_ring(ring: &[Point]) -> Vec<Point> {
    debug_assert_eq!(ring.first(), ring.last());
    let mut out: Vec<Point> = Vec::with_capacity(ring.len());
    let mut prev: Option<Point> = None;
    for w in ring.windows(2) {
        let (cur, next) = (w[0], w[1]);
        if cur == next {
            continue;
        }
        if let Some(a) = prev {
            if is_between(a, cur, next) {
                continue;
            }
        }
        out.push(cur);
        prev = Some(cur);
    }
    if let Some(last) = ring.last() {
        out.push(*last);
    }
    out
}

/// `b` collinear with `a`, `c` and within their range on an axis where they
/// differ. Never true for `a == c`.
fn is_between(a: Point, b: Point, c: Point) -> bool {
    if orient_exact(a, b, c) != 0 {
        return false;
    }
    let within = |s: f64, v: f64, t: f64| (s <= v && v <= t) || (t <= v && v <= s);
    (a.x != c.x && within(a.x, b.x, c.x)) || (a.y != c.y && within(a.y, b.y, c.y))
}
