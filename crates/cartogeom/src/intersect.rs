//! Segment intersection with exact topological decisions.
//!
//! - Which case applies (none / point / collinear overlap) is decided purely
//!   from `robust::orientation_index` and closed-envelope tests, so the outcome
//!   is exact for the given doubles.
//! - Only the coordinates of a proper crossing are computed numerically, via
//!   homogeneous line-line intersection after translating the four endpoints so
//!   their common envelope is centred on the origin.
//! - Endpoint intersections copy the endpoint verbatim instead of recomputing it.

use nalgebra::{Vector2, Vector3};

use crate::robust::orientation_index;
use crate::types::{Envelope, Point};

/// Outcome of intersecting two segments (or a point with a segment).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    None,
    /// Single shared point; `proper` iff it is interior to both segments.
    Point { pt: Point, proper: bool },
    /// Collinear overlap bounded by the two points.
    Collinear(Point, Point),
}

impl Intersection {
    #[inline]
    pub fn has_intersection(&self) -> bool {
        !matches!(self, Intersection::None)
    }

    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, Intersection::Point { proper: true, .. })
    }

    #[inline]
    pub fn is_collinear(&self) -> bool {
        matches!(self, Intersection::Collinear(..))
    }

    /// Number of intersection points (0, 1 or 2).
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Intersection::None => 0,
            Intersection::Point { .. } => 1,
            Intersection::Collinear(..) => 2,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match *self {
            Intersection::None => Vec::new(),
            Intersection::Point { pt, .. } => vec![pt],
            Intersection::Collinear(a, b) => vec![a, b],
        }
    }
}

/// Intersect segments `p1p2` and `q1q2`.
pub fn intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> Intersection {
    if !Envelope::of_segment(p1, p2).intersects(&Envelope::of_segment(q1, q2)) {
        return Intersection::None;
    }

    // Both endpoints of one segment strictly on the same side of the other's line.
    let pq1 = orientation_index(p1, p2, q1);
    let pq2 = orientation_index(p1, p2, q2);
    if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
        return Intersection::None;
    }
    let qp1 = orientation_index(q1, q2, p1);
    let qp2 = orientation_index(q1, q2, p2);
    if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
        return Intersection::None;
    }

    if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
        return collinear_intersection(p1, p2, q1, q2);
    }

    // An endpoint lying on the other line is the intersection point; the last
    // match wins, in the order q1, q2, p1, p2.
    if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
        let pt = [(pq1, q1), (pq2, q2), (qp1, p1), (qp2, p2)]
            .into_iter()
            .filter(|(o, _)| *o == 0)
            .map(|(_, pt)| pt)
            .last()
            .unwrap_or(q1);
        return Intersection::Point { pt, proper: false };
    }

    Intersection::Point {
        pt: proper_intersection(p1, p2, q1, q2),
        proper: true,
    }
}

/// Pick the shared sub-segment of two collinear segments.
///
/// The representative points follow a fixed case order: q inside p, p inside q,
/// then the four partial overlaps (q1/p1, q1/p2, q2/p1, q2/p2). A partial
/// overlap whose two points coincide, with neither remaining endpoint inside the
/// other segment, is an endpoint touch and reported as a single point.
fn collinear_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Intersection {
    let env_p = Envelope::of_segment(p1, p2);
    let env_q = Envelope::of_segment(q1, q2);
    let p1q1p2 = env_p.contains(q1);
    let p1q2p2 = env_p.contains(q2);
    let q1p1q2 = env_q.contains(p1);
    let q1p2q2 = env_q.contains(p2);

    let (a, b, touch) = if p1q1p2 && p1q2p2 {
        (q1, q2, false)
    } else if q1p1q2 && q1p2q2 {
        (p1, p2, false)
    } else if p1q1p2 && q1p1q2 {
        (q1, p1, q1 == p1 && !p1q2p2 && !q1p2q2)
    } else if p1q1p2 && q1p2q2 {
        (q1, p2, q1 == p2 && !p1q2p2 && !q1p1q2)
    } else if p1q2p2 && q1p1q2 {
        (q2, p1, q2 == p1 && !p1q1p2 && !q1p2q2)
    } else if p1q2p2 && q1p2q2 {
        (q2, p2, q2 == p2 && !p1q1p2 && !q1p1q2)
    } else {
        return Intersection::None;
    };
    // Zero-length input can bound the overlap by one point twice.
    if touch || a == b {
        Intersection::Point {
            pt: a,
            proper: false,
        }
    } else {
        Intersection::Collinear(a, b)
    }
}

/// Crossing point of two segments known to intersect properly.
///
/// Panics if the homogeneous solution is not representable: the orientation
/// tests above exclude parallel lines, so reaching that state is a defect.
fn proper_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Point {
    let env = Envelope::of_segment(p1, p2).merge(&Envelope::of_segment(q1, q2));
    let c = env.center();
    match line_intersection(p1 - c, p2 - c, q1 - c, q2 - c) {
        Some(pt) => pt + c,
        None => panic!(
            "proper intersection not representable: ({p1:?}, {p2:?}) x ({q1:?}, {q2:?})"
        ),
    }
}

/// Intersection of the infinite lines through `p1p2` and `q1q2` in homogeneous
/// coordinates. `None` when the lines are parallel (point at infinity).
pub fn line_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Option<Point> {
    let l1 = homogeneous(p1).cross(&homogeneous(p2));
    let l2 = homogeneous(q1).cross(&homogeneous(q2));
    let h = l1.cross(&l2);
    let x = h.x / h.z;
    let y = h.y / h.z;
    if x.is_finite() && y.is_finite() {
        Some(Vector2::new(x, y))
    } else {
        None
    }
}

#[inline]
fn homogeneous(p: Point) -> Vector3<f64> {
    Vector3::new(p.x, p.y, 1.0)
}

/// Intersect point `p` with segment `p1p2`.
///
/// On the segment: `Point { pt: p, proper }` with `proper` false at an endpoint.
pub fn intersect_point(p: Point, p1: Point, p2: Point) -> Intersection {
    if Envelope::of_segment(p1, p2).contains(p)
        && orientation_index(p1, p2, p) == 0
        && orientation_index(p2, p1, p) == 0
    {
        let proper = p != p1 && p != p2;
        return Intersection::Point { pt: p, proper };
    }
    Intersection::None
}

/// Whether `p` lies on the closed segment `p1p2`.
#[inline]
pub fn is_on_segment(p: Point, p1: Point, p2: Point) -> bool {
    intersect_point(p, p1, p2).has_intersection()
}
