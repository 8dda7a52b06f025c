//! Scalar measures over geometries: area, length, centroid, distance.
//!
//! Policy
//! - Area and length sum over all parts; holes subtract area but add length.
//! - Centroids weight by the highest dimension present: a multi-part geometry
//!   with any surface ignores its curves and points.
//! - Distance is the minimum over all part pairs and is `0` as soon as the
//!   geometries touch, cross, or one contains a vertex of the other.

use crate::geometry::{Geometry, Primitive};
use crate::intersect::intersect;
use crate::locate::locate_in_polygon;
use crate::types::{GeomError, Location, Point, Segment};

pub use crate::ring::signed_area;

/// Total area of all surface parts.
pub fn area(geom: &Geometry) -> f64 {
    geom.primitives()
        .iter()
        .map(|prim| match prim {
            Primitive::Surface(poly) => {
                let shell = signed_area(&poly.exterior).abs();
                let holes: f64 = poly.holes.iter().map(|h| signed_area(h).abs()).sum();
                shell - holes
            }
            _ => 0.0,
        })
        .sum()
}

/// Summed length of a polyline.
pub fn line_length(pts: &[Point]) -> f64 {
    pts.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Total length of all curves plus the perimeters of all surfaces.
pub fn length(geom: &Geometry) -> f64 {
    geom.primitives()
        .iter()
        .map(|prim| match *prim {
            Primitive::Point(_) => 0.0,
            Primitive::Curve { points, .. } => line_length(points),
            Primitive::Surface(poly) => poly.rings().map(line_length).sum(),
        })
        .sum()
}

/// Point at arc length `distance` from the start of the polyline.
///
/// Errors on empty input or a distance outside `[0, length]`.
pub fn point_at(pts: &[Point], distance: f64) -> Result<Point, GeomError> {
    let first = *pts.first().ok_or(GeomError::EmptyInput)?;
    let total = line_length(pts);
    if !(0.0..=total).contains(&distance) {
        return Err(GeomError::ParamOutOfRange {
            param: distance,
            length: total,
        });
    }
    let mut walked = 0.0;
    for w in pts.windows(2) {
        let seg = Segment::new(w[0], w[1]);
        let len = seg.length();
        if len > 0.0 && walked + len >= distance {
            return Ok(seg.point_along((distance - walked) / len));
        }
        walked += len;
    }
    Ok(pts.last().copied().unwrap_or(first))
}

/// Centroid of a geometry; `None` when empty.
pub fn centroid(geom: &Geometry) -> Option<Point> {
    let prims = geom.primitives();
    let dim = prims.iter().map(Primitive::dimension).max()?;
    let parts: Vec<Primitive<'_>> = prims.into_iter().filter(|p| p.dimension() == dim).collect();
    match dim {
        0 => point_centroid(parts.iter().flat_map(|p| p.vertices())),
        1 => line_centroid(&parts),
        _ => area_centroid(&parts).or_else(|| line_centroid(&parts)),
    }
}

fn point_centroid(pts: impl Iterator<Item = Point>) -> Option<Point> {
    let mut sum = Point::zeros();
    let mut n = 0usize;
    for p in pts {
        sum += p;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

/// Length-weighted segment midpoints; falls back to the vertex average for
/// zero-length input.
fn line_centroid(parts: &[Primitive<'_>]) -> Option<Point> {
    let mut sum = Point::zeros();
    let mut total = 0.0;
    for prim in parts {
        for (a, b) in prim.edges() {
            let len = (b - a).norm();
            sum += (a + b) * (0.5 * len);
            total += len;
        }
    }
    if total > 0.0 {
        Some(sum / total)
    } else {
        point_centroid(parts.iter().flat_map(|p| p.vertices()))
    }
}

/// Area-weighted ring centroids; holes carry negative weight.
fn area_centroid(parts: &[Primitive<'_>]) -> Option<Point> {
    let mut sum = Point::zeros();
    let mut total = 0.0;
    for prim in parts {
        let Primitive::Surface(poly) = prim else {
            continue;
        };
        for (k, ring) in poly.rings().enumerate() {
            let Some((a, c)) = ring_area_centroid(ring) else {
                continue;
            };
            let w = if k == 0 { a.abs() } else { -a.abs() };
            sum += c * w;
            total += w;
        }
    }
    (total > 0.0).then(|| sum / total)
}

/// Signed area and centroid of one closed ring, shifted by its first vertex.
fn ring_area_centroid(ring: &[Point]) -> Option<(f64, Point)> {
    let origin = *ring.first()?;
    let mut twice = 0.0;
    let mut c = Point::zeros();
    for w in ring.windows(2) {
        let p = w[0] - origin;
        let q = w[1] - origin;
        let cross = p.x * q.y - q.x * p.y;
        twice += cross;
        c += (p + q) * cross;
    }
    if twice == 0.0 {
        return None;
    }
    Some((twice * 0.5, origin + c / (3.0 * twice)))
}

/// Distance from `p` to the closed segment `a b`.
pub fn distance_point_segment(p: Point, a: Point, b: Point) -> f64 {
    (p - Segment::new(a, b).closest_point(p)).norm()
}

/// Distance between two closed segments; `0` if they intersect.
pub fn distance_segment_segment(a: Point, b: Point, c: Point, d: Point) -> f64 {
    if a == b {
        return distance_point_segment(a, c, d);
    }
    if c == d {
        return distance_point_segment(c, a, b);
    }
    if intersect(a, b, c, d).has_intersection() {
        return 0.0;
    }
    distance_point_segment(a, c, d)
        .min(distance_point_segment(b, c, d))
        .min(distance_point_segment(c, a, b))
        .min(distance_point_segment(d, a, b))
}

/// Minimum distance between two geometries; `f64::INFINITY` if either is empty.
pub fn distance(g1: &Geometry, g2: &Geometry) -> f64 {
    let (pa, pb) = (g1.primitives(), g2.primitives());
    let mut best = f64::INFINITY;
    for a in &pa {
        for b in &pb {
            best = best.min(primitive_distance(*a, *b));
            if best == 0.0 {
                return 0.0;
            }
        }
    }
    best
}

fn primitive_distance(a: Primitive<'_>, b: Primitive<'_>) -> f64 {
    if covers_a_vertex(a, b) || covers_a_vertex(b, a) {
        return 0.0;
    }
    let (ea, eb) = (a.edges(), b.edges());
    let mut best = f64::INFINITY;
    for &(p, q) in &ea {
        for &(r, s) in &eb {
            best = best.min(distance_segment_segment(p, q, r, s));
            if best == 0.0 {
                return 0.0;
            }
        }
    }
    best
}

/// Whether surface `outer` contains any vertex of `inner`.
fn covers_a_vertex(outer: Primitive<'_>, inner: Primitive<'_>) -> bool {
    match outer {
        Primitive::Surface(poly) => inner
            .vertices()
            .iter()
            .any(|v| locate_in_polygon(*v, poly) != Location::Exterior),
        _ => false,
    }
}
