//! Point location against polygons and arbitrary geometries.
//!
//! Policy
//! - Polygons: the exterior ring decides first; a hole turns its interior into
//!   polygon exterior and its edges into polygon boundary.
//! - Multi-part geometries follow the Boundary Determination Rule (mod-2): a
//!   point is on the boundary iff it lies on the boundary of an odd number of
//!   parts. Two squares sharing an edge therefore have that edge in their
//!   common interior.
//! - Curves: the endpoints of an open curve are its boundary; closed curves have
//!   none.

use crate::geometry::{Geometry, Polygon, Primitive};
use crate::ring::{is_on_line, locate_in_ring};
use crate::types::{Location, Point};

/// Location of `p` relative to a polygon with holes.
pub fn locate_in_polygon(p: Point, poly: &Polygon) -> Location {
    if poly.is_empty() {
        return Location::Exterior;
    }
    match locate_in_ring(p, &poly.exterior) {
        Location::Interior => {}
        outside_or_edge => return outside_or_edge,
    }
    for hole in &poly.holes {
        match locate_in_ring(p, hole) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

/// Strict containment: interior of the exterior ring and exterior of every hole.
pub fn contains_point_in_polygon(p: Point, poly: &Polygon) -> bool {
    !poly.is_empty()
        && locate_in_ring(p, &poly.exterior) == Location::Interior
        && poly
            .holes
            .iter()
            .all(|h| locate_in_ring(p, h) == Location::Exterior)
}

/// Location of `p` relative to a polyline.
pub fn locate_on_curve(p: Point, pts: &[Point], closed: bool) -> Location {
    let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
        return Location::Exterior;
    };
    if !closed && (p == *first || p == *last) {
        return Location::Boundary;
    }
    if is_on_line(p, pts) || (pts.len() == 1 && p == *first) {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Location of `p` relative to a single primitive part.
pub fn locate_in_primitive(p: Point, prim: Primitive<'_>) -> Location {
    match prim {
        Primitive::Point(q) => {
            if p == q {
                Location::Interior
            } else {
                Location::Exterior
            }
        }
        Primitive::Curve { points, closed } => locate_on_curve(p, points, closed),
        Primitive::Surface(poly) => locate_in_polygon(p, poly),
    }
}

/// Accumulator for the Boundary Determination Rule.
///
/// Feed it the per-part locations of one query point, then read the combined
/// answer from `location`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointLocator {
    is_in: bool,
    boundaries: usize,
}

impl PointLocator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of `p` relative to any geometry. Empty geometries → `Exterior`.
    pub fn locate(p: Point, geom: &Geometry) -> Location {
        let mut acc = Self::new();
        for prim in geom.primitives() {
            acc.record(locate_in_primitive(p, prim));
        }
        acc.location()
    }

    /// True unless `p` is exterior to `geom`.
    #[inline]
    pub fn intersects(p: Point, geom: &Geometry) -> bool {
        Self::locate(p, geom) != Location::Exterior
    }

    #[inline]
    pub fn record(&mut self, loc: Location) {
        match loc {
            Location::Interior => self.is_in = true,
            Location::Boundary => self.boundaries += 1,
            Location::Exterior => {}
        }
    }

    /// Odd boundary count → `Boundary`; even nonzero count or any interior hit
    /// → `Interior`; otherwise `Exterior`.
    pub fn location(&self) -> Location {
        if self.boundaries % 2 == 1 {
            Location::Boundary
        } else if self.boundaries > 0 || self.is_in {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Area-only location: `Interior` iff some surface part strictly contains `p`.
///
/// Non-areal parts are ignored and boundary points report `Exterior`. Cheaper
/// than `PointLocator::locate` when only "inside or not" matters.
pub fn locate_in_area(p: Point, geom: &Geometry) -> Location {
    let inside = geom.primitives().iter().any(|prim| match prim {
        Primitive::Surface(poly) => contains_point_in_polygon(p, poly),
        _ => false,
    });
    if inside {
        Location::Interior
    } else {
        Location::Exterior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square(x0: f64, y0: f64, side: f64) -> Vec<Point> {
        vec![
            vector![x0, y0],
            vector![x0 + side, y0],
            vector![x0 + side, y0 + side],
            vector![x0, y0 + side],
            vector![x0, y0],
        ]
    }

    fn donut() -> Polygon {
        Polygon::new(square(0.0, 0.0, 10.0), vec![square(3.0, 3.0, 4.0)])
    }

    #[test]
    fn polygon_with_hole() {
        let poly = donut();
        assert_eq!(locate_in_polygon(vector![1.0, 1.0], &poly), Location::Interior);
        assert_eq!(locate_in_polygon(vector![5.0, 5.0], &poly), Location::Exterior);
        assert_eq!(locate_in_polygon(vector![3.0, 5.0], &poly), Location::Boundary);
        assert_eq!(locate_in_polygon(vector![10.0, 5.0], &poly), Location::Boundary);
        assert_eq!(locate_in_polygon(vector![11.0, 5.0], &poly), Location::Exterior);
        assert_eq!(
            locate_in_polygon(vector![1.0, 1.0], &Polygon::default()),
            Location::Exterior
        );
    }

    #[test]
    fn containment_excludes_boundaries() {
        let poly = donut();
        assert!(contains_point_in_polygon(vector![1.0, 1.0], &poly));
        assert!(!contains_point_in_polygon(vector![5.0, 5.0], &poly));
        assert!(!contains_point_in_polygon(vector![3.0, 5.0], &poly));
        assert!(!contains_point_in_polygon(vector![0.0, 5.0], &poly));
    }

    #[test]
    fn shared_edge_is_interior_under_mod_2() {
        let g = Geometry::MultiSurface(vec![
            Polygon::new(square(0.0, 0.0, 1.0), vec![]),
            Polygon::new(square(1.0, 0.0, 1.0), vec![]),
        ]);
        assert_eq!(PointLocator::locate(vector![1.0, 0.5], &g), Location::Interior);
        assert_eq!(PointLocator::locate(vector![0.0, 0.5], &g), Location::Boundary);
        assert_eq!(PointLocator::locate(vector![0.5, 0.5], &g), Location::Interior);
        assert_eq!(PointLocator::locate(vector![3.0, 0.5], &g), Location::Exterior);
        // Corner (1,1) is on both boundaries.
        assert_eq!(PointLocator::locate(vector![1.0, 1.0], &g), Location::Interior);
    }

    #[test]
    fn curve_endpoints_are_boundary() {
        let line = Geometry::Curve(vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0]]);
        assert_eq!(PointLocator::locate(vector![0.0, 0.0], &line), Location::Boundary);
        assert_eq!(PointLocator::locate(vector![1.0, 0.0], &line), Location::Interior);
        assert_eq!(PointLocator::locate(vector![2.0, 0.0], &line), Location::Interior);
        assert_eq!(PointLocator::locate(vector![1.0, 1.0], &line), Location::Exterior);

        let ring = Geometry::Ring(square(0.0, 0.0, 1.0));
        assert_eq!(PointLocator::locate(vector![0.0, 0.0], &ring), Location::Interior);
        assert_eq!(PointLocator::locate(vector![0.5, 0.5], &ring), Location::Exterior);
    }

    #[test]
    fn curves_joined_at_an_end_share_interior() {
        let g = Geometry::MultiCurve(vec![
            vec![vector![0.0, 0.0], vector![1.0, 0.0]],
            vec![vector![1.0, 0.0], vector![2.0, 1.0]],
        ]);
        assert_eq!(PointLocator::locate(vector![1.0, 0.0], &g), Location::Interior);
        assert_eq!(PointLocator::locate(vector![0.0, 0.0], &g), Location::Boundary);
        assert_eq!(PointLocator::locate(vector![2.0, 1.0], &g), Location::Boundary);
    }

    #[test]
    fn mixed_and_empty_geometries() {
        let g = Geometry::MultiPrimitive(vec![
            Geometry::MultiPoint(vec![vector![5.0, 5.0]]),
            Geometry::Surface(donut()),
            Geometry::Curve(vec![vector![20.0, 0.0], vector![30.0, 0.0]]),
        ]);
        assert_eq!(PointLocator::locate(vector![5.0, 5.0], &g), Location::Interior);
        assert_eq!(PointLocator::locate(vector![20.0, 0.0], &g), Location::Boundary);
        assert_eq!(PointLocator::locate(vector![6.0, 6.0], &g), Location::Exterior);
        assert!(PointLocator::intersects(vector![25.0, 0.0], &g));

        let empty = Geometry::MultiPrimitive(vec![]);
        assert_eq!(PointLocator::locate(vector![0.0, 0.0], &empty), Location::Exterior);
    }

    #[test]
    fn area_locator_ignores_lines_and_boundaries() {
        let g = Geometry::MultiPrimitive(vec![
            Geometry::Surface(donut()),
            Geometry::Curve(vec![vector![20.0, 0.0], vector![30.0, 0.0]]),
        ]);
        assert_eq!(locate_in_area(vector![1.0, 1.0], &g), Location::Interior);
        assert_eq!(locate_in_area(vector![0.0, 1.0], &g), Location::Exterior);
        assert_eq!(locate_in_area(vector![25.0, 0.0], &g), Location::Exterior);
        assert_eq!(locate_in_area(vector![5.0, 5.0], &g), Location::Exterior);
    }

    #[test]
    fn accumulator_rule() {
        let mut acc = PointLocator::new();
        assert_eq!(acc.location(), Location::Exterior);
        acc.record(Location::Boundary);
        assert_eq!(acc.location(), Location::Boundary);
        acc.record(Location::Boundary);
        assert_eq!(acc.location(), Location::Interior);
        acc.record(Location::Exterior);
        assert_eq!(acc.location(), Location::Interior);
    }
}
