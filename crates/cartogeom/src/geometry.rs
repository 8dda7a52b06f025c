//! Geometry object model consumed by the algorithms.
//!
//! - `Polygon`: exterior ring plus holes. Nesting and simplicity are assumed,
//!   not checked; `try_new` only validates closure and vertex counts.
//! - `Geometry`: closed sum type over the primitive and aggregate kinds. All
//!   dispatch goes through `Geometry::primitives`, which flattens aggregates into
//!   borrowed `Primitive` views with one exhaustive match.

use crate::ring::validate_ring;
use crate::types::{Envelope, GeomError, Point};

/// Area feature: one exterior ring and zero or more hole rings, all closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl Polygon {
    /// Wrap rings without validation.
    #[inline]
    pub fn new(exterior: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { exterior, holes }
    }

    /// Wrap rings after checking each is closed with at least 3 distinct points.
    pub fn try_new(exterior: Vec<Point>, holes: Vec<Vec<Point>>) -> Result<Self, GeomError> {
        validate_ring(&exterior)?;
        for h in &holes {
            validate_ring(h)?;
        }
        Ok(Self { exterior, holes })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Exterior first, then holes in order.
    pub fn rings(&self) -> impl Iterator<Item = &[Point]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    #[inline]
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::of_points(&self.exterior)
    }
}

/// Planar geometry of any supported kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    /// Open or closed polyline.
    Curve(Vec<Point>),
    /// Closed polyline (first == last); a curve without boundary.
    Ring(Vec<Point>),
    Surface(Polygon),
    MultiPoint(Vec<Point>),
    MultiCurve(Vec<Vec<Point>>),
    MultiSurface(Vec<Polygon>),
    MultiPrimitive(Vec<Geometry>),
}

/// Borrowed view of one primitive part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive<'a> {
    Point(Point),
    /// Polyline; `closed` is true for rings and for curves whose ends coincide.
    Curve { points: &'a [Point], closed: bool },
    Surface(&'a Polygon),
}

impl<'a> Primitive<'a> {
    /// Topological dimension: 0, 1 or 2.
    #[inline]
    pub fn dimension(&self) -> usize {
        match self {
            Primitive::Point(_) => 0,
            Primitive::Curve { .. } => 1,
            Primitive::Surface(_) => 2,
        }
    }

    /// All vertices, including ring closing points.
    pub fn vertices(&self) -> Vec<Point> {
        match *self {
            Primitive::Point(p) => vec![p],
            Primitive::Curve { points, .. } => points.to_vec(),
            Primitive::Surface(poly) => poly.rings().flatten().copied().collect(),
        }
    }

    /// Edges as point pairs. A point, or a single-vertex curve, yields one
    /// zero-length edge so distance code can treat every part uniformly.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let from_line = |pts: &[Point]| -> Vec<(Point, Point)> {
            match pts {
                [] => Vec::new(),
                [p] => vec![(*p, *p)],
                _ => pts.windows(2).map(|w| (w[0], w[1])).collect(),
            }
        };
        match *self {
            Primitive::Point(p) => vec![(p, p)],
            Primitive::Curve { points, .. } => from_line(points),
            Primitive::Surface(poly) => poly.rings().flat_map(from_line).collect(),
        }
    }
}

impl Geometry {
    /// True if the geometry holds no coordinates at all.
    pub fn is_empty(&self) -> bool {
        self.primitives().iter().all(|p| match p {
            Primitive::Point(_) => false,
            Primitive::Curve { points, .. } => points.is_empty(),
            Primitive::Surface(poly) => poly.is_empty(),
        })
    }

    /// Flatten into primitive parts (aggregates recurse, empty parts are skipped).
    pub fn primitives(&self) -> Vec<Primitive<'_>> {
        let mut out = Vec::new();
        self.collect_primitives(&mut out);
        out
    }

    fn collect_primitives<'a>(&'a self, out: &mut Vec<Primitive<'a>>) {
        let curve = |pts: &'a [Point], closed: bool| Primitive::Curve {
            points: pts,
            closed,
        };
        match self {
            Geometry::Point(p) => out.push(Primitive::Point(*p)),
            Geometry::Curve(pts) => {
                if !pts.is_empty() {
                    out.push(curve(pts, pts.first() == pts.last() && pts.len() > 1));
                }
            }
            Geometry::Ring(pts) => {
                if !pts.is_empty() {
                    out.push(curve(pts, true));
                }
            }
            Geometry::Surface(poly) => {
                if !poly.is_empty() {
                    out.push(Primitive::Surface(poly));
                }
            }
            Geometry::MultiPoint(pts) => out.extend(pts.iter().map(|p| Primitive::Point(*p))),
            Geometry::MultiCurve(lines) => {
                for pts in lines.iter().filter(|l| !l.is_empty()) {
                    out.push(curve(pts, pts.first() == pts.last() && pts.len() > 1));
                }
            }
            Geometry::MultiSurface(polys) => out.extend(
                polys
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(Primitive::Surface),
            ),
            Geometry::MultiPrimitive(parts) => {
                for g in parts {
                    g.collect_primitives(out);
                }
            }
        }
    }

    /// Every coordinate of every part, in storage order (duplicates kept).
    pub fn coordinates(&self) -> Vec<Point> {
        self.primitives()
            .iter()
            .flat_map(|p| p.vertices())
            .collect()
    }

    /// Highest dimension among the parts; `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        self.primitives().iter().map(Primitive::dimension).max()
    }

    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::of_points(&self.coordinates())
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Surface(p)
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}
