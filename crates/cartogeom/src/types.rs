//! Basic 2D value types shared by all algorithms.
//!
//! - `Point`: plain `nalgebra::Vector2<f64>`; equality is exact unless one of the
//!   fuzzy helpers (`equals_eps`, `near`) is used explicitly.
//! - `Envelope`: closed axis-aligned box used for fast rejection.
//! - `Segment`: ordered pair with the `r ∈ [0,1]` parametrisation from `p0` to `p1`.
//! - `Location`, `Orientation`: classification results.
//! - `GeomError`: the few validating constructors report through it.

use nalgebra::Vector2;
use std::fmt;

use crate::cfg::{DISTANCE_SQ_EPS, POSITION_EPS};

/// A position in the plane.
pub type Point = Vector2<f64>;

/// Per-axis equality within `POSITION_EPS`.
#[inline]
pub fn equals_eps(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= POSITION_EPS && (a.y - b.y).abs() <= POSITION_EPS
}

/// Squared-distance proximity within `DISTANCE_SQ_EPS`.
#[inline]
pub fn near(a: Point, b: Point) -> bool {
    (a - b).norm_squared() <= DISTANCE_SQ_EPS
}

/// Exactly distinct points, sorted by x then y.
///
/// Signed zeros are folded to `+0.0` so `-0.0` and `0.0` dedup together.
pub fn unique_points(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points
        .iter()
        .map(|p| Vector2::new(p.x + 0.0, p.y + 0.0))
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    pts
}

/// Topological position of a point relative to a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::Interior => "interior",
            Location::Boundary => "boundary",
            Location::Exterior => "exterior",
        };
        f.write_str(s)
    }
}

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Map a sign in `{-1, 0, +1}` (any negative/positive value accepted).
    #[inline]
    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            1 => Orientation::CounterClockwise,
            -1 => Orientation::Clockwise,
            _ => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::from_sign(-self.sign())
    }
}

/// Closed axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min: Point,
    pub max: Point,
}

impl Envelope {
    #[inline]
    pub fn of_segment(p0: Point, p1: Point) -> Self {
        Self {
            min: Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            max: Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// Bounding box of a point set; `None` if the set is empty.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut env = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            env.expand_to_include(*p);
        }
        Some(env)
    }

    #[inline]
    pub fn expand_to_include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[inline]
    pub fn merge(&self, other: &Envelope) -> Envelope {
        let mut out = *self;
        out.expand_to_include(other.min);
        out.expand_to_include(other.max);
        out
    }

    /// Closed-box overlap (touching boxes intersect).
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }

    /// Closed-box membership.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }
}

/// Directed line segment `p0 → p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).norm()
    }

    #[inline]
    pub fn envelope(&self) -> Envelope {
        Envelope::of_segment(self.p0, self.p1)
    }

    /// Point at parameter `r` (0 → `p0`, 1 → `p1`); not clamped.
    #[inline]
    pub fn point_along(&self, r: f64) -> Point {
        self.p0 + (self.p1 - self.p0) * r
    }

    /// Parameter of the orthogonal projection of `p` onto the supporting line.
    ///
    /// Exact endpoints map to exactly 0 and 1. A zero-length segment yields 0.
    pub fn projection_factor(&self, p: Point) -> f64 {
        if p == self.p0 {
            return 0.0;
        }
        if p == self.p1 {
            return 1.0;
        }
        let d = self.p1 - self.p0;
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.p0).dot(&d) / len2
    }

    /// Closest point of the segment to `p`.
    pub fn closest_point(&self, p: Point) -> Point {
        let r = self.projection_factor(p);
        if r <= 0.0 {
            self.p0
        } else if r >= 1.0 {
            self.p1
        } else {
            self.point_along(r)
        }
    }
}

/// Errors from the validating constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    EmptyInput,
    RingNotClosed { first: Point, last: Point },
    TooFewPoints { needed: usize, got: usize },
    ParamOutOfRange { param: f64, length: f64 },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty coordinate sequence"),
            Self::RingNotClosed { first, last } => write!(
                f,
                "ring is not closed: first ({}, {}) != last ({}, {})",
                first.x, first.y, last.x, last.y
            ),
            Self::TooFewPoints { needed, got } => {
                write!(f, "too few distinct points: need {needed}, got {got}")
            }
            Self::ParamOutOfRange { param, length } => {
                write!(f, "arc-length parameter {param} outside [0, {length}]")
            }
        }
    }
}

impl std::error::Error for GeomError {}
