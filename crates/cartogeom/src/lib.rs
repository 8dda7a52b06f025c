//! Planar computational geometry core for cartographic styling and rendering.
//!
//! Layers (leaves first)
//! - `robust`: exact-sign orientation of three points.
//! - `intersect`: segment/segment and point/segment intersection.
//! - `ring`: point-in-ring classification and ring orientation.
//! - `locate`: point location against polygons and multi-part geometries
//!   (Boundary Determination Rule).
//! - `hull`: Graham-scan convex hull with octagon point reduction.
//! - `measure`: area, length, centroid and distance on top of the above.
//!
//! All operations are pure functions over caller-owned coordinate slices. Rings
//! are closed by convention (first point equals last); see `ring::close_ring`.
//!
//! API Policy
//! - Callers pass plain `Point` slices; the `Geometry` sum type is the only
//!   structured input and exists for the multi-part dispatch in `locate`,
//!   `hull` and `measure`.

pub mod cfg;
pub mod geometry;
pub mod hull;
pub mod intersect;
pub mod locate;
pub mod measure;
pub mod rand;
pub mod ring;
pub mod robust;
pub mod types;

#[cfg(test)]
mod tests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::{Geometry, Polygon};
pub use hull::{ConvexHull, Hull, HullCfg};
pub use intersect::Intersection;
pub use types::{Envelope, GeomError, Location, Orientation, Point, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{Geometry, Polygon};
    pub use crate::hull::{convex_hull, ConvexHull, Hull, HullCfg};
    pub use crate::intersect::{intersect, intersect_point, Intersection};
    pub use crate::locate::{contains_point_in_polygon, locate_in_polygon, PointLocator};
    pub use crate::measure::{area, centroid, distance, length};
    pub use crate::rand::{draw_point_cloud, draw_radial_ring, CloudCfg, CloudShape, ReplayToken};
    pub use crate::ring::{close_ring, is_ccw, locate_in_ring};
    pub use crate::robust::{orientation, orientation_index};
    pub use crate::types::{Envelope, GeomError, Location, Orientation, Point, Segment};
    pub use nalgebra::Vector2 as Vec2;
}
