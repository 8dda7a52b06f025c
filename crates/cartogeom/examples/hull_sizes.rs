//! Print hull vertex counts for a few random clouds, for quick sanity checks.
//!
//! Usage:
//!   cargo run -p cartogeom --example hull_sizes -- square
//!   cargo run -p cartogeom --example hull_sizes -- circle
//!
//! Square and disc clouds should give small hulls (logarithmic growth); noisy
//! circles keep most of their points.

use cartogeom::hull::ConvexHull;
use cartogeom::measure::{area, centroid};
use cartogeom::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
use nalgebra::Vector2;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "square".to_string());
    let shape = match mode.as_str() {
        "square" => CloudShape::Square { half_width: 100.0 },
        "disc" => CloudShape::Disc { radius: 100.0 },
        "circle" => CloudShape::Circle {
            radius: 100.0,
            noise: 1e-4,
        },
        _ => {
            eprintln!("usage: hull_sizes [square|disc|circle]");
            return;
        }
    };
    for (i, &n) in [10usize, 100, 1_000, 10_000].iter().enumerate() {
        let cfg = CloudCfg {
            count: n,
            shape,
            center: Vector2::zeros(),
        };
        let pts = draw_point_cloud(cfg, ReplayToken::new(2025, i as u64));
        let hull = ConvexHull::new(&pts).hull();
        let g = hull.clone().into_geometry();
        println!(
            "{mode} n={n}: kind={}, vertices={}, area={:.2}, centroid={:?}",
            hull.kind(),
            hull.vertices().len(),
            area(&g),
            centroid(&g).map(|c| (c.x, c.y)),
        );
    }
}
