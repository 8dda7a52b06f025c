//! Reproducible random inputs: point clouds and star-shaped rings.
//!
//! Purpose
//! - Feed benches, property tests and the CLI `sample` command with inputs that
//!   can be regenerated from a `(seed, index)` replay token alone.
//!
//! Model
//! - Clouds: uniform in a square, uniform in a disc, or on a circle with radial
//!   noise (many hull vertices, which stresses the scan rather than the
//!   octagon reduction).
//! - Rings: `n` angles around the origin with jittered radii, each angle
//!   jittered by less than half a sector. The angles stay increasing, so the
//!   ring is simple (star-shaped w.r.t. the origin); it is generally not convex.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Region a cloud is drawn from, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Square { half_width: f64 },
    Disc { radius: f64 },
    /// Points at `radius * (1 + u)` with `u ∈ [-noise, noise]`.
    Circle { radius: f64, noise: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Square { half_width: 100.0 },
            center: Vector2::zeros(),
        }
    }
}

/// Draw `cfg.count` points. Same token, same points.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let tau = 2.0 * std::f64::consts::PI;
    (0..cfg.count)
        .map(|_| {
            let p = match cfg.shape {
                CloudShape::Square { half_width } => {
                    let h = half_width.abs();
                    Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
                }
                CloudShape::Disc { radius } => {
                    // sqrt for uniform density
                    let r = radius.abs() * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * tau;
                    Vector2::new(r * th.cos(), r * th.sin())
                }
                CloudShape::Circle { radius, noise } => {
                    let u = (rng.gen::<f64>() * 2.0 - 1.0) * noise.max(0.0);
                    let r = radius.abs() * (1.0 + u);
                    let th = rng.gen::<f64>() * tau;
                    Vector2::new(r * th.cos(), r * th.sin())
                }
            };
            cfg.center + p
        })
        .collect()
}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 10.0,
        }
    }
}

/// Draw a closed, simple, counterclockwise ring around the origin.
pub fn draw_radial_ring(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.abs().max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let mut ring: Vec<Point> = (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    ring.push(ring[0]);
    ring
}
