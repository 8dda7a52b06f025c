use anyhow::{ensure, Context, Result};
use cartogeom::hull::{ConvexHull, HullCfg};
use cartogeom::intersect::intersect;
use cartogeom::locate::locate_in_polygon;
use cartogeom::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{from_xy, HullDoc, IntersectionDoc, PolygonDoc};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cartogeom")]
#[command(version, about = "Planar geometry tools: convex hulls, point location, intersections")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point file (csv/parquet with x,y columns, or json [[x,y],..])
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Octagon reduction runs above this many distinct points
        #[arg(long, default_value_t = cartogeom::cfg::HULL_REDUCE_THRESHOLD)]
        reduce_threshold: usize,
    },
    /// Classify a point against a polygon json {exterior, holes}
    Locate {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Intersect two segments given as x1,y1,x2,y2
    Intersect {
        #[arg(
            long = "segment",
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_segment
        )]
        segments: Vec<[f64; 4]>,
    },
    /// Write a seeded random point cloud (csv, parquet or json)
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        /// Half-width of the square, or radius of the disc/circle
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disc,
    Circle,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            reduce_threshold,
        } => hull(input, out, reduce_threshold),
        Action::Locate { polygon, x, y } => locate(polygon, x, y),
        Action::Intersect { segments } => intersect_segments(&segments),
        Action::Sample {
            count,
            seed,
            shape,
            extent,
            out,
        } => sample(count, seed, shape, extent, out),
        Action::Report => report(),
    }
}

fn parse_segment(s: &str) -> Result<[f64; 4], String> {
    let vals = s
        .split(',')
        .map(|t| t.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in {s:?}: {e}"))?;
    <[f64; 4]>::try_from(vals)
        .map_err(|v| format!("expected x1,y1,x2,y2, got {} values", v.len()))
}

fn hull(input: PathBuf, out: PathBuf, reduce_threshold: usize) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), reduce_threshold, "hull");
    let pts = io::read_points(&input)?;
    let builder = ConvexHull::new(&pts).with_cfg(HullCfg { reduce_threshold });
    let result = builder.hull();
    tracing::info!(
        points = pts.len(),
        distinct = builder.len(),
        kind = result.kind(),
        vertices = result.vertices().len(),
        "hull_done"
    );
    io::write_json(&out, &HullDoc::from(&result))?;
    let prov = write_sidecar(
        &out,
        Payload::new(
            "hull",
            json!({
                "input": input.to_string_lossy(),
                "reduce_threshold": reduce_threshold,
                "points": pts.len(),
                "distinct": builder.len(),
            }),
        ),
    )?;
    tracing::info!(provenance = %prov.display(), "sidecar");
    Ok(())
}

fn locate(polygon: PathBuf, x: f64, y: f64) -> Result<()> {
    let bytes = fs::read(&polygon).with_context(|| format!("reading {}", polygon.display()))?;
    let doc: PolygonDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon {}", polygon.display()))?;
    let poly = doc.into_polygon()?;
    let loc = locate_in_polygon(from_xy([x, y]), &poly);
    tracing::info!(polygon = %polygon.display(), x, y, holes = poly.holes.len(), %loc, "locate");
    println!("{loc}");
    Ok(())
}

fn intersect_segments(segments: &[[f64; 4]]) -> Result<()> {
    ensure!(
        segments.len() == 2,
        "expected exactly two --segment values, got {}",
        segments.len()
    );
    let [a, b] = [segments[0], segments[1]];
    let r = intersect(
        from_xy([a[0], a[1]]),
        from_xy([a[2], a[3]]),
        from_xy([b[0], b[1]]),
        from_xy([b[2], b[3]]),
    );
    tracing::info!(count = r.count(), proper = r.is_proper(), "intersect");
    println!("{}", serde_json::to_string_pretty(&IntersectionDoc::from(r))?);
    Ok(())
}

fn sample(count: usize, seed: u64, shape: Shape, extent: f64, out: PathBuf) -> Result<()> {
    tracing::info!(count, seed, ?shape, extent, out = %out.display(), "sample");
    let shape_cfg = match shape {
        Shape::Square => CloudShape::Square { half_width: extent },
        Shape::Disc => CloudShape::Disc { radius: extent },
        Shape::Circle => CloudShape::Circle {
            radius: extent,
            noise: 1e-3,
        },
    };
    let cfg = CloudCfg {
        count,
        shape: shape_cfg,
        ..CloudCfg::default()
    };
    let pts = draw_point_cloud(cfg, ReplayToken::new(seed, 0));
    io::write_points(&out, &pts)?;
    write_sidecar(
        &out,
        Payload::new(
            "sample",
            json!({
                "count": count,
                "seed": seed,
                "shape": format!("{shape:?}").to_lowercase(),
                "extent": extent,
            }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(&[], Payload::new("report", json!({})));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
