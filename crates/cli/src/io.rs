//! File formats for the CLI: point tables in, JSON documents out.
//!
//! - Point tables: CSV or Parquet with numeric `x`,`y` columns (read through
//!   polars), or a JSON array of `[x, y]` pairs.
//! - Polygons: `{ "exterior": [[x,y],..], "holes": [[[x,y],..],..] }`; rings may
//!   be given open and are closed on load.

use anyhow::{bail, ensure, Context, Result};
use cartogeom::prelude::Vec2;
use cartogeom::ring::{close_ring, signed_area};
use cartogeom::{Hull, Intersection, Point, Polygon};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Xy = [f64; 2];

#[inline]
pub fn to_xy(p: Point) -> Xy {
    [p.x, p.y]
}

#[inline]
pub fn from_xy(xy: Xy) -> Point {
    Vec2::new(xy[0], xy[1])
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PolygonDoc {
    pub exterior: Vec<Xy>,
    #[serde(default)]
    pub holes: Vec<Vec<Xy>>,
}

impl PolygonDoc {
    pub fn into_polygon(self) -> Result<Polygon> {
        let ring = |pts: Vec<Xy>, what: &str| -> Result<Vec<Point>> {
            let pts: Vec<Point> = pts.into_iter().map(from_xy).collect();
            close_ring(&pts).with_context(|| format!("invalid {what} ring"))
        };
        let exterior = ring(self.exterior, "exterior")?;
        let holes = self
            .holes
            .into_iter()
            .enumerate()
            .map(|(i, h)| ring(h, &format!("hole {i}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, holes))
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HullDoc {
    Empty,
    Point { point: Xy },
    Segment { points: [Xy; 2] },
    Polygon { ring: Vec<Xy>, area: f64 },
}

impl From<&Hull> for HullDoc {
    fn from(h: &Hull) -> Self {
        match h {
            Hull::Empty => HullDoc::Empty,
            Hull::Point(p) => HullDoc::Point { point: to_xy(*p) },
            Hull::Segment(a, b) => HullDoc::Segment {
                points: [to_xy(*a), to_xy(*b)],
            },
            Hull::Polygon(poly) => HullDoc::Polygon {
                ring: poly.exterior.iter().copied().map(to_xy).collect(),
                area: signed_area(&poly.exterior),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntersectionDoc {
    None,
    Point { point: Xy, proper: bool },
    Collinear { points: [Xy; 2] },
}

impl From<Intersection> for IntersectionDoc {
    fn from(r: Intersection) -> Self {
        match r {
            Intersection::None => IntersectionDoc::None,
            Intersection::Point { pt, proper } => IntersectionDoc::Point {
                point: to_xy(pt),
                proper,
            },
            Intersection::Collinear(a, b) => IntersectionDoc::Collinear {
                points: [to_xy(a), to_xy(b)],
            },
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Read points from `.csv`, `.parquet` or `.json`.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match extension(path).as_str() {
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let xy: Vec<Xy> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {} as [[x, y], ..]", path.display()))?;
            Ok(xy.into_iter().map(from_xy).collect())
        }
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading points from {}", path.display()))
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading points from {}", path.display()))
        }
        other => bail!("unsupported point file extension {other:?} (csv, parquet, json)"),
    }
}

fn points_from_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("null coordinate in row {row}"),
        })
        .collect()
}

/// Write points as `.csv`, `.parquet` or `.json`.
pub fn write_points(path: &Path, pts: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let ext = extension(path);
    if ext == "json" {
        let xy: Vec<Xy> = pts.iter().copied().map(to_xy).collect();
        fs::write(path, serde_json::to_vec(&xy)?)
            .with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }
    ensure!(
        ext == "csv" || ext == "parquet",
        "unsupported point file extension {ext:?} (csv, parquet, json)"
    );
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == "csv" {
        CsvWriter::new(&mut file).finish(&mut df)?;
    } else {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    }
    Ok(())
}

/// Write any serializable document as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
