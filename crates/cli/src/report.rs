use anyhow::{Context, Result};
use rathull::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Parameters of a `random` run, echoed into the report.
#[derive(Clone, Debug, Serialize)]
pub struct RandomParams {
    pub count: usize,
    pub bound: i64,
    pub max_den: i64,
    pub seed: u64,
    pub index: u64,
}

/// One hull vertex: exact coordinates as `n/d` plus a float approximation.
#[derive(Clone, Debug, Serialize)]
pub struct Vertex {
    pub x: String,
    pub y: String,
    pub approx: [f64; 2],
}

impl From<&Point2> for Vertex {
    fn from(p: &Point2) -> Self {
        let v = p.to_vector();
        Self {
            x: p.x.to_string(),
            y: p.y.to_string(),
            approx: [v.x, v.y],
        }
    }
}

/// JSON document produced by `cli random`.
#[derive(Clone, Debug, Serialize)]
pub struct HullReport {
    pub code_rev: &'static str,
    pub lib_version: &'static str,
    pub params: RandomParams,
    pub input_len: usize,
    pub hull: Vec<Vertex>,
    pub convex: bool,
}

impl HullReport {
    pub fn new(params: RandomParams, input: &[Point2], hull: &[Point2]) -> Self {
        Self {
            code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
            lib_version: rathull::VERSION,
            params,
            input_len: input.len(),
            hull: hull.iter().map(Vertex::from).collect(),
            convex: is_strictly_convex(hull, &ExactKernel),
        }
    }
}

/// Write `report` as pretty JSON to `out`, creating parent directories.
pub fn write_report<P: AsRef<Path>>(out: P, report: &HullReport) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
