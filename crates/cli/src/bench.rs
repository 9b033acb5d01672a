//! Timing comparison of the two hull algorithms on random clouds.
//!
//! One row per size: the cloud is drawn from `(seed, index = row)`, the
//! divide-and-conquer hull is always timed, gift wrapping only up to
//! `skip_gift_above` points. When both run, their vertex sets are compared.

use anyhow::{anyhow, Context, Result};
use hull2d::api::{
    draw_points, same_vertex_set, Algo, Cloud2Cfg, Cloud2Replay, HullCfg, Layout, Point,
};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct BenchCfg {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub layout: Layout,
    pub skip_gift_above: usize,
    pub hull: HullCfg,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    pub n: usize,
    pub hull_len: usize,
    pub dc_ms: f64,
    pub gift_ms: Option<f64>,
    pub agree: Option<bool>,
}

fn timed(algo: Algo, pts: &[Point], cfg: &HullCfg) -> Result<(Vec<Point>, f64)> {
    let started = Instant::now();
    let hull = algo
        .run(pts, cfg)
        .with_context(|| format!("{} hull", algo.name()))?;
    Ok((hull, started.elapsed().as_secs_f64() * 1e3))
}

fn cloud_cfg(layout: Layout, count: usize) -> Cloud2Cfg {
    match layout {
        Layout::Square => Cloud2Cfg {
            count,
            ..Cloud2Cfg::default()
        },
        Layout::Disk | Layout::Circle => Cloud2Cfg {
            count,
            layout,
            half_extent: 1.0,
            integer: false,
            distinct_x: false,
        },
    }
}

pub fn run_rows(cfg: &BenchCfg) -> Result<Vec<BenchRow>> {
    let mut rows = Vec::with_capacity(cfg.sizes.len());
    for (index, &n) in cfg.sizes.iter().enumerate() {
        let tok = Cloud2Replay {
            seed: cfg.seed,
            index: index as u64,
        };
        let pts = draw_points(cloud_cfg(cfg.layout, n), tok)
            .ok_or_else(|| anyhow!("cannot draw {n} points for layout {:?}", cfg.layout))?;
        let (dc, dc_ms) = timed(Algo::DivideConquer, &pts, &cfg.hull)?;
        let (gift_ms, agree) = if n <= cfg.skip_gift_above {
            let (gw, ms) = timed(Algo::GiftWrap, &pts, &cfg.hull)?;
            (Some(ms), Some(same_vertex_set(&dc, &gw)))
        } else {
            (None, None)
        };
        tracing::info!(n, hull_len = dc.len(), dc_ms, gift_ms, agree, "bench_row");
        if agree == Some(false) {
            tracing::warn!(n, seed = cfg.seed, index, "hulls disagree");
        }
        rows.push(BenchRow {
            n,
            hull_len: dc.len(),
            dc_ms,
            gift_ms,
            agree,
        });
    }
    Ok(rows)
}

pub fn rows_to_frame(rows: &[BenchRow]) -> Result<DataFrame> {
    let df = df!(
        "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
        "hull_len" => rows.iter().map(|r| r.hull_len as u64).collect::<Vec<_>>(),
        "dc_ms" => rows.iter().map(|r| r.dc_ms).collect::<Vec<_>>(),
        "gift_ms" => rows.iter().map(|r| r.gift_ms).collect::<Vec<_>>(),
        "agree" => rows.iter().map(|r| r.agree).collect::<Vec<_>>()
    )?;
    Ok(df)
}

pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    crate::points::ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
