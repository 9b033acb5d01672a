use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::api::{contains, is_convex, same_vertex_set, Algo, HullCfg, Layout, Point, Tolerance};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull driver: hull a CSV, time both algorithms, print provenance")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Absolute orientation tolerance (default scales with the coordinates)
    #[arg(long, global = true)]
    tol_abs: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull the points of a CSV (columns x,y) and write them as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// dc | gift
        #[arg(long, default_value = "dc")]
        algo: Algo,
        #[arg(long)]
        out: PathBuf,
        /// Also run the other algorithm and the containment/convexity checks
        #[arg(long)]
        check: bool,
    },
    /// Time both algorithms on random clouds and write a CSV
    Bench {
        #[arg(long, value_delimiter = ',', default_value = "10,100,1000,10000,100000")]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = LayoutArg::Square)]
        layout: LayoutArg,
        /// Skip the O(n·h) oracle above this many points
        #[arg(long, default_value_t = 100_000)]
        skip_gift_above: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Square,
    Disk,
    Circle,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Square => Layout::Square,
            LayoutArg::Disk => Layout::Disk,
            LayoutArg::Circle => Layout::Circle,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let hull_cfg = hull_cfg(cmd.tol_abs)?;
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Hull {
            input,
            algo,
            out,
            check,
        } => hull(&input, algo, &out, check, &hull_cfg, tag),
        Action::Bench {
            sizes,
            seed,
            layout,
            skip_gift_above,
            out,
        } => {
            let cfg = bench::BenchCfg {
                sizes,
                seed,
                layout: layout.into(),
                skip_gift_above,
                hull: hull_cfg,
            };
            run_bench(&cfg, &out, tag)
        }
        Action::Report => report(tag),
    }
}

fn hull_cfg(tol_abs: Option<f64>) -> Result<HullCfg> {
    match tol_abs {
        None => Ok(HullCfg::default()),
        Some(e) if e.is_finite() && e >= 0.0 => {
            Ok(HullCfg::with_tolerance(Tolerance::Absolute(e)))
        }
        Some(e) => bail!("--tol-abs must be finite and non-negative, got {e}"),
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
struct CheckReport {
    contains_input: bool,
    convex: bool,
    oracle_agrees: bool,
}

impl CheckReport {
    fn ok(&self) -> bool {
        self.contains_input && self.convex && self.oracle_agrees
    }
}

#[derive(Debug, Serialize)]
struct HullDoc {
    algo: &'static str,
    input_points: usize,
    elapsed_ms: f64,
    vertices: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check: Option<CheckReport>,
}

fn check_hull(points: &[Point], hull: &[Point], algo: Algo, cfg: &HullCfg) -> Result<CheckReport> {
    let oracle_algo = match algo {
        Algo::DivideConquer => Algo::GiftWrap,
        Algo::GiftWrap => Algo::DivideConquer,
    };
    let oracle = oracle_algo
        .run(points, cfg)
        .with_context(|| format!("{} oracle", oracle_algo.name()))?;
    Ok(CheckReport {
        contains_input: points.iter().all(|p| contains(hull, *p, cfg.tolerance)),
        convex: is_convex(hull, cfg.tolerance),
        oracle_agrees: same_vertex_set(hull, &oracle),
    })
}

fn hull(
    input: &Path,
    algo: Algo,
    out: &Path,
    check: bool,
    cfg: &HullCfg,
    tag: Option<&str>,
) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(input = %input.display(), n = pts.len(), algo = algo.name(), tag, "hull");
    let started = Instant::now();
    let hull = algo
        .run(&pts, cfg)
        .with_context(|| format!("hulling {}", input.display()))?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
    let report = if check {
        Some(check_hull(&pts, &hull, algo, cfg)?)
    } else {
        None
    };
    tracing::info!(vertices = hull.len(), elapsed_ms, "hull_done");

    let doc = HullDoc {
        algo: algo.name(),
        input_points: pts.len(),
        elapsed_ms,
        vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
        check: report,
    };
    points::write_json(out, &doc)?;
    let payload = provenance::Payload::new(json!({
        "cmd": "hull",
        "algo": algo.name(),
        "input": input.to_string_lossy(),
        "tolerance": format!("{:?}", cfg.tolerance),
        "check": check
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;

    if let Some(r) = report {
        if !r.ok() {
            bail!("hull of {} failed its checks: {r:?}", input.display());
        }
    }
    Ok(())
}

fn run_bench(cfg: &bench::BenchCfg, out: &Path, tag: Option<&str>) -> Result<()> {
    tracing::info!(sizes = ?cfg.sizes, seed = cfg.seed, layout = ?cfg.layout, tag, "bench");
    let rows = bench::run_rows(cfg)?;
    let mut df = bench::rows_to_frame(&rows)?;
    bench::write_csv(out, &mut df)?;
    let payload = provenance::Payload::new(json!({
        "cmd": "bench",
        "sizes": cfg.sizes,
        "seed": cfg.seed,
        "layout": format!("{:?}", cfg.layout),
        "skip_gift_above": cfg.skip_gift_above,
        "tolerance": format!("{:?}", cfg.hull.tolerance)
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    if rows.iter().any(|r| r.agree == Some(false)) {
        bail!("divide-and-conquer and gift wrapping disagreed; see {}", out.display());
    }
    Ok(())
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull2d_version": hull2d::VERSION,
        "tags": tag.into_iter().collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
