//! Random planar point clouds (replay tokens + layouts).
//!
//! Purpose
//! - Feed the timing driver, the benches and the randomized tests with
//!   reproducible inputs.
//! - `CloudCfg::default()` matches the classic benchmark input: integer
//!   coordinates in ±1 000 000 with pairwise distinct x.
//!
//! Model
//! - Every draw is keyed by a replay token `(seed, index)` mixed into a single
//!   `StdRng`, so any sample can be regenerated from its token alone.

use std::collections::HashSet;
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Where the points are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Uniform in the axis-aligned square `[-h, h]²`.
    Square,
    /// Uniform in the disk of radius `h`.
    Disk,
    /// On the circle of radius `h` (every point is a hull vertex before rounding).
    Circle,
}

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub layout: Layout,
    pub half_extent: f64,
    /// Round coordinates to integers.
    pub integer: bool,
    /// Redraw a point whose x was already used.
    pub distinct_x: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            layout: Layout::Square,
            half_extent: 1_000_000.0,
            integer: true,
            distinct_x: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

    /// Token for the next sample of the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

fn sample<R: Rng>(rng: &mut R, layout: Layout, h: f64) -> Point {
    match layout {
        Layout::Square => Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)),
        Layout::Disk => {
            let r = h * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * TAU;
            Point::new(r * th.cos(), r * th.sin())
        }
        Layout::Circle => {
            let th = rng.gen::<f64>() * TAU;
            Point::new(h * th.cos(), h * th.sin())
        }
    }
}

/// Draw `cfg.count` points.
///
/// Returns `None` when the configuration cannot be met: non-positive or
/// non-finite extent, or more distinct integer x values requested than the
/// extent holds (or than a bounded number of redraws finds).
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    let h = cfg.half_extent;
    if !h.is_finite() || h <= 0.0 {
        return None;
    }
    if cfg.integer && cfg.distinct_x && (cfg.count as f64) > 2.0 * h.floor() + 1.0 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let mut used_x: HashSet<u64> = HashSet::with_capacity(cfg.count);
    let mut out = Vec::with_capacity(cfg.count);
    let max_attempts = cfg.count.saturating_mul(64).max(1024);
    let mut attempts = 0usize;
    while out.len() < cfg.count {
        attempts += 1;
        if attempts > max_attempts {
            return None;
        }
        let mut p = sample(&mut rng, cfg.layout, h);
        if cfg.integer {
            p = p.map(f64::round);
        }
        // +0.0 and -0.0 must collide.
        if cfg.distinct_x && !used_x.insert((p.x + 0.0).to_bits()) {
            continue;
        }
        out.push(p);
    }
    Some(out)
}
