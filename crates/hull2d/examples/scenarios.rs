//! Print the hulls of a few small hand-made point sets.
//!
//! Usage:
//!   cargo run -p hull2d --example scenarios

use hull2d::prelude::*;

fn show(name: &str, pts: &[Point]) {
    match (compute_hull(pts), gift_wrap(pts)) {
        (Ok(dc), Ok(gw)) => {
            println!("{name}: n={} dc={} gift={}", pts.len(), dc.len(), gw.len());
            for v in &dc {
                println!("  ({}, {})", v.x, v.y);
            }
        }
        (Err(e), _) | (_, Err(e)) => println!("{name}: error: {e}"),
    }
}

fn main() {
    show(
        "square+center",
        &[
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![2.0, 2.0],
        ],
    );
    show(
        "collinear",
        &[vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]],
    );
    let hexagon: Vec<Point> = (0..6)
        .map(|k| {
            let th = k as f64 * std::f64::consts::FRAC_PI_3;
            vector![th.cos(), th.sin()]
        })
        .chain(std::iter::once(vector![0.0, 0.0]))
        .collect();
    show("hexagon+center", &hexagon);
    show("nan", &[vector![0.0, 0.0], vector![f64::NAN, 1.0]]);
}
