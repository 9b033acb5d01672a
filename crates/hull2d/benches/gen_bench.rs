//! Criterion microbenches for the point cloud generator.
//!
//! - Square layout with distinct x (the hull benchmark input), 1k and 10k.
//! - Disk and circle layouts with float coordinates.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::rand2::{draw_points, CloudCfg, Layout, ReplayToken};

fn bench_gen_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen2d_square");
    for count in [1_000usize, 10_000] {
        let cfg = CloudCfg {
            count,
            ..CloudCfg::default()
        };
        group.bench_function(BenchmarkId::new("distinct_x", count), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = draw_points(cfg, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_gen_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen2d_round");
    for layout in [Layout::Disk, Layout::Circle] {
        let cfg = CloudCfg {
            count: 5_000,
            layout,
            half_extent: 1.0,
            integer: false,
            distinct_x: false,
        };
        group.bench_function(BenchmarkId::new(format!("{layout:?}"), 5_000), |b| {
            b.iter(|| draw_points(cfg, ReplayToken { seed: 7, index: 1 }))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gen_square, bench_gen_round);
criterion_main!(benches);
