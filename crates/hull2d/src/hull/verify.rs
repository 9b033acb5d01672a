//! Property checks for hull outputs.
//!
//! Used by the test suite, the benches and the CLI `--check` flag. Hulls are
//! expected in the positive-area (clockwise-sorted) direction produced by both
//! algorithms.

use crate::geom::{lex_cmp, signed_area, sort_lex, Point, Tolerance};

/// Is `p` inside or on the boundary of `hull`?
pub fn contains(hull: &[Point], p: Point, tol: Tolerance) -> bool {
    match hull.len() {
        0 => false,
        1 => (hull[0] - p).amax() <= tol.offset_eps(hull[0].amax().max(p.amax())),
        2 => on_segment(hull[0], hull[1], p, tol),
        n => (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            signed_area(a, b, p) >= -tol.area_eps(a, b, p)
        }),
    }
}

fn on_segment(a: Point, b: Point, p: Point, tol: Tolerance) -> bool {
    if signed_area(a, b, p).abs() > tol.area_eps(a, b, p) {
        return false;
    }
    let slack = tol.offset_eps(a.amax().max(b.amax()).max(p.amax()));
    let (lo_x, hi_x) = (a.x.min(b.x) - slack, a.x.max(b.x) + slack);
    let (lo_y, hi_y) = (a.y.min(b.y) - slack, a.y.max(b.y) + slack);
    (lo_x..=hi_x).contains(&p.x) && (lo_y..=hi_y).contains(&p.y)
}

/// No cyclic triple turns clockwise beyond the tolerance.
pub fn is_convex(hull: &[Point], tol: Tolerance) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let (a, b, c) = (hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        signed_area(a, b, c) >= -tol.area_eps(a, b, c)
    })
}

fn canonical_set(points: &[Point]) -> Vec<Point> {
    let mut v = points.to_vec();
    sort_lex(&mut v);
    v.dedup();
    v
}

/// Same vertices, ignoring order and repetitions.
pub fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    canonical_set(a) == canonical_set(b)
}

/// Same cyclic sequence up to the starting vertex and direction.
pub fn same_polygon(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    let Some(shift) = b.iter().position(|q| lex_cmp(q, &a[0]).is_eq()) else {
        return false;
    };
    let forward = (0..n).all(|i| a[i] == b[(shift + i) % n]);
    let backward = (0..n).all(|i| a[i] == b[(shift + n - i) % n]);
    forward || backward
}
