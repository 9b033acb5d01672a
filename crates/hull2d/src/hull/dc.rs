//! Divide-and-conquer hull.
//!
//! The input is copied once, sorted lexicographically and deduplicated; the
//! recursion then works on sub-slices of that single vector. Each level
//! returns its hull already in clockwise order, so the tangent finder and the
//! merge reuse it instead of sorting again.
//!
//! Merge of `left` (A) and `right` (B), indices into clockwise order:
//! `A[upper ..= lower]` followed by `B[lower ..= upper]`, both walked forward
//! with wrap-around.

use crate::geom::{
    are_collinear, clockwise_sort, is_counter_clockwise, lex_cmp, sort_lex, HullCfg, Point,
    Tolerance,
};

use super::error::{validate_finite, HullError};
use super::scale::hull_in_safe_range;
use super::tangent::{leftmost, lower_tangent, rightmost, upper_tangent};

/// Convex hull in clockwise order (default tolerance).
///
/// 0 or 1 point is returned unchanged; otherwise duplicates are dropped and
/// collinear input collapses to its two extreme points. Inputs of extreme
/// magnitude are hulled in a power-of-two rescaled copy.
pub fn compute_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    compute_hull_with(points, &HullCfg::default())
}

/// Convex hull in clockwise order with an explicit configuration.
pub fn compute_hull_with(points: &[Point], cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
    validate_finite(points)?;
    if points.len() <= 1 {
        return Ok(points.to_vec());
    }
    hull_in_safe_range(points, |pts| {
        let mut work = pts.to_vec();
        sort_lex(&mut work);
        work.dedup();
        build_sorted(&work, cfg.tolerance)
    })
}

/// Hull of a lexicographically sorted, duplicate-free slice.
///
/// Base case: up to three points are their own hull (collinear triples keep
/// only the extremes). Larger slices split at `len / 2`.
///
/// # Panics
/// In debug builds, when `sorted` is not strictly increasing.
pub fn build_hull(sorted: &[Point], tol: Tolerance) -> Result<Vec<Point>, HullError> {
    debug_assert!(
        sorted.windows(2).all(|w| lex_cmp(&w[0], &w[1]).is_lt()),
        "build_hull needs lexicographically sorted points without duplicates"
    );
    build_sorted(sorted, tol)
}

fn build_sorted(sorted: &[Point], tol: Tolerance) -> Result<Vec<Point>, HullError> {
    if sorted.len() <= 3 {
        return Ok(normalize(sorted.to_vec(), tol));
    }
    let mid = sorted.len() / 2;
    let left = build_sorted(&sorted[..mid], tol)?;
    let right = build_sorted(&sorted[mid..], tol)?;
    merge(&left, &right, tol)
}

fn merge(left: &[Point], right: &[Point], tol: Tolerance) -> Result<Vec<Point>, HullError> {
    if left.len() <= 2 && right.len() <= 2 {
        // Two segments (possibly on one line): every candidate line may settle
        // at once, so hull the four points directly.
        let mut both = left.to_vec();
        both.extend_from_slice(right);
        return Ok(normalize(both, tol));
    }
    let (i_la, i_lb) = lower_tangent(left, right, tol)?;
    let (i_ua, i_ub) = upper_tangent(left, right, tol)?;
    tracing::trace!(
        left = left.len(),
        right = right.len(),
        i_la,
        i_lb,
        i_ua,
        i_ub,
        "merge"
    );
    let mut merged = Vec::with_capacity(left.len() + right.len());
    push_arc(&mut merged, left, i_ua, i_la);
    push_arc(&mut merged, right, i_lb, i_ub);
    Ok(normalize(merged, tol))
}

/// Append `poly[from ..= to]`, stepping forward and wrapping past the end.
fn push_arc(out: &mut Vec<Point>, poly: &[Point], from: usize, to: usize) {
    let n = poly.len();
    let mut i = from;
    loop {
        out.push(poly[i]);
        if i == to {
            break;
        }
        i = (i + 1) % n;
    }
}

/// Clockwise order with boundary points that do not turn removed.
///
/// Two points come back in lexicographic order; a collinear set collapses to
/// its extremes.
pub(crate) fn normalize(mut pts: Vec<Point>, tol: Tolerance) -> Vec<Point> {
    if pts.len() <= 2 {
        sort_lex(&mut pts);
        return pts;
    }
    let lo = pts[leftmost(&pts)];
    let hi = pts[rightmost(&pts)];
    if pts.iter().all(|p| are_collinear(lo, hi, *p, tol)) {
        return vec![lo, hi];
    }
    clockwise_sort(&mut pts);
    let n = pts.len();
    let kept: Vec<Point> = (0..n)
        .filter(|&i| is_counter_clockwise(pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n], tol))
        .map(|i| pts[i])
        .collect();
    if kept.len() < 3 {
        // Thin enough that every turn sits inside the tolerance.
        return vec![lo, hi];
    }
    kept
}
