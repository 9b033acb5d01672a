//! Power-of-two rescaling for extreme coordinate magnitudes.
//!
//! Orientation and line tests multiply coordinates, so inputs whose largest
//! |coordinate| sits far from one underflow to zero or overflow to infinity.
//! Such inputs are hulled in a copy scaled by `2^k` (largest |coordinate| in
//! `[1, 2)`), and the hull is mapped back to the original input points.
//! Scaling by a power of two is exact unless a coordinate drops below the
//! subnormal range, and it never changes lexicographic order or turn signs.

use std::collections::HashMap;

use crate::geom::Point;

use super::error::HullError;

/// Magnitudes in `[2^-SAFE_EXP, 2^SAFE_EXP]` are hulled as given.
const SAFE_EXP: i32 = 400;

/// Exponent `k` such that scaling by `2^k` brings the largest |coordinate|
/// into `[1, 2)`, or `None` when no rescaling is needed (or possible).
pub(crate) fn rescale_exponent(points: &[Point]) -> Option<i32> {
    let m = points.iter().map(|p| p.amax()).fold(0.0_f64, f64::max);
    if m == 0.0 || !m.is_finite() {
        return None;
    }
    let e = m.log2().floor() as i32;
    if (-SAFE_EXP..=SAFE_EXP).contains(&e) {
        None
    } else {
        Some(-e)
    }
}

/// `p · 2^k`, split in two factors so that neither overflows.
#[inline]
pub(crate) fn scale_pow2(p: Point, k: i32) -> Point {
    let half = k / 2;
    p * 2f64.powi(half) * 2f64.powi(k - half)
}

/// Run `hull` on a well-scaled copy of `points` when their magnitude is
/// extreme; returned vertices are always the caller's own input points.
pub(crate) fn hull_in_safe_range<F>(points: &[Point], hull: F) -> Result<Vec<Point>, HullError>
where
    F: FnOnce(&[Point]) -> Result<Vec<Point>, HullError>,
{
    let Some(k) = rescale_exponent(points) else {
        return hull(points);
    };
    let scaled: Vec<Point> = points.iter().map(|p| scale_pow2(*p, k)).collect();
    let mut origin: HashMap<(u64, u64), usize> = HashMap::with_capacity(scaled.len());
    for (i, q) in scaled.iter().enumerate() {
        origin.entry((q.x.to_bits(), q.y.to_bits())).or_insert(i);
    }
    tracing::debug!(k, n = points.len(), "rescaled input by a power of two");
    let out = hull(&scaled)?;
    Ok(out
        .iter()
        .filter_map(|q| origin.get(&(q.x.to_bits(), q.y.to_bits())))
        .map(|&i| points[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn moderate_magnitudes_are_left_alone() {
        assert_eq!(rescale_exponent(&[vector![1e6, -3.0], vector![0.5, 2.0]]), None);
        assert_eq!(rescale_exponent(&[vector![0.0, 0.0]]), None);
        assert_eq!(rescale_exponent(&[]), None);
    }

    #[test]
    fn extreme_magnitudes_land_in_unit_range() {
        for m in [1e-170, 3e-300, 5e-320, 1e160, 1.7e308] {
            let pts = [vector![m, -m / 3.0], vector![0.0, m / 2.0]];
            let k = rescale_exponent(&pts).unwrap();
            let top = pts
                .iter()
                .map(|p| scale_pow2(*p, k).amax())
                .fold(0.0, f64::max);
            assert!((1.0..2.0).contains(&top), "m = {m:e}, top = {top}");
        }
    }

    #[test]
    fn scaling_is_exact_and_reversible() {
        let p = vector![3.0 * 2f64.powi(-560), -7.0 * 2f64.powi(-570)];
        let k = 555;
        let q = scale_pow2(p, k);
        assert_eq!(q, vector![3.0 * 2f64.powi(-5), -7.0 * 2f64.powi(-15)]);
        assert_eq!(scale_pow2(q, -k), p);
    }

    #[test]
    fn results_map_back_to_input_points() {
        let pts = [vector![1e200, 0.0], vector![0.0, 1e200], vector![-1e200, -1e200]];
        let out = hull_in_safe_range(&pts, |scaled| {
            assert!(scaled.iter().all(|p| p.amax() < 2.0));
            Ok(scaled.to_vec())
        })
        .unwrap();
        assert_eq!(out, pts.to_vec());
    }
}
