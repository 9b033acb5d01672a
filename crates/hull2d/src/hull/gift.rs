//! Gift wrapping (Jarvis march), O(n·h).
//!
//! Independent of the divide-and-conquer path: it only uses the orientation
//! primitive. Kept as an oracle for tests and as the slow baseline in the
//! timing driver.

use crate::geom::{orientation, sort_lex, HullCfg, Orientation, Point, Tolerance};

use super::error::{validate_finite, HullError};
use super::scale::hull_in_safe_range;

/// Gift-wrapped hull (default tolerance).
pub fn gift_wrap(points: &[Point]) -> Result<Vec<Point>, HullError> {
    gift_wrap_with(points, &HullCfg::default())
}

/// Gift-wrapped hull, starting at the lexicographically smallest point and
/// turning the same way as `compute_hull` output (positive signed area).
///
/// Fewer than three points are returned unchanged.
pub fn gift_wrap_with(points: &[Point], cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
    validate_finite(points)?;
    if points.len() < 3 {
        return Ok(points.to_vec());
    }
    hull_in_safe_range(points, |pts| Ok(march(pts, cfg.tolerance)))
}

fn march(points: &[Point], tol: Tolerance) -> Vec<Point> {
    let mut pts = points.to_vec();
    sort_lex(&mut pts);
    pts.dedup();
    let n = pts.len();
    if n < 3 {
        return pts;
    }

    let start = 0usize;
    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(pts[p]);
        let mut q = (p + 1) % n;
        for r in 0..n {
            if r == p || r == q {
                continue;
            }
            // Keep q such that nothing lies clockwise of p → q; on a
            // collinear tie prefer the farther point.
            match orientation(pts[p], pts[q], pts[r], tol) {
                Orientation::Clockwise => q = r,
                Orientation::Collinear
                    if (pts[r] - pts[p]).norm_squared() > (pts[q] - pts[p]).norm_squared() =>
                {
                    q = r
                }
                _ => {}
            }
        }
        p = q;
        if p == start {
            break;
        }
        if hull.len() > n {
            tracing::warn!(n, "gift wrap did not close; returning partial boundary");
            break;
        }
    }
    hull
}
