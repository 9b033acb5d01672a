//! Common lower/upper tangent of two x-separated convex polygons.
//!
//! Inputs are polygons already in clockwise (angular) order, `left` entirely
//! to the left of `right` along x (equal x allowed only on the separating
//! line, with `left` below `right` there). The walk starts at the rightmost
//! vertex of `left` and the leftmost vertex of `right`, and moves each end
//! until both of its neighbours lie on the correct side of the candidate line.
//!
//! Walk directions (indices into the clockwise order):
//! - lower tangent: `left` steps backward, `right` steps forward;
//! - upper tangent: `left` steps forward, `right` steps backward.
//!
//! In exact arithmetic each end moves monotonically, so the walk finishes in at
//! most `|left| + |right|` steps. The loop is bounded anyway; running out of
//! steps is logged and the current pair returned.

use crate::geom::{fit_line, lex_cmp, Point, Side, Tolerance};

use super::error::HullError;

/// Indices `(i_left, i_right)` of the lower tangent (both polygons on or above).
pub fn lower_tangent(
    left: &[Point],
    right: &[Point],
    tol: Tolerance,
) -> Result<(usize, usize), HullError> {
    walk(left, right, Side::Above, tol)
}

/// Indices `(i_left, i_right)` of the upper tangent (both polygons on or below).
pub fn upper_tangent(
    left: &[Point],
    right: &[Point],
    tol: Tolerance,
) -> Result<(usize, usize), HullError> {
    walk(left, right, Side::Below, tol)
}

#[inline]
fn pred(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[inline]
fn succ(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Position of the lexicographically largest vertex.
pub(crate) fn rightmost(poly: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in poly.iter().enumerate().skip(1) {
        if lex_cmp(p, &poly[best]).is_gt() {
            best = i;
        }
    }
    best
}

/// Position of the lexicographically smallest vertex.
pub(crate) fn leftmost(poly: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in poly.iter().enumerate().skip(1) {
        if lex_cmp(p, &poly[best]).is_lt() {
            best = i;
        }
    }
    best
}

/// Both clockwise neighbours of `poly[i]` lie on `side` of the line `a → b`.
fn settled(poly: &[Point], i: usize, a: Point, b: Point, side: Side, tol: Tolerance) -> bool {
    let n = poly.len();
    let line = fit_line(a, b);
    let before = poly[pred(i, n)];
    let after = poly[succ(i, n)];
    line.admits(a, b, before, side, tol) && line.admits(a, b, after, side, tol)
}

fn walk(
    left: &[Point],
    right: &[Point],
    side: Side,
    tol: Tolerance,
) -> Result<(usize, usize), HullError> {
    if left.is_empty() || right.is_empty() {
        return Err(HullError::EmptyPolygon);
    }
    let (na, nb) = (left.len(), right.len());
    let mut ia = rightmost(left);
    let mut ib = leftmost(right);
    let budget = 2 * (na + nb) + 2;
    let mut steps = 0usize;

    let step_left = |i: usize| match side {
        Side::Above => pred(i, na),
        Side::Below => succ(i, na),
    };
    let step_right = |i: usize| match side {
        Side::Above => succ(i, nb),
        Side::Below => pred(i, nb),
    };

    while !(settled(left, ia, left[ia], right[ib], side, tol)
        && settled(right, ib, left[ia], right[ib], side, tol))
    {
        while !settled(left, ia, left[ia], right[ib], side, tol) {
            ia = step_left(ia);
            steps += 1;
            if steps > budget {
                return Ok(exhausted(ia, ib, side, na, nb));
            }
        }
        while !settled(right, ib, left[ia], right[ib], side, tol) {
            ib = step_right(ib);
            steps += 1;
            if steps > budget {
                return Ok(exhausted(ia, ib, side, na, nb));
            }
        }
    }
    Ok((ia, ib))
}

fn exhausted(ia: usize, ib: usize, side: Side, na: usize, nb: usize) -> (usize, usize) {
    tracing::warn!(
        ?side,
        left_len = na,
        right_len = nb,
        ia,
        ib,
        "tangent walk hit its step bound; returning current pair"
    );
    (ia, ib)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{clockwise_sort, signed_area};
    use nalgebra::vector;

    fn cw(mut pts: Vec<Point>) -> Vec<Point> {
        clockwise_sort(&mut pts);
        pts
    }

    #[test]
    fn squares_side_by_side() {
        let left = cw(vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ]);
        let right = cw(vec![
            vector![4.0, -1.0],
            vector![6.0, -1.0],
            vector![6.0, 3.0],
            vector![4.0, 3.0],
        ]);
        let tol = Tolerance::default();
        let (la, lb) = lower_tangent(&left, &right, tol).unwrap();
        let (ua, ub) = upper_tangent(&left, &right, tol).unwrap();
        // The right square is taller, so both tangents touch its near corners.
        assert_eq!(left[la], vector![0.0, 0.0]);
        assert_eq!(right[lb], vector![4.0, -1.0]);
        assert_eq!(left[ua], vector![0.0, 2.0]);
        assert_eq!(right[ub], vector![4.0, 3.0]);
    }

    #[test]
    fn tangent_keeps_everything_on_one_side() {
        let left = cw(vec![
            vector![0.0, 0.0],
            vector![1.0, -2.0],
            vector![3.0, 1.0],
            vector![1.0, 3.0],
        ]);
        let right = cw(vec![
            vector![5.0, 4.0],
            vector![6.0, -3.0],
            vector![8.0, 0.0],
        ]);
        let tol = Tolerance::default();
        let (la, lb) = lower_tangent(&left, &right, tol).unwrap();
        let (ua, ub) = upper_tangent(&left, &right, tol).unwrap();
        for p in left.iter().chain(right.iter()) {
            assert!(signed_area(left[la], right[lb], *p) >= -1e-12);
            assert!(signed_area(left[ua], right[ub], *p) <= 1e-12);
        }
    }

    #[test]
    fn single_points_and_segments() {
        let tol = Tolerance::default();
        let left = vec![vector![0.0, 0.0]];
        let right = vec![vector![1.0, 1.0]];
        assert_eq!(lower_tangent(&left, &right, tol).unwrap(), (0, 0));
        assert_eq!(upper_tangent(&left, &right, tol).unwrap(), (0, 0));

        let left = cw(vec![vector![0.0, 0.0], vector![1.0, 2.0]]);
        let right = cw(vec![vector![3.0, 0.0], vector![4.0, 2.0]]);
        let (la, lb) = lower_tangent(&left, &right, tol).unwrap();
        let (ua, ub) = upper_tangent(&left, &right, tol).unwrap();
        assert_eq!(left[la], vector![0.0, 0.0]);
        assert_eq!(right[lb], vector![3.0, 0.0]);
        assert_eq!(left[ua], vector![1.0, 2.0]);
        assert_eq!(right[ub], vector![4.0, 2.0]);
    }

    #[test]
    fn shared_x_on_the_split_is_not_a_fault() {
        // Rightmost of `left` and leftmost of `right` are stacked vertically.
        let left = cw(vec![vector![0.0, 0.0], vector![1.0, 0.0]]);
        let right = cw(vec![vector![1.0, 5.0], vector![2.0, 0.0]]);
        let tol = Tolerance::default();
        let (la, lb) = lower_tangent(&left, &right, tol).unwrap();
        let (ua, ub) = upper_tangent(&left, &right, tol).unwrap();
        assert_eq!(right[lb], vector![2.0, 0.0]);
        assert_eq!(left[ua], vector![0.0, 0.0]);
        assert_eq!(right[ub], vector![1.0, 5.0]);
        assert_eq!(left[la].y, 0.0);
    }

    #[test]
    fn empty_polygon_is_rejected() {
        let tol = Tolerance::default();
        let one = vec![vector![0.0, 0.0]];
        assert_eq!(lower_tangent(&[], &one, tol), Err(HullError::EmptyPolygon));
        assert_eq!(upper_tangent(&one, &[], tol), Err(HullError::EmptyPolygon));
    }
}
