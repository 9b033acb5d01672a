//! Orderings on point sets: lexicographic (divide step) and angular (polygons).

use std::cmp::Ordering;
use std::f64::consts::TAU;

use super::types::Point;

/// Total lexicographic order on `(x, y)`.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

#[inline]
pub fn sort_lex(points: &mut [Point]) {
    points.sort_by(lex_cmp);
}

/// Arithmetic mean of the coordinates; `None` for an empty set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Angle of `p - c` in `[0, 2π)`.
#[inline]
pub(crate) fn angle_about(c: Point, p: Point) -> f64 {
    let theta = (p.y - c.y).atan2(p.x - c.x);
    (theta + TAU) % TAU
}

/// Sort in place by ascending angle around the centroid.
///
/// Convention: with y growing downward (screen frame) this is a clockwise
/// traversal; in the y-up frame the same order is counter-clockwise and every
/// convex turn has positive `signed_area`. Empty input is left alone.
pub fn clockwise_sort(points: &mut [Point]) {
    let Some(c) = centroid(points) else {
        return;
    };
    points.sort_by(|a, b| angle_about(c, *a).total_cmp(&angle_about(c, *b)));
}
