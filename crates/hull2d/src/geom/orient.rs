//! Orientation predicates (named in the y-up frame).
//!
//! A triple with negative signed area turns clockwise, positive turns
//! counter-clockwise. The angular order from `sort::clockwise_sort` is clockwise
//! on screen (y down) and therefore has positive signed area here.

use super::types::{Point, Tolerance};

/// Outcome of the orientation test for an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Signed area of triangle `(a, b, c)`: shoelace sum divided by two.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.x * ac.y - ab.y * ac.x) / 2.0
}

/// Classify `(a, b, c)`; |area| within the tolerance counts as collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point, tol: Tolerance) -> Orientation {
    let area = signed_area(a, b, c);
    let eps = tol.area_eps(a, b, c);
    if area < -eps {
        Orientation::Clockwise
    } else if area > eps {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

#[inline]
pub fn is_clockwise(a: Point, b: Point, c: Point, tol: Tolerance) -> bool {
    orientation(a, b, c, tol) == Orientation::Clockwise
}

#[inline]
pub fn is_counter_clockwise(a: Point, b: Point, c: Point, tol: Tolerance) -> bool {
    orientation(a, b, c, tol) == Orientation::CounterClockwise
}

#[inline]
pub fn are_collinear(a: Point, b: Point, c: Point, tol: Tolerance) -> bool {
    orientation(a, b, c, tol) == Orientation::Collinear
}
