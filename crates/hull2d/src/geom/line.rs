//! Candidate lines for the tangent walk.
//!
//! `fit_line` expresses the infinite line through two points as
//! `y = slope·x + intercept`. The intercept is the intersection with the
//! vertical line x = 0, taken from the general two-line formula. A vertical
//! line has neither, which is reported as `LineFit::Unconstrained`.

use super::orient::signed_area;
use super::types::{Point, Tolerance};

/// Which side of a candidate line must hold the polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Points on or above the line (lower tangent).
    Above,
    /// Points on or below the line (upper tangent).
    Below,
}

/// Slope/intercept form of the line through two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineFit {
    Sloped { slope: f64, intercept: f64 },
    /// Both points share an x-coordinate.
    Unconstrained,
}

/// Intersection of the infinite lines `p1p2` and `p3p4` (determinant form).
/// `None` when the lines are parallel or coincident.
pub fn intersect_lines(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let d12 = p1.x * p2.y - p1.y * p2.x;
    let d34 = p3.x * p4.y - p3.y * p4.x;
    let px = (d12 * (p3.x - p4.x) - (p1.x - p2.x) * d34) / denom;
    let py = (d12 * (p3.y - p4.y) - (p1.y - p2.y) * d34) / denom;
    Some(Point::new(px, py))
}

/// Fit `y = slope·x + intercept` through `a` and `b`.
pub fn fit_line(a: Point, b: Point) -> LineFit {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return LineFit::Unconstrained;
    }
    let axis_lo = Point::new(0.0, 1.0);
    let axis_hi = Point::new(0.0, 2.0);
    let slope = (b.y - a.y) / dx;
    match intersect_lines(a, b, axis_lo, axis_hi) {
        Some(p) if slope.is_finite() && p.y.is_finite() => LineFit::Sloped {
            slope,
            intercept: p.y,
        },
        // Steep enough to overflow: treat as vertical.
        _ => LineFit::Unconstrained,
    }
}

impl LineFit {
    /// `slope·x + intercept`, or `None` for a vertical line.
    #[inline]
    pub fn eval(&self, x: f64) -> Option<f64> {
        match *self {
            LineFit::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineFit::Unconstrained => None,
        }
    }

    /// Does `r` lie on the requested side of the line through `a → b`?
    ///
    /// Comparisons are non-strict and widened by the tolerance. A vertical line
    /// puts no constraint on y, so the decision falls back to the orientation
    /// of `r` against the directed line `a → b` (left counts as above).
    pub fn admits(&self, a: Point, b: Point, r: Point, side: Side, tol: Tolerance) -> bool {
        match *self {
            LineFit::Sloped { slope, intercept } => {
                let on_line = slope * r.x + intercept;
                let eps = tol.offset_eps(r.y.abs() + (slope * r.x).abs() + intercept.abs());
                if !(on_line.is_finite() && eps.is_finite()) {
                    return admits_by_orientation(a, b, r, side, tol);
                }
                match side {
                    Side::Above => r.y >= on_line - eps,
                    Side::Below => r.y <= on_line + eps,
                }
            }
            LineFit::Unconstrained => admits_by_orientation(a, b, r, side, tol),
        }
    }
}

fn admits_by_orientation(a: Point, b: Point, r: Point, side: Side, tol: Tolerance) -> bool {
    let area = signed_area(a, b, r);
    let eps = tol.area_eps(a, b, r);
    match side {
        Side::Above => area >= -eps,
        Side::Below => area <= eps,
    }
}
