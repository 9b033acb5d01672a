//! Basic 2D types and tolerances shared by both hull algorithms.
//!
//! - `Point`: plain `Vector2<f64>`, compared by value.
//! - `Tolerance`: threshold policy for orientation and line-offset tests.
//! - `HullCfg`: centralizes the tolerance passed down to the algorithms.
//!
//! Code cross-refs: `orient::{orientation, signed_area}`, `line::LineFit::admits`

use nalgebra::Vector2;

/// A point in the plane. Points are values, not identities.
pub type Point = Vector2<f64>;

/// Default relative factor: a few ulps of the squared coordinate magnitude.
pub const DEFAULT_RELATIVE: f64 = 8.0 * f64::EPSILON;

/// Threshold policy for "clockwise / counter-clockwise / collinear".
///
/// Numeric robustness
/// - `Relative(k)` scales with the coordinates involved: areas are compared
///   against `k · m²` (m = largest absolute coordinate of the triangle), line
///   offsets against `k · (sum of absolute terms)`.
/// - `Absolute(e)` compares against `e` directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    Absolute(f64),
    Relative(f64),
}

impl Tolerance {
    /// Fixed `f64::EPSILON` threshold: effectively an exact zero test for
    /// coordinates of order one and larger.
    pub const MACHINE: Tolerance = Tolerance::Absolute(f64::EPSILON);

    /// Threshold for the signed area of triangle `(a, b, c)`.
    #[inline]
    pub fn area_eps(&self, a: Point, b: Point, c: Point) -> f64 {
        match *self {
            Tolerance::Absolute(e) => e,
            Tolerance::Relative(k) => {
                let m = a.amax().max(b.amax()).max(c.amax());
                k * m * m
            }
        }
    }

    /// Threshold for comparing two quantities whose absolute terms sum to `magnitude`.
    #[inline]
    pub fn offset_eps(&self, magnitude: f64) -> f64 {
        match *self {
            Tolerance::Absolute(e) => e,
            Tolerance::Relative(k) => k * magnitude,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Relative(DEFAULT_RELATIVE)
    }
}

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HullCfg {
    pub tolerance: Tolerance,
}

impl HullCfg {
    #[inline]
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}
