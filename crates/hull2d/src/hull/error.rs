//! Errors surfaced by the hull entry points.
//!
//! Degenerate geometry (coincident or collinear points, vertical candidate
//! lines) is handled where it arises and never shows up here; only input that
//! breaks a contract does.

use std::fmt;

use crate::geom::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize, x: f64, y: f64 },
    /// The tangent finder needs at least one vertex on each side.
    EmptyPolygon,
}

impl HullError {
    pub(crate) fn non_finite(index: usize, p: Point) -> Self {
        Self::NonFinite {
            index,
            x: p.x,
            y: p.y,
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFinite { index, x, y } => {
                write!(f, "point {index} has a non-finite coordinate ({x}, {y})")
            }
            HullError::EmptyPolygon => write!(f, "tangent search needs two non-empty polygons"),
        }
    }
}

impl std::error::Error for HullError {}

/// Reject NaN and infinite coordinates.
pub(crate) fn validate_finite(points: &[Point]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::non_finite(index, points[index])),
        None => Ok(()),
    }
}
