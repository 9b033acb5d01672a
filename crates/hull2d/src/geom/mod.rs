//! 2D geometric primitives used by both hull algorithms.
//!
//! Purpose
//! - Orientation tests with an explicit tolerance policy (`Tolerance`).
//! - Line fitting for the tangent walk, with vertical lines as a value
//!   (`LineFit::Unconstrained`) rather than a division fault.
//! - Lexicographic and angular orderings of point sets.
//!
//! Frames
//! - Orientation names use the y-up frame (negative area = clockwise).
//! - `clockwise_sort` is named in the screen frame (y down); its output turns
//!   with positive signed area.
//!
//! Code cross-refs: `crate::hull::{tangent, dc, gift}`

mod line;
mod orient;
mod sort;
mod types;

pub use line::{fit_line, intersect_lines, LineFit, Side};
pub use orient::{
    are_collinear, is_clockwise, is_counter_clockwise, orientation, signed_area, Orientation,
};
pub use sort::{centroid, clockwise_sort, lex_cmp, sort_lex};
pub use types::{HullCfg, Point, Tolerance, DEFAULT_RELATIVE};

#[cfg(test)]
mod tests;
