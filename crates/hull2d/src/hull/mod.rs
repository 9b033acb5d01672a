//! Convex hulls of planar point sets.
//!
//! Purpose
//! - `compute_hull`: divide-and-conquer over x-sorted sub-slices, merging
//!   clockwise sub-hulls through their lower and upper tangents.
//! - `gift_wrap`: Jarvis march, the independent oracle and slow baseline.
//!
//! Both return the hull in the same turning direction (clockwise on screen,
//! positive signed area in the y-up frame); only the starting vertex differs.
//!
//! Code cross-refs: `geom::{orientation, fit_line, clockwise_sort}`, `verify`

mod dc;
mod error;
mod gift;
mod scale;
pub mod tangent;
pub mod verify;

pub use dc::{build_hull, compute_hull, compute_hull_with};
pub use error::HullError;
pub use gift::{gift_wrap, gift_wrap_with};
pub use tangent::{lower_tangent, upper_tangent};
