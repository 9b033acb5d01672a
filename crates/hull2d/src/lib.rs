//! Planar convex hulls: divide-and-conquer with a gift-wrapping oracle.
//!
//! Layout
//! - `geom`: points, tolerances, orientation, line fitting, orderings.
//! - `hull`: tangent finder, divide-and-conquer merge, Jarvis march, checks.
//! - `rand2`: reproducible point clouds for benches, tests and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface the CLI and benches import from.

pub mod api;
pub mod geom;
pub mod hull;
pub mod rand2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{HullCfg, Point, Tolerance};
pub use hull::{compute_hull, gift_wrap, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        clockwise_sort, orientation, sort_lex, HullCfg, Orientation, Point, Tolerance,
    };
    pub use crate::hull::{compute_hull, compute_hull_with, gift_wrap, gift_wrap_with, HullError};
    pub use crate::rand2::{draw_points, CloudCfg, Layout, ReplayToken};
    pub use nalgebra::vector;
}
