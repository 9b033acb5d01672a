//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   the benches. Breaking changes are allowed and expected.

// Primitives
pub use crate::geom::{
    are_collinear, centroid, clockwise_sort, fit_line, intersect_lines, is_clockwise,
    is_counter_clockwise, lex_cmp, orientation, signed_area, sort_lex, HullCfg, LineFit,
    Orientation, Point, Side, Tolerance, DEFAULT_RELATIVE,
};
// Hulls
pub use crate::hull::verify::{contains, is_convex, same_polygon, same_vertex_set};
pub use crate::hull::{
    build_hull, compute_hull, compute_hull_with, gift_wrap, gift_wrap_with, lower_tangent,
    upper_tangent, HullError,
};
// Point clouds
pub use crate::rand2::{draw_points, CloudCfg as Cloud2Cfg, Layout, ReplayToken as Cloud2Replay};

/// Which hull algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
    DivideConquer,
    GiftWrap,
}

impl Algo {
    pub fn name(self) -> &'static str {
        match self {
            Algo::DivideConquer => "dc",
            Algo::GiftWrap => "gift",
        }
    }

    pub fn run(self, points: &[Point], cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
        match self {
            Algo::DivideConquer => compute_hull_with(points, cfg),
            Algo::GiftWrap => gift_wrap_with(points, cfg),
        }
    }
}

impl std::str::FromStr for Algo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dc" | "divide-conquer" => Ok(Algo::DivideConquer),
            "gift" | "jarvis" => Ok(Algo::GiftWrap),
            other => Err(format!("unknown algorithm '{other}' (expected dc|gift)")),
        }
    }
}
