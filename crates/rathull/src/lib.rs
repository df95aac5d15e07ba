//! Exact planar convex hulls over fixed-width rationals.
//!
//! Layout
//! - `rational`: reduced `i64` fractions, compared and combined in `i128`.
//! - `geom2`: points, predicate kernels, the Graham/Andrew scan, samplers.
//!
//! Every predicate is decided by integer sign tests, so hulls are reproducible
//! bit for bit. Arithmetic that leaves the `i64` range fails fast instead of
//! rounding; see `rational` for the valid input range.

pub mod geom2;
pub mod rational;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{ch_graham_andrew, convex_hull, cross, ExactKernel, HullKernel, Point2};
pub use rational::{Rational, RationalError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_lattice, draw_points, GridCfg, ReplayToken};
    pub use crate::geom2::{
        ch_graham_andrew, convex_hull, cross, is_hull_subset, is_strictly_convex, ExactKernel,
        HullKernel, IntKernel, Point2,
    };
    pub use crate::rational::{Rational, RationalError};
}
