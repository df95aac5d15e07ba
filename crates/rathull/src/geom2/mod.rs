//! Exact 2D geometry: points, predicate kernels and the hull scan.
//!
//! Layering (each level only uses the ones above it)
//! - `point`: `Point2` over `Rational`, vector ops, `cross`.
//! - `kernel`: `HullKernel` predicate sets (`ExactKernel`, `IntKernel`).
//! - `hull`: Graham/Andrew scan generic over `HullKernel`.
//! - `rand`: seeded point sets for tests, benches and the CLI.
//!
//! No floating-point value enters a predicate; `Point2::to_vector` exists for
//! output only.

mod hull;
mod kernel;
mod point;
pub mod rand;

pub use hull::{ch_graham_andrew, convex_hull, is_hull_subset, is_strictly_convex};
pub use kernel::{orient_i64, ExactKernel, HullKernel, IntKernel, INT_KERNEL_MAX_COORD};
pub use point::{cross, Point2};
