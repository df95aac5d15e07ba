//! Andrew's monotone chain (Graham/Andrew scan) over an abstract kernel.
//!
//! The scan only calls `compare_xy`, `left_turn` and `equal`, so the same code
//! serves exact rationals (`ExactKernel`), machine integers (`IntKernel`) and
//! any other domain with a `HullKernel` impl.
//!
//! Output convention
//! - Counter-clockwise, starting at the `less_xy`-smallest point.
//! - Only strict left turns survive: collinear boundary points are dropped,
//!   so an all-collinear input yields its two extreme points.
//! - Duplicates (by `equal`) appear at most once.

use super::kernel::{ExactKernel, HullKernel};
use super::point::Point2;

/// Pop from `chain` until its top two points and `p` make a strict left turn.
#[inline]
fn push_strict<K: HullKernel>(chain: &mut Vec<K::Point>, p: &K::Point, kernel: &K) {
    while chain.len() >= 2
        && !kernel.left_turn(&chain[chain.len() - 2], &chain[chain.len() - 1], p)
    {
        chain.pop();
    }
    chain.push(p.clone());
}

/// Convex hull of `points`, appended to `out`. Returns the number of points emitted.
///
/// Pre: `kernel` satisfies the `HullKernel` contract; otherwise the output is
/// unspecified. The scan itself never panics, but kernel panics propagate
/// (e.g. `ExactKernel::left_turn` on `i64` overflow).
pub fn ch_graham_andrew<K, I, E>(points: I, out: &mut E, kernel: &K) -> usize
where
    K: HullKernel,
    I: IntoIterator<Item = K::Point>,
    E: Extend<K::Point>,
{
    let mut pts: Vec<K::Point> = points.into_iter().collect();
    let input_len = pts.len();
    pts.sort_by(|a, b| kernel.compare_xy(a, b));
    pts.dedup_by(|a, b| kernel.equal(a, b));
    if pts.len() <= 1 {
        tracing::trace!(input_len, hull_len = pts.len(), "trivial hull");
        let n = pts.len();
        out.extend(pts);
        return n;
    }

    let mut lower: Vec<K::Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        push_strict(&mut lower, p, kernel);
    }
    let mut upper: Vec<K::Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        push_strict(&mut upper, p, kernel);
    }
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let n = lower.len() + upper.len();
    tracing::trace!(input_len, distinct = pts.len(), hull_len = n, "hull");
    out.extend(lower);
    out.extend(upper);
    n
}

/// Exact hull of rational points, collected into a fresh `Vec`.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut hull = Vec::with_capacity(points.len().min(16));
    ch_graham_andrew(points.iter().copied(), &mut hull, &ExactKernel);
    hull
}

/// Every consecutive triple (cyclically) makes a strict left turn.
///
/// Hulls with fewer than three points are degenerate and count as convex.
pub fn is_strictly_convex<K: HullKernel>(hull: &[K::Point], kernel: &K) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| kernel.left_turn(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]))
}

/// Every hull point occurs in `input` (by `equal`), and none occurs twice.
pub fn is_hull_subset<K: HullKernel>(hull: &[K::Point], input: &[K::Point], kernel: &K) -> bool {
    let present = hull.iter().all(|h| input.iter().any(|p| kernel.equal(h, p)));
    let distinct = hull
        .iter()
        .enumerate()
        .all(|(i, a)| hull[i + 1..].iter().all(|b| !kernel.equal(a, b)));
    present && distinct
}
