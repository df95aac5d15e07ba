//! Predicate sets ("kernels") consumed by the hull scan.
//!
//! A kernel supplies a point type plus three exact predicates: a strict
//! lexicographic order, a strict left-turn test and equality. The scan in
//! `hull` sees nothing else, so another coordinate domain only needs its own
//! `HullKernel` impl.
//!
//! Kernels here are zero-sized and stateless.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::point::{cross, Point2};

/// Capability bundle required by `ch_graham_andrew`.
///
/// Contract
/// - `less_xy` is a strict total order: `p < q` iff `p.x < q.x`, or `p.x == q.x`
///   and `p.y < q.y`.
/// - `left_turn(p0, p1, p2)` is true iff `cross(p1 - p0, p2 - p0) > 0`;
///   collinear and right-turning triples are false.
/// - `equal` is structural equality and agrees with `less_xy`
///   (`!less(p,q) && !less(q,p)` ⇔ `equal(p,q)`).
///
/// Violating the contract does not crash the scan, but its output is then
/// unspecified.
pub trait HullKernel {
    type Point: Clone;

    fn less_xy(&self, p: &Self::Point, q: &Self::Point) -> bool;

    fn left_turn(&self, p0: &Self::Point, p1: &Self::Point, p2: &Self::Point) -> bool;

    fn equal(&self, p: &Self::Point, q: &Self::Point) -> bool;

    /// `Ordering` view of `less_xy`, for `sort_by`.
    #[inline]
    fn compare_xy(&self, p: &Self::Point, q: &Self::Point) -> Ordering {
        if self.less_xy(p, q) {
            Ordering::Less
        } else if self.less_xy(q, p) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Exact rational kernel over `Point2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactKernel;

impl HullKernel for ExactKernel {
    type Point = Point2;

    #[inline]
    fn less_xy(&self, p: &Point2, q: &Point2) -> bool {
        p.x.less_than(&q.x) || (p.x == q.x && p.y.less_than(&q.y))
    }

    /// Panics if an intermediate leaves the `i64` range (see `rational`).
    #[inline]
    fn left_turn(&self, p0: &Point2, p1: &Point2, p2: &Point2) -> bool {
        cross(&p1.subtract(p0), &p2.subtract(p0)).positive()
    }

    #[inline]
    fn equal(&self, p: &Point2, q: &Point2) -> bool {
        p.x == q.x && p.y == q.y
    }
}

/// Machine-integer kernel over `Vector2<i64>`; orientation is evaluated in
/// `i128` and is exact for coordinates with `|c| < 2^62`. Outside that range
/// the result is undefined (checked only with debug assertions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntKernel;

/// Largest coordinate magnitude `IntKernel` orients exactly.
pub const INT_KERNEL_MAX_COORD: i64 = (1 << 62) - 1;

#[inline]
fn in_int_range(v: &Vector2<i64>) -> bool {
    (-INT_KERNEL_MAX_COORD..=INT_KERNEL_MAX_COORD).contains(&v.x)
        && (-INT_KERNEL_MAX_COORD..=INT_KERNEL_MAX_COORD).contains(&v.y)
}

/// Twice the signed area of `(a, b, c)`, widened to `i128`.
#[inline]
pub fn orient_i64(a: &Vector2<i64>, b: &Vector2<i64>, c: &Vector2<i64>) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - acx * aby
}

impl HullKernel for IntKernel {
    type Point = Vector2<i64>;

    #[inline]
    fn less_xy(&self, p: &Vector2<i64>, q: &Vector2<i64>) -> bool {
        (p.x, p.y) < (q.x, q.y)
    }

    #[inline]
    fn left_turn(&self, p0: &Vector2<i64>, p1: &Vector2<i64>, p2: &Vector2<i64>) -> bool {
        debug_assert!(
            in_int_range(p0) && in_int_range(p1) && in_int_range(p2),
            "IntKernel coordinate outside |c| < 2^62"
        );
        orient_i64(p0, p1, p2) > 0
    }

    #[inline]
    fn equal(&self, p: &Vector2<i64>, q: &Vector2<i64>) -> bool {
        p == q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;
    use nalgebra::vector;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn exact_order_is_lexicographic() {
        let k = ExactKernel;
        let a = Point2::new(q(1, 3), q(5, 1));
        let b = Point2::new(q(1, 2), q(-5, 1));
        let c = Point2::new(q(1, 2), q(0, 1));
        assert!(k.less_xy(&a, &b));
        assert!(k.less_xy(&b, &c));
        assert!(!k.less_xy(&c, &b));
        assert!(!k.less_xy(&c, &c));
        assert_eq!(k.compare_xy(&c, &Point2::new(q(2, 4), q(0, 7))), Ordering::Equal);
    }

    #[test]
    fn exact_left_turn_strict() {
        let k = ExactKernel;
        let o = Point2::from_ints(0, 0);
        let e1 = Point2::from_ints(1, 0);
        let d = Point2::new(q(1, 2), q(1, 2));
        assert!(k.left_turn(&o, &e1, &Point2::from_ints(1, 1)));
        assert!(!k.left_turn(&o, &e1, &Point2::from_ints(1, -1)));
        // collinear, including a zero-length edge
        assert!(!k.left_turn(&o, &d, &Point2::from_ints(1, 1)));
        assert!(!k.left_turn(&o, &o, &e1));
    }

    #[test]
    fn exact_left_turn_on_decimal_fractions() {
        let k = ExactKernel;
        let a = Point2::new(q(1, 10), q(1, 10));
        let b = Point2::new(q(2, 10), q(2, 10));
        let c = Point2::new(q(3, 10), q(3, 10));
        assert!(!k.left_turn(&a, &b, &c));
        assert!(!k.left_turn(&c, &b, &a));
        let nudged = Point2::new(q(3, 10), q(3_000_000_001, 10_000_000_000));
        assert!(k.left_turn(&a, &b, &nudged));
    }

    #[test]
    fn int_kernel_matches_exact_kernel() {
        let pts = [
            vector![0i64, 0],
            vector![3, 1],
            vector![-2, 5],
            vector![6, 2],
            vector![3, 1],
        ];
        let (ik, ek) = (IntKernel, ExactKernel);
        let lift = |v: &Vector2<i64>| Point2::from(*v);
        for a in &pts {
            for b in &pts {
                assert_eq!(ik.less_xy(a, b), ek.less_xy(&lift(a), &lift(b)));
                assert_eq!(ik.equal(a, b), ek.equal(&lift(a), &lift(b)));
                for c in &pts {
                    assert_eq!(
                        ik.left_turn(a, b, c),
                        ek.left_turn(&lift(a), &lift(b), &lift(c))
                    );
                }
            }
        }
    }

    #[test]
    fn int_orientation_at_range_limit() {
        let m = INT_KERNEL_MAX_COORD;
        let a = vector![-m, -m];
        let b = vector![m, -m];
        let c = vector![m, m];
        assert!(orient_i64(&a, &b, &c) > 0);
        assert!(IntKernel.left_turn(&a, &b, &c));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside |c| < 2^62")]
    fn int_kernel_rejects_out_of_range_coordinates() {
        let big = vector![i64::MAX, 0];
        let _ = IntKernel.left_turn(&vector![i64::MIN, 0], &big, &vector![0, i64::MAX]);
    }
}
