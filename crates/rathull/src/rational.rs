//! Exact rationals over `i64` with a widened `i128` working domain.
//!
//! Purpose
//! - Arithmetic foundation for the exact hull predicates: every comparison and
//!   sign test is decided on integers, never on floats.
//!
//! Representation
//! - `num/den` with `den != 0`, always reduced by `gcd(num, den)`.
//! - Zero is stored as `0/1`.
//! - The sign of `den` is not canonicalized. A value is positive iff `num` and
//!   `den` share sign; every comparison below accounts for this.
//!
//! Overflow policy
//! - Comparisons cross-multiply in `i128` and cannot overflow.
//! - Arithmetic runs in `i128`, reduces, then narrows to `i64`. A result that
//!   does not fit is `RationalError::Overflow` for the `checked_*` forms and a
//!   panic for the operator forms.
//! - Integer coordinates with `|c| < 2^30` never overflow inside the
//!   orientation test (`geom2::kernel`).

use std::cmp::Ordering;
use std::fmt;

use num_integer::Integer;

/// Contract violations raised by rational construction and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("rational with zero denominator")]
    ZeroDenominator,
    #[error("division by a zero rational")]
    DivisionByZero,
    #[error("rational {num}/{den} does not fit in i64 after reduction")]
    Overflow { num: i128, den: i128 },
}

/// Exact fraction `num/den`, reduced to lowest terms.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl Rational {
    #[inline]
    pub const fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    #[inline]
    pub const fn one() -> Self {
        Self { num: 1, den: 1 }
    }

    /// `n/1`.
    #[inline]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Reduced fraction `n/d`.
    ///
    /// # Panics
    /// If `d == 0`. Use [`Rational::try_new`] to handle that case.
    pub fn new(n: i64, d: i64) -> Self {
        match Self::try_new(n, d) {
            Ok(r) => r,
            Err(e) => panic!("Rational::new({n}, {d}): {e}"),
        }
    }

    /// Reduced fraction `n/d`, or `ZeroDenominator`.
    pub fn try_new(n: i64, d: i64) -> Result<Self, RationalError> {
        if d == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        // Dividing by a gcd never grows magnitudes, so this cannot overflow.
        Self::reduce(n as i128, d as i128)
    }

    /// Reduce a wide `n/d` (`d != 0`) and narrow it to `i64`.
    fn reduce(n: i128, d: i128) -> Result<Self, RationalError> {
        debug_assert!(d != 0);
        if n == 0 {
            return Ok(Self::zero());
        }
        // Wide inputs are sums of two i64 products and never reach i128::MIN.
        let g = n.gcd(&d);
        let (rn, rd) = (n / g, d / g);
        match (i64::try_from(rn), i64::try_from(rd)) {
            (Ok(num), Ok(den)) => Ok(Self { num, den }),
            _ => Err(RationalError::Overflow { num: rn, den: rd }),
        }
    }

    #[inline]
    pub fn num(&self) -> i64 {
        self.num
    }

    #[inline]
    pub fn den(&self) -> i64 {
        self.den
    }

    /// Strictly greater than zero: numerator and denominator share sign.
    #[inline]
    pub fn positive(&self) -> bool {
        self.signum() > 0
    }

    #[inline]
    pub fn negative(&self) -> bool {
        self.signum() < 0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `-1`, `0` or `1`: the sign of `num * den`.
    #[inline]
    pub fn signum(&self) -> i64 {
        self.num.signum() * self.den.signum()
    }

    /// Nearest `f64`. Lossy; for presentation only.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `a/b OP c/d ⇔ a*d OP c*b` when `b*d > 0`; sides swap when `b*d < 0`.
    fn cmp_exact(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        if (self.den < 0) == (other.den < 0) {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        }
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp_exact(other) == Ordering::Less
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, RationalError> {
        let (a, b) = (self.num as i128, self.den as i128);
        let (c, d) = (other.num as i128, other.den as i128);
        Self::reduce(a * d + c * b, b * d)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, RationalError> {
        let (a, b) = (self.num as i128, self.den as i128);
        let (c, d) = (other.num as i128, other.den as i128);
        Self::reduce(a * d - c * b, b * d)
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, RationalError> {
        Self::reduce(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::reduce(
            self.num as i128 * other.den as i128,
            self.den as i128 * other.num as i128,
        )
    }

    /// Exact sum. Panics on overflow.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        fail_fast("add", self.checked_add(other))
    }

    /// Exact difference. Panics on overflow.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        fail_fast("subtract", self.checked_sub(other))
    }

    /// Exact product. Panics on overflow.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        fail_fast("multiply", self.checked_mul(other))
    }

    /// Exact quotient. Panics on division by zero or overflow.
    #[inline]
    pub fn divide(&self, other: &Self) -> Self {
        fail_fast("divide", self.checked_div(other))
    }

    #[inline]
    pub fn neg(&self) -> Self {
        // A reduced i64::MIN numerator has an odd denominator, which negates safely.
        if self.num == i64::MIN {
            Self {
                num: self.num,
                den: -self.den,
            }
        } else {
            Self {
                num: -self.num,
                den: self.den,
            }
        }
    }
}

#[inline]
fn fail_fast(op: &str, r: Result<Rational, RationalError>) -> Rational {
    match r {
        Ok(v) => v,
        Err(e) => panic!("Rational::{op}: {e}"),
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_exact(other) == Ordering::Equal
    }
}
impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_exact(other)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl std::ops::Add for Rational {
    type Output = Rational;
    #[inline]
    fn add(self, rhs: Rational) -> Self::Output {
        Rational::add(&self, &rhs)
    }
}
impl std::ops::Sub for Rational {
    type Output = Rational;
    #[inline]
    fn sub(self, rhs: Rational) -> Self::Output {
        self.subtract(&rhs)
    }
}
impl std::ops::Mul for Rational {
    type Output = Rational;
    #[inline]
    fn mul(self, rhs: Rational) -> Self::Output {
        self.multiply(&rhs)
    }
}
impl std::ops::Div for Rational {
    type Output = Rational;
    #[inline]
    fn div(self, rhs: Rational) -> Self::Output {
        self.divide(&rhs)
    }
}
impl std::ops::Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Self::Output {
        Rational::neg(&self)
    }
}
