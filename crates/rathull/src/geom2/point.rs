//! Planar points with exact rational coordinates.
//!
//! Points double as vectors from the origin; `cross` is the only primitive the
//! orientation predicate needs.

use std::fmt;

use nalgebra::Vector2;

use crate::rational::Rational;

/// Point (or vector) in the plane with exact coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point2 {
    pub x: Rational,
    pub y: Rational,
}

impl Point2 {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(Rational::integer(x), Rational::integer(y))
    }

    #[inline]
    pub fn add(&self, other: &Point2) -> Point2 {
        Point2::new(self.x.add(&other.x), self.y.add(&other.y))
    }

    #[inline]
    pub fn subtract(&self, other: &Point2) -> Point2 {
        Point2::new(self.x.subtract(&other.x), self.y.subtract(&other.y))
    }

    /// Scalar multiple `s·p`.
    #[inline]
    pub fn scale(&self, s: &Rational) -> Point2 {
        Point2::new(s.multiply(&self.x), s.multiply(&self.y))
    }

    /// Componentwise division by `s`. Panics if `s` is zero.
    #[inline]
    pub fn divide(&self, s: &Rational) -> Point2 {
        Point2::new(self.x.divide(s), self.y.divide(s))
    }

    /// Lossy float image, for output and plotting.
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }
}

/// Scalar cross product `u.x*v.y - v.x*u.y` of two points read as vectors.
#[inline]
pub fn cross(u: &Point2, v: &Point2) -> Rational {
    u.x.multiply(&v.y).subtract(&v.x.multiply(&u.y))
}

impl From<Vector2<i64>> for Point2 {
    #[inline]
    fn from(v: Vector2<i64>) -> Self {
        Point2::from_ints(v.x, v.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Self::Output {
        Point2::add(&self, &rhs)
    }
}
impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Self::Output {
        self.subtract(&rhs)
    }
}
impl std::ops::Mul<Rational> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, s: Rational) -> Self::Output {
        self.scale(&s)
    }
}
impl std::ops::Mul<Point2> for Rational {
    type Output = Point2;
    #[inline]
    fn mul(self, p: Point2) -> Self::Output {
        p.scale(&self)
    }
}
impl std::ops::Div<Rational> for Point2 {
    type Output = Point2;
    #[inline]
    fn div(self, s: Rational) -> Self::Output {
        self.divide(&s)
    }
}
