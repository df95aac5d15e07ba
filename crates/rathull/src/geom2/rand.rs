//! Seeded random rational point sets.
//!
//! Model
//! - Each coordinate is `n/d` with `d` uniform in `[1, max_den]` and `n` uniform
//!   in `[-bound*d, bound*d]`, so `|n/d| <= bound`.
//! - Draws are indexed by a replay token `(seed, index)`; the same token always
//!   yields the same point set.
//!
//! The exact kernel multiplies up to eight denominators inside one orientation
//! test; `GridCfg::fits_exact_range` checks the worst case up front.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point2;
use crate::rational::Rational;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    pub count: usize,
    /// Coordinates lie in `[-bound, bound]`. Clamped to at least 1, and saturated
    /// to `i64::MAX / max_den` so numerators stay representable.
    pub bound: i64,
    /// Largest denominator drawn. `1` gives integer points. Clamped to at least 1.
    pub max_den: i64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            count: 64,
            bound: 16,
            max_den: 8,
        }
    }
}

impl GridCfg {
    /// Worst-case reduced cross product `8 * bound^2 * max_den^8` fits in `i64`.
    pub fn fits_exact_range(&self) -> bool {
        let b = self.bound.max(1) as u128;
        let d = self.max_den.max(1) as u128;
        d.checked_pow(8)
            .and_then(|d8| d8.checked_mul(b * b))
            .map_or(false, |v| v < 1 << 60)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn draw_coord<R: Rng>(rng: &mut R, bound: i64, max_den: i64) -> Rational {
    let d = rng.gen_range(1..=max_den);
    let n = rng.gen_range(-bound * d..=bound * d);
    Rational::new(n, d)
}

/// Draw `cfg.count` rational points for `tok`.
pub fn draw_points(cfg: GridCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let max_den = cfg.max_den.max(1);
    let bound = cfg.bound.clamp(1, i64::MAX / max_den);
    (0..cfg.count)
        .map(|_| {
            let x = draw_coord(&mut rng, bound, max_den);
            let y = draw_coord(&mut rng, bound, max_den);
            Point2::new(x, y)
        })
        .collect()
}

/// Integer lattice points in `[-bound, bound]^2`, for the machine-integer kernel.
pub fn draw_lattice(count: usize, bound: i64, tok: ReplayToken) -> Vec<Vector2<i64>> {
    let mut rng = tok.to_std_rng();
    let bound = bound.max(1);
    (0..count)
        .map(|_| Vector2::new(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = GridCfg {
            count: 40,
            bound: 5,
            max_den: 7,
        };
        let tok = ReplayToken::new(42, 7);
        assert_eq!(draw_points(cfg, tok), draw_points(cfg, tok));
        assert_ne!(draw_points(cfg, tok), draw_points(cfg, ReplayToken::new(42, 8)));
    }

    #[test]
    fn exact_range_estimate() {
        assert!(GridCfg::default().fits_exact_range());
        let ints = GridCfg {
            count: 1,
            bound: 1 << 29,
            max_den: 1,
        };
        assert!(ints.fits_exact_range());
        let wide = GridCfg {
            count: 1,
            bound: 1000,
            max_den: 1000,
        };
        assert!(!wide.fits_exact_range());
    }

    #[test]
    fn huge_bound_saturates() {
        let cfg = GridCfg {
            count: 50,
            bound: i64::MAX / 2,
            max_den: 4,
        };
        let limit = Rational::integer(i64::MAX / 4);
        for p in draw_points(cfg, ReplayToken::new(0, 0)) {
            for c in [p.x, p.y] {
                assert!(-limit <= c && c <= limit);
            }
        }
        let cfg = GridCfg {
            count: 10,
            bound: i64::MAX,
            max_den: i64::MAX,
        };
        assert_eq!(draw_points(cfg, ReplayToken::new(3, 1)).len(), 10);
        assert_eq!(draw_lattice(10, i64::MAX, ReplayToken::new(3, 1)).len(), 10);
    }

    #[test]
    fn coordinates_respect_bounds() {
        let cfg = GridCfg {
            count: 200,
            bound: 3,
            max_den: 5,
        };
        let b = Rational::integer(3);
        for p in draw_points(cfg, ReplayToken::new(1, 0)) {
            for c in [p.x, p.y] {
                assert!(-b <= c && c <= b);
                assert!((1..=5).contains(&c.den()));
            }
        }
        for v in draw_lattice(100, 2, ReplayToken::new(1, 0)) {
            assert!(v.x.abs() <= 2 && v.y.abs() <= 2);
        }
    }
}
