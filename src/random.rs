//! Uniform random scalars from an explicitly owned RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform float source; seed it for reproducible scenes
pub struct RandomScalar {
    rng: StdRng,
}

impl RandomScalar {
    /// Deterministic source for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform draw from `[min, max]`.
    ///
    /// Reversed bounds are swapped. A zero-width range returns `min`, and
    /// non-finite bounds return `min` without advancing the RNG.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if !min.is_finite() || !max.is_finite() {
            return min;
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut random = RandomScalar::from_seed(7);
        for _ in 0..1000 {
            let v = random.uniform(-0.05, 0.05);
            assert!((-0.05..=0.05).contains(&v));
        }
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let mut random = RandomScalar::from_seed(7);
        for _ in 0..100 {
            let v = random.uniform(10.0, 5.0);
            assert!((5.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_zero_width_range() {
        let mut random = RandomScalar::from_seed(1);
        assert_eq!(random.uniform(0.0, 0.0), 0.0);
        assert_eq!(random.uniform(3.5, 3.5), 3.5);
    }

    #[test]
    fn test_non_finite_bounds_return_min() {
        let mut random = RandomScalar::from_seed(1);
        assert_eq!(random.uniform(1.0, f32::INFINITY), 1.0);
        assert!(random.uniform(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomScalar::from_seed(42);
        let mut b = RandomScalar::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.uniform(0.0, 100.0), b.uniform(0.0, 100.0));
        }
    }
}
