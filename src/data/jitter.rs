//! Jitter Generator
//! Deterministic horizontal jitter used to separate overlapping points.
//! Values are display-only and never written back to the table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded uniform jitter source. The same seed, count and range always
/// reproduce the same sequence.
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` values uniformly from `[-range, range)`.
    pub fn uniform(&mut self, count: usize, range: f64) -> Vec<f64> {
        (0..count)
            .map(|_| self.rng.random_range(-range..range))
            .collect()
    }

    /// Draw `count` values uniformly from `[center - range, center + range)`.
    pub fn around(&mut self, center: f64, count: usize, range: f64) -> Vec<f64> {
        self.uniform(count, range)
            .into_iter()
            .map(|offset| center + offset)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_sequence() {
        let a = Jitter::with_seed(42).uniform(200, 1.0);
        let b = Jitter::with_seed(42).uniform(200, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Jitter::with_seed(42).uniform(50, 1.0);
        let b = Jitter::with_seed(43).uniform(50, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn values_stay_inside_the_range() {
        let values = Jitter::with_seed(7).uniform(1000, 0.08);
        assert!(values.iter().all(|v| (-0.08..=0.08).contains(v)));
    }

    #[test]
    fn around_shifts_by_the_center() {
        let values = Jitter::with_seed(7).around(1.0, 1000, 0.08);
        assert!(values.iter().all(|v| (0.92..=1.08).contains(v)));
    }
}
