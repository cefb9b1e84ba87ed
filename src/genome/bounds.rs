//! Initialization bounds for real-valued genomes
//!
//! Bounds only constrain where scalar genomes start. Mutation is free to carry
//! values outside them and nothing clamps them back.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw a value uniformly from the closed interval
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.range() <= 0.0 {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 2.0)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_basics() {
        let b = Bounds::new(-1.0, 3.0);
        assert_eq!(b.range(), 4.0);
        assert!(b.contains(0.0));
        assert!(b.contains(3.0));
        assert!(!b.contains(3.5));
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_rejects_inverted_interval() {
        Bounds::new(2.0, 0.0);
    }

    #[test]
    fn test_bounds_sample_within_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = Bounds::default();
        for _ in 0..1000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn test_bounds_sample_degenerate_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = Bounds::new(1.5, 1.5);
        assert_eq!(b.sample(&mut rng), 1.5);
    }

    #[test]
    fn test_bounds_from_tuple() {
        let b: Bounds = (0.0, 2.0).into();
        assert_eq!(b, Bounds::default());
        assert_eq!(Bounds::symmetric(1.0), Bounds::new(-1.0, 1.0));
    }
}
