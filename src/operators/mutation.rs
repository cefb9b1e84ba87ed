//! Mutation operators
//!
//! This module provides bit-flip mutation for binary genomes and bounded
//! random-addition mutation for scalar genomes.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::traits::{BinaryGenome, ScalarGenome};
use crate::operators::traits::{validate_probability, MutationOperator};

/// Bit-flip mutation
///
/// Flips each bit independently with probability `mutation_probability`.
#[derive(Clone, Debug)]
pub struct BitFlipMutation {
    /// Per-bit flip probability
    pub mutation_probability: f64,
}

impl BitFlipMutation {
    /// Create a bit-flip mutation with the given per-bit rate
    pub fn new(mutation_probability: f64) -> Self {
        Self {
            mutation_probability,
        }
    }

    pub fn validate(&self) -> Result<(), OperatorError> {
        validate_probability("mutation_rate", self.mutation_probability)
    }
}

impl<G: BinaryGenome> MutationOperator<G> for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        for bit in genome.bits_mut().iter_mut() {
            if rng.gen::<f64>() < self.mutation_probability {
                *bit = !*bit;
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

/// Random-addition mutation
///
/// With probability `mutation_probability` per genome, adds a value drawn
/// uniformly from `[-amplitude, amplitude]`. Results are not clamped.
#[derive(Clone, Debug)]
pub struct RandomAdditionMutation {
    /// Per-genome mutation probability
    pub mutation_probability: f64,
    /// Half-width of the added noise
    pub amplitude: f64,
}

impl RandomAdditionMutation {
    /// Create a random-addition mutation drawing from `[-1, 1]`
    pub fn new(mutation_probability: f64) -> Self {
        Self {
            mutation_probability,
            amplitude: 1.0,
        }
    }

    /// Set the noise half-width
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn validate(&self) -> Result<(), OperatorError> {
        validate_probability("mutation_rate", self.mutation_probability)?;
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(OperatorError::InvalidParameter(format!(
                "mutation amplitude must be finite and non-negative, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }
}

impl<G: ScalarGenome> MutationOperator<G> for RandomAdditionMutation {
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        if rng.gen::<f64>() < self.mutation_probability {
            *genome.value_mut() += rng.gen_range(-self.amplitude..=self.amplitude);
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bit_string::BitString;
    use crate::genome::scalar::Scalar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_flip_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = BitString::new(vec![true, false, true, true, false, false, true]);
        let mut genome = original.clone();

        for _ in 0..100 {
            BitFlipMutation::new(0.0).mutate(&mut genome, &mut rng);
        }
        assert_eq!(genome, original);
    }

    #[test]
    fn test_bit_flip_rate_one_flips_every_bit() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut genome = BitString::new(vec![true, false, true, true, false, false, true]);

        BitFlipMutation::new(1.0).mutate(&mut genome, &mut rng);
        assert_eq!(
            genome.bits(),
            &[false, true, false, false, true, true, false]
        );
    }

    #[test]
    fn test_bit_flip_rate_is_per_bit() {
        let mut rng = StdRng::seed_from_u64(2);
        let mutation = BitFlipMutation::new(0.1);
        let mut flipped = 0;
        for _ in 0..1000 {
            let mut genome = BitString::zeros(10);
            mutation.mutate(&mut genome, &mut rng);
            flipped += genome.count_ones();
        }
        let rate = flipped as f64 / 10_000.0;
        assert!((rate - 0.1).abs() < 0.02, "observed rate {}", rate);
    }

    #[test]
    fn test_random_addition_within_amplitude() {
        let mut rng = StdRng::seed_from_u64(4);
        let mutation = RandomAdditionMutation::new(1.0);
        for _ in 0..200 {
            let mut genome = Scalar::new(1.0);
            mutation.mutate(&mut genome, &mut rng);
            assert!((0.0..=2.0).contains(&genome.value()));
        }
    }

    #[test]
    fn test_random_addition_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut genomes = vec![Scalar::new(0.3), Scalar::new(-7.0)];
        RandomAdditionMutation::new(0.0).mutate_all(&mut genomes, &mut rng);
        assert_eq!(genomes, vec![Scalar::new(0.3), Scalar::new(-7.0)]);
    }

    #[test]
    fn test_random_addition_is_not_clamped() {
        let mut rng = StdRng::seed_from_u64(6);
        let mutation = RandomAdditionMutation::new(1.0).with_amplitude(1.0);
        let mut genome = Scalar::new(1.9);
        let escaped = (0..10_000).any(|_| {
            mutation.mutate(&mut genome, &mut rng);
            !(0.0..=2.0).contains(&genome.value())
        });
        assert!(escaped);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(BitFlipMutation::new(-0.1).validate().is_err());
        assert!(RandomAdditionMutation::new(0.5)
            .with_amplitude(-1.0)
            .validate()
            .is_err());
    }
}
