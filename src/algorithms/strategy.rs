//! Genome strategies
//!
//! A strategy bundles everything the engine needs to know about one genome
//! kind: how to create a genome, how to recombine and mutate a population of
//! them, and which fitness scaling makes their scores usable for selection.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::evaluator::FitnessScaling;
use crate::genome::bit_string::BitString;
use crate::genome::bounds::Bounds;
use crate::genome::scalar::Scalar;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::crossover::{BlendCrossover, BlendFallback, CrossoverPoint, OnePointCrossover};
use crate::operators::mutation::{BitFlipMutation, RandomAdditionMutation};
use crate::operators::traits::{CrossoverOperator, MutationOperator};

/// Capability set the engine is polymorphic over
pub trait Strategy {
    /// The genome type this strategy evolves
    type Genome: EvolutionaryGenome;

    /// Create one random genome within the legal initial range
    fn initialize<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Recombine selected parents into children
    fn crossover<R: Rng>(
        &self,
        parents: &[Self::Genome],
        rng: &mut R,
    ) -> Result<Vec<Self::Genome>, OperatorError>;

    /// Mutate children in place
    fn mutate<R: Rng>(&self, children: &mut [Self::Genome], rng: &mut R);

    /// Scaling applied to raw scores before selection
    fn scaling(&self) -> FitnessScaling;

    /// Check operator parameters before a run starts
    fn validate(&self) -> Result<(), OperatorError>;

    /// Dimension of every genome this strategy creates, if fixed
    fn genome_dimension(&self) -> Option<usize> {
        None
    }
}

/// Fixed-length bit vectors with single-point crossover and bit-flip mutation
#[derive(Clone, Debug)]
pub struct BitVectorStrategy {
    length: usize,
    crossover: OnePointCrossover,
    mutation: BitFlipMutation,
}

impl BitVectorStrategy {
    pub fn new(
        length: usize,
        point: CrossoverPoint,
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Self {
        Self {
            length,
            crossover: OnePointCrossover::new(point, crossover_rate),
            mutation: BitFlipMutation::new(mutation_rate),
        }
    }

    /// Genome length
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn crossover_operator(&self) -> &OnePointCrossover {
        &self.crossover
    }

    pub fn mutation_operator(&self) -> &BitFlipMutation {
        &self.mutation
    }
}

impl Strategy for BitVectorStrategy {
    type Genome = BitString;

    fn initialize<R: Rng>(&self, rng: &mut R) -> BitString {
        BitString::random(self.length, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parents: &[BitString],
        rng: &mut R,
    ) -> Result<Vec<BitString>, OperatorError> {
        self.crossover.recombine(parents, rng)
    }

    fn mutate<R: Rng>(&self, children: &mut [BitString], rng: &mut R) {
        self.mutation.mutate_all(children, rng);
    }

    fn scaling(&self) -> FitnessScaling {
        FitnessScaling::Identity
    }

    fn validate(&self) -> Result<(), OperatorError> {
        self.crossover.validate(self.length)?;
        self.mutation.validate()
    }

    fn genome_dimension(&self) -> Option<usize> {
        Some(self.length)
    }
}

/// Single real values with blend crossover and random-addition mutation
#[derive(Clone, Debug)]
pub struct ScalarStrategy {
    bounds: Bounds,
    crossover: BlendCrossover,
    mutation: RandomAdditionMutation,
    scaling: FitnessScaling,
}

impl ScalarStrategy {
    pub fn new(bounds: Bounds, crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            bounds,
            crossover: BlendCrossover::new(crossover_rate),
            mutation: RandomAdditionMutation::new(mutation_rate),
            scaling: FitnessScaling::shift_to_positive(),
        }
    }

    /// Set the blend factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.crossover = self.crossover.with_alpha(alpha);
        self
    }

    /// Set what pairs that skip crossover produce
    pub fn with_fallback(mut self, fallback: BlendFallback) -> Self {
        self.crossover = self.crossover.with_fallback(fallback);
        self
    }

    /// Replace the default shift-to-positive scaling
    pub fn with_scaling(mut self, scaling: FitnessScaling) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn crossover_operator(&self) -> &BlendCrossover {
        &self.crossover
    }
}

impl Strategy for ScalarStrategy {
    type Genome = Scalar;

    fn initialize<R: Rng>(&self, rng: &mut R) -> Scalar {
        Scalar::random(&self.bounds, rng)
    }

    fn crossover<R: Rng>(&self, parents: &[Scalar], rng: &mut R) -> Result<Vec<Scalar>, OperatorError> {
        self.crossover.recombine(parents, rng)
    }

    fn mutate<R: Rng>(&self, children: &mut [Scalar], rng: &mut R) {
        self.mutation.mutate_all(children, rng);
    }

    fn scaling(&self) -> FitnessScaling {
        self.scaling
    }

    fn validate(&self) -> Result<(), OperatorError> {
        self.crossover.validate()?;
        self.mutation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::traits::ScalarGenome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_vector_strategy_initializes_fixed_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let strategy = BitVectorStrategy::new(7, CrossoverPoint::Fixed(3), 0.8, 0.1);
        for _ in 0..20 {
            assert_eq!(strategy.initialize(&mut rng).len(), 7);
        }
        assert_eq!(strategy.scaling(), FitnessScaling::Identity);
        assert_eq!(strategy.genome_dimension(), Some(7));
    }

    #[test]
    fn test_bit_vector_strategy_validates_point() {
        assert!(BitVectorStrategy::new(7, CrossoverPoint::Fixed(3), 0.8, 0.1)
            .validate()
            .is_ok());
        assert!(matches!(
            BitVectorStrategy::new(7, CrossoverPoint::Fixed(7), 0.8, 0.1).validate(),
            Err(OperatorError::InvalidParameter(_))
        ));
        assert!(BitVectorStrategy::new(7, CrossoverPoint::Random, 0.8, 2.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_bit_vector_strategy_keeps_genome_length() {
        let mut rng = StdRng::seed_from_u64(2);
        let strategy = BitVectorStrategy::new(7, CrossoverPoint::Random, 1.0, 0.5);
        let parents: Vec<BitString> = (0..6).map(|_| strategy.initialize(&mut rng)).collect();

        let mut children = strategy.crossover(&parents, &mut rng).unwrap();
        strategy.mutate(&mut children, &mut rng);
        assert_eq!(children.len(), 6);
        assert!(children.iter().all(|c| c.len() == 7));
    }

    #[test]
    fn test_scalar_strategy_defaults() {
        let mut rng = StdRng::seed_from_u64(3);
        let strategy = ScalarStrategy::new(Bounds::new(0.0, 2.0), 0.8, 0.05);
        assert_eq!(strategy.scaling(), FitnessScaling::shift_to_positive());
        assert_eq!(strategy.crossover_operator().alpha, 0.5);
        assert_eq!(strategy.crossover_operator().fallback, BlendFallback::Zero);
        assert!(strategy.validate().is_ok());

        let genome = strategy.initialize(&mut rng);
        assert!(strategy.bounds().contains(genome.value()));
    }

    #[test]
    fn test_scalar_strategy_overrides() {
        let strategy = ScalarStrategy::new(Bounds::default(), 0.8, 0.05)
            .with_alpha(0.25)
            .with_fallback(BlendFallback::CopyParents)
            .with_scaling(FitnessScaling::Identity);
        assert_eq!(strategy.crossover_operator().alpha, 0.25);
        assert_eq!(
            strategy.crossover_operator().fallback,
            BlendFallback::CopyParents
        );
        assert_eq!(strategy.scaling(), FitnessScaling::Identity);
    }
}
