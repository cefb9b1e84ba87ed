//! Operator traits
//!
//! Operators work on whole populations: selection draws N parents, crossover
//! turns consecutive parent pairs into children, mutation perturbs children in
//! place.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::evaluator::FitnessVector;
use crate::genome::traits::EvolutionaryGenome;

/// Selection operator trait
pub trait SelectionOperator<G: EvolutionaryGenome> {
    /// Select a single individual, returning its index
    fn select<R: Rng>(&self, fitness: &FitnessVector, rng: &mut R) -> usize;

    /// Draw `population.len()` parents with replacement, in draw order
    fn select_population<R: Rng>(
        &self,
        population: &[G],
        fitness: &FitnessVector,
        rng: &mut R,
    ) -> Vec<G> {
        if population.is_empty() {
            return Vec::new();
        }
        (0..population.len())
            .map(|_| population[self.select(fitness, rng)].clone())
            .collect()
    }
}

/// Crossover operator trait
pub trait CrossoverOperator<G: EvolutionaryGenome> {
    /// Recombine parents pairwise (0&1, 2&3, ...) into two children per pair.
    ///
    /// An odd trailing parent has no partner and is dropped.
    fn recombine<R: Rng>(&self, parents: &[G], rng: &mut R) -> Result<Vec<G>, OperatorError>;

    /// Get the probability of crossover being applied to a pair
    fn crossover_probability(&self) -> f64;
}

/// Mutation operator trait
pub trait MutationOperator<G: EvolutionaryGenome> {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);

    /// Mutate every genome independently
    fn mutate_all<R: Rng>(&self, genomes: &mut [G], rng: &mut R) {
        for genome in genomes.iter_mut() {
            self.mutate(genome, rng);
        }
    }

    /// Get the mutation probability
    fn mutation_probability(&self) -> f64;
}

/// Check that a rate lies in `[0, 1]`
pub fn validate_probability(name: &str, value: f64) -> Result<(), OperatorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OperatorError::InvalidParameter(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::scalar::Scalar;
    use crate::genome::traits::ScalarGenome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Always picks the last individual
    struct LastSelection;

    impl SelectionOperator<Scalar> for LastSelection {
        fn select<R: Rng>(&self, fitness: &FitnessVector, _rng: &mut R) -> usize {
            fitness.len() - 1
        }
    }

    struct AddOne;

    impl MutationOperator<Scalar> for AddOne {
        fn mutate<R: Rng>(&self, genome: &mut Scalar, _rng: &mut R) {
            *genome.value_mut() += 1.0;
        }

        fn mutation_probability(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_select_population_keeps_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let population: Vec<Scalar> = (0..5).map(|i| Scalar::new(i as f64)).collect();
        let fitness = FitnessVector::new(vec![1.0; 5]);

        let selected = LastSelection.select_population(&population, &fitness, &mut rng);
        assert_eq!(selected.len(), 5);
        assert!(selected.iter().all(|g| g.value() == 4.0));
    }

    #[test]
    fn test_select_population_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let fitness = FitnessVector::new(vec![]);
        assert!(LastSelection
            .select_population(&[], &fitness, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_mutate_all_visits_every_genome() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut genomes = vec![Scalar::new(0.0), Scalar::new(1.0)];
        AddOne.mutate_all(&mut genomes, &mut rng);
        assert_eq!(genomes, vec![Scalar::new(1.0), Scalar::new(2.0)]);
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability("crossover_rate", 0.0).is_ok());
        assert!(validate_probability("crossover_rate", 1.0).is_ok());
        assert!(matches!(
            validate_probability("mutation_rate", 1.5),
            Err(OperatorError::InvalidParameter(_))
        ));
        assert!(validate_probability("mutation_rate", f64::NAN).is_err());
    }
}
