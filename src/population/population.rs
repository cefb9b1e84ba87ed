//! Population type
//!
//! An ordered sequence of genomes. Index `i` lines up with index `i` of the
//! fitness vector computed for the same generation; order carries no ranking.

use rand::Rng;

use crate::fitness::evaluator::{FitnessScaling, FitnessVector};
use crate::fitness::traits::Fitness;
use crate::genome::traits::EvolutionaryGenome;

/// A population of genomes
#[derive(Clone, Debug, PartialEq)]
pub struct Population<G: EvolutionaryGenome> {
    individuals: Vec<G>,
}

impl<G: EvolutionaryGenome> Population<G> {
    /// Create a population from genomes
    pub fn from_genomes(individuals: Vec<G>) -> Self {
        Self { individuals }
    }

    /// Create a random population of `size` genomes
    pub fn random<R, F>(size: usize, rng: &mut R, mut initializer: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> G,
    {
        let individuals = (0..size).map(|_| initializer(&mut *rng)).collect();
        Self { individuals }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&G> {
        self.individuals.get(index)
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &G> {
        self.individuals.iter()
    }

    /// Get the underlying slice of genomes
    pub fn genomes(&self) -> &[G] {
        &self.individuals
    }

    /// Take the genomes out of this population
    pub fn into_genomes(self) -> Vec<G> {
        self.individuals
    }

    /// Score and scale every individual
    pub fn evaluate<Fit>(&self, fitness: &Fit, scaling: FitnessScaling) -> FitnessVector
    where
        Fit: Fitness<Genome = G>,
    {
        FitnessVector::evaluate(fitness, &self.individuals, scaling)
    }

    /// Mean pairwise genome distance, a cheap diversity measure
    pub fn diversity(&self) -> f64 {
        let n = self.individuals.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                total += self.individuals[i].distance(&self.individuals[j]);
            }
        }
        total / (n * (n - 1) / 2) as f64
    }
}

impl<G: EvolutionaryGenome> std::ops::Index<usize> for Population<G> {
    type Output = G;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<G: EvolutionaryGenome> FromIterator<G> for Population<G> {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}

impl<G: EvolutionaryGenome> IntoIterator for Population<G> {
    type Item = G;
    type IntoIter = std::vec::IntoIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}
