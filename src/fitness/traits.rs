//! Fitness traits
//!
//! This module defines the objective interface consumed by the engine.

use crate::genome::traits::EvolutionaryGenome;

/// Objective evaluation trait
///
/// Maps a genome to a real-valued score, higher is better. Implementations must
/// be pure: the engine re-evaluates every individual each generation and never
/// caches scores on the genome.
pub trait Fitness: Send + Sync {
    /// The genome type being evaluated
    type Genome: EvolutionaryGenome;

    /// Evaluate the raw score of a genome
    fn evaluate(&self, genome: &Self::Genome) -> f64;

    /// Genome dimension this objective is defined for, if fixed
    fn dimension(&self) -> Option<usize> {
        None
    }
}

/// A simple function wrapper for fitness evaluation
pub struct FnFitness<G, F>
where
    F: Fn(&G) -> f64,
{
    f: F,
    _marker: std::marker::PhantomData<G>,
}

impl<G, F> FnFitness<G, F>
where
    F: Fn(&G) -> f64,
{
    /// Create a new function-based fitness evaluator
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<G, F> Fitness for FnFitness<G, F>
where
    G: EvolutionaryGenome,
    F: Fn(&G) -> f64 + Send + Sync,
{
    type Genome = G;

    fn evaluate(&self, genome: &Self::Genome) -> f64 {
        (self.f)(genome)
    }
}
