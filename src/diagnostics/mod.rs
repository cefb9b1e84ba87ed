//! Diagnostics and statistics
//!
//! This module provides per-generation statistics and the result of a run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::evaluator::FitnessVector;
use crate::genome::traits::EvolutionaryGenome;

/// Statistics for a single evaluated generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (1-based)
    pub generation: usize,
    /// Number of individuals evaluated
    pub population_size: usize,
    /// Best scaled fitness
    pub best_fitness: f64,
    /// Worst scaled fitness
    pub worst_fitness: f64,
    /// Mean scaled fitness
    pub mean_fitness: f64,
    /// Sum of scaled fitness
    pub total_fitness: f64,
    /// Shift applied by fitness scaling
    pub shift: f64,
    /// Mean pairwise genome distance
    pub diversity: f64,
    /// Whether the fitness vector summed to zero
    pub degenerate: bool,
    /// Timing information
    pub timing: TimingStats,
}

/// Timing statistics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Time spent on fitness evaluation (ms)
    pub evaluation_ms: f64,
    /// Time spent on selection (ms)
    pub selection_ms: f64,
    /// Time spent on crossover (ms)
    pub crossover_ms: f64,
    /// Time spent on mutation (ms)
    pub mutation_ms: f64,
}

impl TimingStats {
    /// Create new timing stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Set evaluation time
    pub fn with_evaluation(mut self, duration: Duration) -> Self {
        self.evaluation_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set selection time
    pub fn with_selection(mut self, duration: Duration) -> Self {
        self.selection_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set crossover time
    pub fn with_crossover(mut self, duration: Duration) -> Self {
        self.crossover_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set mutation time
    pub fn with_mutation(mut self, duration: Duration) -> Self {
        self.mutation_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Sum of all phases
    pub fn total_ms(&self) -> f64 {
        self.evaluation_ms + self.selection_ms + self.crossover_ms + self.mutation_ms
    }
}

impl GenerationStats {
    /// Summarize a generation's fitness vector
    pub fn from_fitness(generation: usize, fitness: &FitnessVector, diversity: f64) -> Self {
        let values = fitness.values();
        let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = values.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            generation,
            population_size: values.len(),
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: fitness.mean().unwrap_or(0.0),
            total_fitness: fitness.total(),
            shift: fitness.shift(),
            diversity,
            degenerate: fitness.is_degenerate(),
            timing: TimingStats::default(),
        }
    }

    /// Set timing information
    pub fn with_timing(mut self, timing: TimingStats) -> Self {
        self.timing = timing;
        self
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Most recent generation
    pub fn last(&self) -> Option<&GenerationStats> {
        self.generations.last()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Generations whose fitness vector summed to zero
    pub fn degenerate_generations(&self) -> Vec<usize> {
        self.generations
            .iter()
            .filter(|g| g.degenerate)
            .map(|g| g.generation)
            .collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        let best = self.best_fitness().unwrap_or(f64::NEG_INFINITY);
        let final_best = self.last().map_or(f64::NEG_INFINITY, |g| g.best_fitness);

        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness seen: {:.6}\n\
             - Final generation best: {:.6}\n\
             - Degenerate generations: {}\n\
             - Runtime: {:.2}ms",
            self.num_generations(),
            best,
            final_best,
            self.degenerate_generations().len(),
            self.total_runtime_ms,
        )
    }
}

/// Result of an evolution run
///
/// The best individual is taken from the last evaluated generation, paired with
/// the fitness vector computed for that same population.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "G: EvolutionaryGenome")]
pub struct EvolutionResult<G: EvolutionaryGenome> {
    /// The best genome of the last evaluated generation
    pub best_genome: G,
    /// Its scaled fitness
    pub best_fitness: f64,
    /// Its raw objective score
    pub best_score: f64,
    /// Number of generations completed
    pub generations: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl<G: EvolutionaryGenome> EvolutionResult<G> {
    /// Create a new evolution result
    pub fn new(best_genome: G, best_fitness: f64, best_score: f64, generations: usize) -> Self {
        Self {
            best_genome,
            best_fitness,
            best_score,
            generations,
            stats: EvolutionStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats, TimingStats};
}
