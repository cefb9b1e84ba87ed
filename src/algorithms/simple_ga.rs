//! Simple Genetic Algorithm
//!
//! This module implements the generational loop: evaluate, select, recombine,
//! mutate, replace, for a fixed number of generations.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::algorithms::strategy::Strategy;
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats, TimingStats};
use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::fitness::evaluator::FitnessVector;
use crate::fitness::traits::Fitness;
use crate::operators::selection::{RouletteSelection, RouletteWheel};
use crate::operators::traits::SelectionOperator;
use crate::population::population::Population;

/// Configuration for the Simple GA
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleGAConfig {
    /// Population size
    pub population_size: usize,
    /// Number of generations to run
    pub max_generations: usize,
    /// Fail with `DegenerateFitness` instead of taking the zero-sum fallback
    pub strict_fitness: bool,
}

impl Default for SimpleGAConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 1000,
            strict_fitness: false,
        }
    }
}

impl SimpleGAConfig {
    /// Check sizes before a run starts
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(EvolutionError::Configuration(
                "generation budget must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SimpleGA
pub struct SimpleGABuilder<S, Fit> {
    config: SimpleGAConfig,
    strategy: Option<S>,
    fitness: Option<Fit>,
}

impl SimpleGABuilder<(), ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SimpleGAConfig::default(),
            strategy: None,
            fitness: None,
        }
    }
}

impl Default for SimpleGABuilder<(), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, Fit> SimpleGABuilder<S, Fit> {
    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the generation budget
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = max;
        self
    }

    /// Turn degenerate fitness vectors into errors
    pub fn strict_fitness(mut self, strict: bool) -> Self {
        self.config.strict_fitness = strict;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: SimpleGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the genome strategy
    pub fn strategy<NewS: Strategy>(self, strategy: NewS) -> SimpleGABuilder<NewS, Fit> {
        SimpleGABuilder {
            config: self.config,
            strategy: Some(strategy),
            fitness: self.fitness,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewFit: Fitness>(self, fitness: NewFit) -> SimpleGABuilder<S, NewFit> {
        SimpleGABuilder {
            config: self.config,
            strategy: self.strategy,
            fitness: Some(fitness),
        }
    }
}

impl<S, Fit> SimpleGABuilder<S, Fit>
where
    S: Strategy,
    Fit: Fitness<Genome = S::Genome>,
{
    /// Build the SimpleGA instance
    pub fn build(self) -> EvoResult<SimpleGA<S, Fit>> {
        self.config.validate()?;

        let strategy = self.strategy.ok_or_else(|| {
            EvolutionError::Configuration("Strategy must be specified".to_string())
        })?;
        strategy.validate()?;

        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".to_string())
        })?;

        if let (Some(genome), Some(expected)) = (strategy.genome_dimension(), fitness.dimension()) {
            if genome != expected {
                return Err(OperatorError::InvalidParameter(format!(
                    "genome length {} does not match the {} decision variables of the objective",
                    genome, expected
                ))
                .into());
            }
        }

        Ok(SimpleGA {
            config: self.config,
            strategy,
            fitness,
            selection: RouletteSelection::new(),
        })
    }
}

/// Simple Genetic Algorithm
///
/// Immutable once built. Each call to [`SimpleGA::start`] creates an
/// independent [`Evolution`] driven by the caller's random source.
pub struct SimpleGA<S, Fit> {
    config: SimpleGAConfig,
    strategy: S,
    fitness: Fit,
    selection: RouletteSelection,
}

impl SimpleGA<(), ()> {
    /// Create a builder for SimpleGA
    pub fn builder() -> SimpleGABuilder<(), ()> {
        SimpleGABuilder::new()
    }
}

impl<S, Fit> SimpleGA<S, Fit>
where
    S: Strategy,
    Fit: Fitness<Genome = S::Genome>,
{
    pub fn config(&self) -> &SimpleGAConfig {
        &self.config
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Create the initial population
    pub fn start<R: Rng>(&self, rng: &mut R) -> Evolution<'_, S, Fit> {
        let population = Population::random(self.config.population_size, rng, |rng| {
            self.strategy.initialize(rng)
        });
        Evolution {
            ga: self,
            population,
            generation: 0,
            last_evaluated: None,
            stats: EvolutionStats::new(),
            started: Instant::now(),
        }
    }

    /// Run the genetic algorithm for the whole generation budget
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult<S::Genome>> {
        info!(
            population_size = self.config.population_size,
            generations = self.config.max_generations,
            "starting evolution"
        );

        let mut evolution = self.start(rng);
        while evolution.state() != RunState::Terminated {
            evolution.step(rng)?;
        }
        let result = evolution.finish()?;

        info!(
            best_fitness = result.best_fitness,
            best_score = result.best_score,
            runtime_ms = result.stats.total_runtime_ms,
            "evolution finished"
        );
        Ok(result)
    }
}

/// Lifecycle of one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Population created, no generation run yet
    Initialized,
    /// At least one generation run, budget not spent
    Evolving,
    /// Generation budget spent
    Terminated,
}

/// A run in progress
pub struct Evolution<'a, S, Fit>
where
    S: Strategy,
{
    ga: &'a SimpleGA<S, Fit>,
    population: Population<S::Genome>,
    generation: usize,
    /// Population of the last evaluated generation and its fitness
    last_evaluated: Option<(Population<S::Genome>, FitnessVector)>,
    stats: EvolutionStats,
    started: Instant,
}

impl<'a, S, Fit> Evolution<'a, S, Fit>
where
    S: Strategy,
    Fit: Fitness<Genome = S::Genome>,
{
    /// Generations completed so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> RunState {
        if self.generation == 0 {
            RunState::Initialized
        } else if self.generation < self.ga.config.max_generations {
            RunState::Evolving
        } else {
            RunState::Terminated
        }
    }

    /// The current population
    pub fn population(&self) -> &Population<S::Genome> {
        &self.population
    }

    /// Statistics recorded so far
    pub fn stats(&self) -> &EvolutionStats {
        &self.stats
    }

    /// Run one generation and replace the population with its children
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> EvoResult<&GenerationStats> {
        if self.state() == RunState::Terminated {
            return Err(EvolutionError::BudgetExhausted {
                generations: self.ga.config.max_generations,
            });
        }
        if self.population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        let generation = self.generation + 1;

        let eval_start = Instant::now();
        let fitness = self
            .population
            .evaluate(&self.ga.fitness, self.ga.strategy.scaling());
        let eval_time = eval_start.elapsed();

        if let Some(fallback) = RouletteWheel::from_fitness(&fitness).fallback() {
            warn!(generation, %fallback, "fitness vector sums to zero");
            if self.ga.config.strict_fitness {
                return Err(EvolutionError::DegenerateFitness { generation });
            }
        }

        let sel_start = Instant::now();
        let parents = self
            .ga
            .selection
            .select_population(self.population.genomes(), &fitness, rng);
        let selection_time = sel_start.elapsed();

        let cross_start = Instant::now();
        let mut children = self.ga.strategy.crossover(&parents, rng)?;
        let crossover_time = cross_start.elapsed();

        let mut_start = Instant::now();
        self.ga.strategy.mutate(&mut children, rng);
        let mutation_time = mut_start.elapsed();

        let gen_stats = GenerationStats::from_fitness(generation, &fitness, self.population.diversity())
            .with_timing(
                TimingStats::new()
                    .with_evaluation(eval_time)
                    .with_selection(selection_time)
                    .with_crossover(crossover_time)
                    .with_mutation(mutation_time),
            );
        debug!(
            generation,
            best = gen_stats.best_fitness,
            mean = gen_stats.mean_fitness,
            shift = gen_stats.shift,
            "generation evaluated"
        );
        self.stats.record(gen_stats);

        let previous = std::mem::replace(&mut self.population, Population::from_genomes(children));
        self.last_evaluated = Some((previous, fitness));
        self.generation = generation;

        self.stats
            .last()
            .ok_or(EvolutionError::EmptyPopulation)
    }

    /// Best individual of the last evaluated generation.
    ///
    /// Before any generation has run, the current population is evaluated.
    pub fn best(&self) -> EvoResult<(S::Genome, f64)> {
        let evaluated;
        let (population, fitness) = match &self.last_evaluated {
            Some((population, fitness)) => (population, fitness),
            None => {
                evaluated = self
                    .population
                    .evaluate(&self.ga.fitness, self.ga.strategy.scaling());
                (&self.population, &evaluated)
            }
        };

        let (index, value) = fitness.argmax().ok_or(EvolutionError::EmptyPopulation)?;
        let genome = population
            .get(index)
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)?;
        Ok((genome, value))
    }

    /// Report the best individual and the collected statistics
    pub fn finish(mut self) -> EvoResult<EvolutionResult<S::Genome>> {
        let (best_genome, best_fitness) = self.best()?;
        let best_score = self.ga.fitness.evaluate(&best_genome);
        self.stats.set_runtime(self.started.elapsed());

        Ok(
            EvolutionResult::new(best_genome, best_fitness, best_score, self.generation)
                .with_stats(self.stats),
        )
    }
}
