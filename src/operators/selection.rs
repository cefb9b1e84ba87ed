//! Roulette-wheel selection
//!
//! Selection probability is proportional to scaled fitness. Parents are drawn
//! with replacement and returned in draw order.

use rand::Rng;

use crate::fitness::evaluator::FitnessVector;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::SelectionOperator;

/// How a wheel over a zero-sum fitness vector was built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelFallback {
    /// Probabilities divided by the minimum fitness
    MinimumDivisor,
    /// Minimum was zero too; every slot equally likely
    Uniform,
}

impl std::fmt::Display for WheelFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinimumDivisor => write!(f, "minimum fitness as divisor"),
            Self::Uniform => write!(f, "uniform selection"),
        }
    }
}

/// Cumulative selection distribution over one generation's fitness vector
#[derive(Clone, Debug, PartialEq)]
pub struct RouletteWheel {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
    total: f64,
    degenerate: bool,
}

impl RouletteWheel {
    /// Build the wheel: `p_i = f_i / total`, `c_i = p_0 + ... + p_i`.
    ///
    /// When the fitness sums to exactly zero the divisor falls back to the
    /// minimum fitness. If that is zero as well the wheel is uniform.
    pub fn new(fitness: &[f64]) -> Self {
        let sum: f64 = fitness.iter().sum();
        let degenerate = !fitness.is_empty() && sum == 0.0;

        let total = if degenerate {
            fitness.iter().copied().fold(f64::INFINITY, f64::min)
        } else {
            sum
        };

        let probabilities: Vec<f64> = if total == 0.0 || !total.is_finite() {
            let n = fitness.len().max(1) as f64;
            vec![1.0 / n; fitness.len()]
        } else {
            fitness.iter().map(|f| f / total).collect()
        };

        let cumulative = probabilities
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        Self {
            probabilities,
            cumulative,
            total,
            degenerate,
        }
    }

    /// Build the wheel for a fitness vector
    pub fn from_fitness(fitness: &FitnessVector) -> Self {
        Self::new(fitness.values())
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Divisor used for the probabilities
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Whether the zero-sum fallback was taken
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Which zero-sum fallback was taken, if any
    pub fn fallback(&self) -> Option<WheelFallback> {
        if !self.degenerate {
            None
        } else if self.total == 0.0 || !self.total.is_finite() {
            Some(WheelFallback::Uniform)
        } else {
            Some(WheelFallback::MinimumDivisor)
        }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Smallest index `i` with `u <= c_i`.
    ///
    /// A draw that lands on a boundary belongs to the lower slot. A draw above
    /// the last cumulative value (rounding left it short of 1) maps to the
    /// last index.
    pub fn index_for(&self, u: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| u <= c)
            .unwrap_or_else(|| self.cumulative.len().saturating_sub(1))
    }

    /// Draw `u` uniformly in `[0, 1)` and map it to an index
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.gen();
        self.index_for(u)
    }
}

/// Roulette wheel selection (fitness proportionate)
#[derive(Clone, Copy, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<G: EvolutionaryGenome> SelectionOperator<G> for RouletteSelection {
    fn select<R: Rng>(&self, fitness: &FitnessVector, rng: &mut R) -> usize {
        RouletteWheel::from_fitness(fitness).spin(rng)
    }

    fn select_population<R: Rng>(
        &self,
        population: &[G],
        fitness: &FitnessVector,
        rng: &mut R,
    ) -> Vec<G> {
        if population.is_empty() {
            return Vec::new();
        }
        let wheel = RouletteWheel::from_fitness(fitness);
        (0..population.len())
            .map(|_| population[wheel.spin(rng)].clone())
            .collect()
    }
}
