//! Population evaluation and fitness scaling
//!
//! Every generation the whole population is scored from scratch and the raw
//! scores are scaled so roulette-wheel selection can use them as weights.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Fitness;

/// Default shift added on top of `|min|` by [`FitnessScaling::ShiftToPositive`]
pub const DEFAULT_SHIFT_EPSILON: f64 = 1e-6;

/// How raw scores become selection fitness
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessScaling {
    /// Use raw scores as they are.
    ///
    /// Constrained objectives penalize infeasible genomes themselves, see
    /// [`Knapsack`](crate::fitness::problems::Knapsack).
    Identity,
    /// If the minimum score is `<= 0`, add `|min| + epsilon` to every score
    ShiftToPositive { epsilon: f64 },
}

impl FitnessScaling {
    /// Shift-to-positive scaling with the default epsilon
    pub fn shift_to_positive() -> Self {
        Self::ShiftToPositive {
            epsilon: DEFAULT_SHIFT_EPSILON,
        }
    }

    /// Scale scores in place, returning the shift that was applied
    pub fn apply(&self, scores: &mut [f64]) -> f64 {
        match *self {
            Self::Identity => 0.0,
            Self::ShiftToPositive { epsilon } => {
                let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
                if scores.is_empty() || min > 0.0 {
                    return 0.0;
                }
                let shift = min.abs() + epsilon;
                for score in scores.iter_mut() {
                    *score += shift;
                }
                shift
            }
        }
    }
}

impl Default for FitnessScaling {
    fn default() -> Self {
        Self::Identity
    }
}

/// Scaled fitness of one generation, aligned index-by-index with its population
#[derive(Clone, Debug, PartialEq)]
pub struct FitnessVector {
    values: Vec<f64>,
    shift: f64,
}

impl FitnessVector {
    /// Wrap already-scaled fitness values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, shift: 0.0 }
    }

    /// Score every genome and scale the result
    pub fn evaluate<Fit: Fitness>(
        fitness: &Fit,
        population: &[Fit::Genome],
        scaling: FitnessScaling,
    ) -> Self {
        let mut values: Vec<f64> = population.iter().map(|g| fitness.evaluate(g)).collect();
        let shift = scaling.apply(&mut values);
        Self { values, shift }
    }

    /// The scaled values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Shift applied by scaling (0 when none)
    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Smallest value
    pub fn min(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Mean value
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.total() / self.values.len() as f64)
        }
    }

    /// True when the values sum to exactly zero.
    ///
    /// Roulette selection then falls back to the minimum as its divisor.
    pub fn is_degenerate(&self) -> bool {
        !self.values.is_empty() && self.total() == 0.0
    }

    /// Index and value of the largest fitness; ties go to the lowest index
    pub fn argmax(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &value) in self.values.iter().enumerate() {
            match best {
                Some((_, current)) if value <= current => {}
                _ => best = Some((i, value)),
            }
        }
        best
    }
}

impl std::ops::Index<usize> for FitnessVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::traits::FnFitness;
    use crate::genome::scalar::Scalar;
    use crate::genome::traits::ScalarGenome;

    #[test]
    fn test_shift_to_positive_moves_minimum_above_zero() {
        let mut scores = vec![-3.0, 0.0, 2.0];
        let shift = FitnessScaling::shift_to_positive().apply(&mut scores);
        let eps = DEFAULT_SHIFT_EPSILON;

        assert!((shift - (3.0 + eps)).abs() < 1e-12);
        assert!((scores[0] - eps).abs() < 1e-12);
        assert!((scores[1] - (3.0 + eps)).abs() < 1e-12);
        assert!((scores[2] - (5.0 + eps)).abs() < 1e-12);
        assert!(scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_shift_applies_when_minimum_is_exactly_zero() {
        let mut scores = vec![0.0, 1.0];
        let shift = FitnessScaling::shift_to_positive().apply(&mut scores);
        assert_eq!(shift, DEFAULT_SHIFT_EPSILON);
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn test_shift_skipped_for_positive_scores() {
        let mut scores = vec![0.5, 1.0];
        let shift = FitnessScaling::shift_to_positive().apply(&mut scores);
        assert_eq!(shift, 0.0);
        assert_eq!(scores, vec![0.5, 1.0]);
    }

    #[test]
    fn test_identity_scaling_keeps_scores() {
        let mut scores = vec![-1.0, 2.0];
        assert_eq!(FitnessScaling::Identity.apply(&mut scores), 0.0);
        assert_eq!(scores, vec![-1.0, 2.0]);
    }

    #[test]
    fn test_evaluate_population_recomputes_shift() {
        let objective = FnFitness::new(|g: &Scalar| g.value());
        let population = vec![Scalar::new(-2.0), Scalar::new(1.0)];
        let vector =
            FitnessVector::evaluate(&objective, &population, FitnessScaling::shift_to_positive());
        assert_eq!(vector.len(), 2);
        assert!((vector.shift() - (2.0 + DEFAULT_SHIFT_EPSILON)).abs() < 1e-12);

        let population = vec![Scalar::new(0.5), Scalar::new(1.0)];
        let vector =
            FitnessVector::evaluate(&objective, &population, FitnessScaling::shift_to_positive());
        assert_eq!(vector.shift(), 0.0);
        assert_eq!(vector.values(), &[0.5, 1.0]);
    }

    #[test]
    fn test_argmax_prefers_lowest_index_on_ties() {
        let vector = FitnessVector::new(vec![1.0, 3.0, 3.0, 2.0]);
        assert_eq!(vector.argmax(), Some((1, 3.0)));
        assert_eq!(FitnessVector::new(vec![]).argmax(), None);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(FitnessVector::new(vec![0.0, 0.0, 0.0]).is_degenerate());
        assert!(!FitnessVector::new(vec![0.0, 1.0]).is_degenerate());
        assert!(!FitnessVector::new(vec![]).is_degenerate());
    }

    #[test]
    fn test_summary_statistics() {
        let vector = FitnessVector::new(vec![1.0, 2.0, 6.0]);
        assert_eq!(vector.total(), 9.0);
        assert_eq!(vector.min(), Some(1.0));
        assert_eq!(vector.mean(), Some(3.0));
        assert_eq!(vector[2], 6.0);
    }
}
