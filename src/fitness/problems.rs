//! Reference objectives
//!
//! A 0/1 knapsack scored with a soft weight penalty, and single-variable
//! function maximization.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Fitness;
use crate::genome::bit_string::BitString;
use crate::genome::scalar::Scalar;
use crate::genome::traits::ScalarGenome;

/// Factor applied to the value of an overweight selection
pub const DEFAULT_PENALTY: f64 = 0.5;

/// One decision item of a knapsack
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// 0/1 knapsack with penalized scoring
///
/// Bit `i` of the genome selects `items[i]`. Selections over the weight limit
/// are not rejected; their total value is multiplied by `penalty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Knapsack {
    items: Vec<Item>,
    weight_limit: f64,
    penalty: f64,
}

impl Knapsack {
    /// Create a knapsack over the given items
    pub fn new(items: Vec<Item>, weight_limit: f64) -> Self {
        Self {
            items,
            weight_limit,
            penalty: DEFAULT_PENALTY,
        }
    }

    /// The seven-item table used by the reference runs
    pub fn reference(weight_limit: f64) -> Self {
        Self::new(reference_items(), weight_limit)
    }

    /// Set the penalty factor for overweight selections
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Genome length this knapsack expects
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    fn selected<'a>(&'a self, genome: &'a BitString) -> impl Iterator<Item = &'a Item> + 'a {
        genome.ones_indices().filter_map(|i| self.items.get(i))
    }

    /// Total weight of the selected items
    pub fn total_weight(&self, genome: &BitString) -> f64 {
        self.selected(genome).map(|item| item.weight).sum()
    }

    /// Total value of the selected items, before any penalty
    pub fn total_value(&self, genome: &BitString) -> f64 {
        self.selected(genome).map(|item| item.value).sum()
    }

    /// Whether the selection respects the weight limit
    pub fn is_feasible(&self, genome: &BitString) -> bool {
        self.total_weight(genome) <= self.weight_limit
    }
}

impl Fitness for Knapsack {
    type Genome = BitString;

    fn evaluate(&self, genome: &BitString) -> f64 {
        let value = self.total_value(genome);
        if self.is_feasible(genome) {
            value
        } else {
            value * self.penalty
        }
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// Items as `(value, weight)`: 10/2, 5/3, 15/5, 7/7, 6/1, 18/4, 3/1
pub fn reference_items() -> Vec<Item> {
    [
        (10.0, 2.0),
        (5.0, 3.0),
        (15.0, 5.0),
        (7.0, 7.0),
        (6.0, 1.0),
        (18.0, 4.0),
        (3.0, 1.0),
    ]
    .into_iter()
    .map(|(value, weight)| Item::new(value, weight))
    .collect()
}

/// Real-valued objective built from a closure over the gene value
pub struct FnObjective<F>
where
    F: Fn(f64) -> f64,
{
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Fitness for FnObjective<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    type Genome = Scalar;

    fn evaluate(&self, genome: &Scalar) -> f64 {
        (self.f)(genome.value())
    }
}

/// f(x) = -x² + 2x, maximized at x = 1 with f(1) = 1
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadratic;

impl Quadratic {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_raw(&self, x: f64) -> f64 {
        -(x * x) + 2.0 * x
    }
}

impl Fitness for Quadratic {
    type Genome = Scalar;

    fn evaluate(&self, genome: &Scalar) -> f64 {
        self.evaluate_raw(genome.value())
    }
}
