//! Scalar genome
//!
//! A genome made of one real number, used for single-variable function
//! maximization.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::Bounds;
use crate::genome::traits::{EvolutionaryGenome, ScalarGenome};

/// Single real-valued genome
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar {
    value: f64,
}

impl Scalar {
    /// Create a scalar genome
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Draw a genome uniformly from the initialization range
    pub fn random<R: Rng>(bounds: &Bounds, rng: &mut R) -> Self {
        Self::new(bounds.sample(rng))
    }
}

impl EvolutionaryGenome for Scalar {
    type Allele = f64;

    fn dimension(&self) -> usize {
        1
    }

    fn distance(&self, other: &Self) -> f64 {
        (self.value - other.value).abs()
    }
}

impl ScalarGenome for Scalar {
    fn value(&self) -> f64 {
        self.value
    }

    fn value_mut(&mut self) -> &mut f64 {
        &mut self.value
    }

    fn from_value(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
