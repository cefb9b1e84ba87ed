//! Crossover operators
//!
//! Single-point crossover for bit strings and blend crossover for scalar
//! genomes. Both consume the selected parents pairwise; an odd trailing parent
//! has no partner and produces no children.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::OperatorError;
use crate::genome::bit_string::BitString;
use crate::genome::traits::ScalarGenome;
use crate::operators::traits::{validate_probability, CrossoverOperator};

/// Where single-point crossover cuts the parents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverPoint {
    /// Cut at `k`; requires `0 < k < L`
    Fixed(usize),
    /// Draw `k` uniformly from `[1, L - 1]` once per call, shared by every pair
    Random,
}

/// Single-point crossover
///
/// Parents `(a, b)` cut at `k` give children `a[..k] + b[k..]` and
/// `b[..k] + a[k..]`. Pairs that skip crossover are copied unchanged.
#[derive(Clone, Debug)]
pub struct OnePointCrossover {
    /// Cut point policy
    pub point: CrossoverPoint,
    /// Per-pair crossover probability
    pub crossover_probability: f64,
}

impl OnePointCrossover {
    /// Create a single-point crossover
    pub fn new(point: CrossoverPoint, crossover_probability: f64) -> Self {
        Self {
            point,
            crossover_probability,
        }
    }

    /// Always cross at `k`
    pub fn fixed(k: usize) -> Self {
        Self::new(CrossoverPoint::Fixed(k), 1.0)
    }

    /// Always cross at a point drawn per call
    pub fn random() -> Self {
        Self::new(CrossoverPoint::Random, 1.0)
    }

    /// Set the per-pair crossover probability
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Check the configuration against a genome length
    pub fn validate(&self, length: usize) -> Result<(), OperatorError> {
        validate_probability("crossover_rate", self.crossover_probability)?;
        match self.point {
            CrossoverPoint::Fixed(k) if k == 0 || k >= length => {
                Err(OperatorError::InvalidParameter(format!(
                    "crossover point {} must lie strictly between 0 and the genome length {}",
                    k, length
                )))
            }
            CrossoverPoint::Random if length < 2 => Err(OperatorError::InvalidParameter(format!(
                "random crossover point needs a genome of length >= 2, got {}",
                length
            ))),
            _ => Ok(()),
        }
    }

    /// Resolve the cut point for one call
    pub fn resolve_point<R: Rng>(&self, length: usize, rng: &mut R) -> Result<usize, OperatorError> {
        self.validate(length)?;
        Ok(match self.point {
            CrossoverPoint::Fixed(k) => k,
            CrossoverPoint::Random => rng.gen_range(1..length),
        })
    }

    /// Swap the tails of two parents at `point`
    pub fn cross_pair(
        parent1: &BitString,
        parent2: &BitString,
        point: usize,
    ) -> Result<(BitString, BitString), OperatorError> {
        let (head1, tail1) = parent1.split_at(point)?;
        let (head2, tail2) = parent2.split_at(point)?;
        Ok((
            BitString::concat(head1, tail2),
            BitString::concat(head2, tail1),
        ))
    }
}

impl CrossoverOperator<BitString> for OnePointCrossover {
    fn recombine<R: Rng>(
        &self,
        parents: &[BitString],
        rng: &mut R,
    ) -> Result<Vec<BitString>, OperatorError> {
        let Some(first) = parents.first() else {
            return Ok(Vec::new());
        };
        let point = self.resolve_point(first.len(), rng)?;

        let mut children = Vec::with_capacity(parents.len() / 2 * 2);
        for pair in parents.chunks_exact(2) {
            let (parent1, parent2) = (&pair[0], &pair[1]);
            if rng.gen::<f64>() < self.crossover_probability {
                let (child1, child2) = Self::cross_pair(parent1, parent2, point)?;
                children.push(child1);
                children.push(child2);
            } else {
                children.push(parent1.clone());
                children.push(parent2.clone());
            }
        }
        Ok(children)
    }

    fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }
}

/// What blend crossover emits for a pair that skips crossover
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendFallback {
    /// Both children get the value 0.0
    #[default]
    Zero,
    /// Children are copies of their parents
    CopyParents,
}

/// Blend crossover for scalar genomes
///
/// With probability `crossover_probability` a pair `(a, b)` produces
/// `a + alpha * (b - a) * u1` and `b + alpha * (a - b) * u2`, with `u1` and
/// `u2` drawn independently from `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct BlendCrossover {
    /// Blend factor
    pub alpha: f64,
    /// Per-pair crossover probability
    pub crossover_probability: f64,
    /// Children of pairs that skip crossover
    pub fallback: BlendFallback,
}

impl BlendCrossover {
    /// Create a blend crossover with `alpha = 0.5`
    pub fn new(crossover_probability: f64) -> Self {
        Self {
            alpha: 0.5,
            crossover_probability,
            fallback: BlendFallback::default(),
        }
    }

    /// Set the blend factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the no-crossover fallback
    pub fn with_fallback(mut self, fallback: BlendFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn validate(&self) -> Result<(), OperatorError> {
        validate_probability("crossover_rate", self.crossover_probability)?;
        if !self.alpha.is_finite() {
            return Err(OperatorError::InvalidParameter(format!(
                "blend alpha must be finite, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    fn blend<R: Rng>(&self, anchor: f64, other: f64, rng: &mut R) -> f64 {
        anchor + self.alpha * (other - anchor) * rng.gen_range(-1.0..=1.0)
    }
}

impl<G: ScalarGenome> CrossoverOperator<G> for BlendCrossover {
    fn recombine<R: Rng>(&self, parents: &[G], rng: &mut R) -> Result<Vec<G>, OperatorError> {
        self.validate()?;

        let mut children = Vec::with_capacity(parents.len() / 2 * 2);
        for pair in parents.chunks_exact(2) {
            let (a, b) = (pair[0].value(), pair[1].value());
            let (child1, child2) = if rng.gen::<f64>() < self.crossover_probability {
                let child1 = self.blend(a, b, rng);
                let child2 = self.blend(b, a, rng);
                (child1, child2)
            } else {
                match self.fallback {
                    BlendFallback::Zero => (0.0, 0.0),
                    BlendFallback::CopyParents => (a, b),
                }
            };
            children.push(G::from_value(child1));
            children.push(G::from_value(child2));
        }
        Ok(children)
    }

    fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }
}
