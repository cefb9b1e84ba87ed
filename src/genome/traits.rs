//! Core genome traits
//!
//! A genome is the whole individual: no fitness is cached on it, so every trait
//! here only describes the encoded value and how operators may reach into it.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::GenomeError;

/// Core genome abstraction for the evolutionary engine.
///
/// Genomes must be cloneable (selection draws with replacement) and
/// serializable so results can be reported as JSON.
pub trait EvolutionaryGenome: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The allele type for individual genes
    type Allele: Clone + Send;

    /// Number of genes; constant for the lifetime of a run
    fn dimension(&self) -> usize;

    /// Distance metric between two genomes (default: 0.0)
    fn distance(&self, _other: &Self) -> f64 {
        0.0
    }
}

/// Trait for genomes that can be represented as bit strings
pub trait BinaryGenome: EvolutionaryGenome<Allele = bool> {
    /// Get the bits as a slice
    fn bits(&self) -> &[bool];

    /// Get the bits as a mutable slice
    fn bits_mut(&mut self) -> &mut [bool];

    /// Create from a vector of bits
    fn from_bits(bits: Vec<bool>) -> Result<Self, GenomeError>;

    /// Count the number of true bits (ones)
    fn count_ones(&self) -> usize {
        self.bits().iter().filter(|&&b| b).count()
    }

    /// Count the number of false bits (zeros)
    fn count_zeros(&self) -> usize {
        self.bits().iter().filter(|&&b| !b).count()
    }
}

/// Trait for genomes holding exactly one real-valued gene
pub trait ScalarGenome: EvolutionaryGenome<Allele = f64> {
    /// The gene value
    fn value(&self) -> f64;

    /// Mutable access to the gene value
    fn value_mut(&mut self) -> &mut f64;

    /// Create from a gene value
    fn from_value(value: f64) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MockBits {
        bits: Vec<bool>,
    }

    impl EvolutionaryGenome for MockBits {
        type Allele = bool;

        fn dimension(&self) -> usize {
            self.bits.len()
        }
    }

    impl BinaryGenome for MockBits {
        fn bits(&self) -> &[bool] {
            &self.bits
        }

        fn bits_mut(&mut self) -> &mut [bool] {
            &mut self.bits
        }

        fn from_bits(bits: Vec<bool>) -> Result<Self, GenomeError> {
            Ok(Self { bits })
        }
    }

    #[test]
    fn test_default_distance() {
        let a = MockBits { bits: vec![true] };
        let b = MockBits { bits: vec![false] };
        assert_eq!(a.distance(&b), 0.0);
    }

    #[test]
    fn test_binary_genome_counts() {
        let genome = MockBits::from_bits(vec![true, false, true, true]).unwrap();
        assert_eq!(genome.dimension(), 4);
        assert_eq!(genome.count_ones(), 3);
        assert_eq!(genome.count_zeros(), 1);
    }
}
