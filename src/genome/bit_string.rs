//! Bit string genome
//!
//! This module provides a fixed-length bit string genome type for combinatorial
//! problems such as 0/1 item selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::traits::{BinaryGenome, EvolutionaryGenome};

/// Fixed-length bit string genome
///
/// Bit `i` states whether decision item `i` is taken. The length never changes
/// once a population has been initialized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    /// The bits of this genome
    bits: Vec<bool>,
}

impl BitString {
    /// Create a new bit string with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros bit string of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones bit string of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Draw every bit independently with probability 1/2
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.gen()).collect();
        Self { bits }
    }

    /// Get the length of the bit string
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bit string is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Set a specific bit
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Flip a specific bit
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Indices of the set bits
    pub fn ones_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
    }

    /// Split into head `[0, position)` and tail `[position, len)`
    pub fn split_at(&self, position: usize) -> Result<(&[bool], &[bool]), GenomeError> {
        if position > self.bits.len() {
            return Err(GenomeError::OutOfRange {
                position,
                length: self.bits.len(),
            });
        }
        Ok(self.bits.split_at(position))
    }

    /// Concatenate a head and a tail into a new bit string
    pub fn concat(head: &[bool], tail: &[bool]) -> Self {
        let mut bits = Vec::with_capacity(head.len() + tail.len());
        bits.extend_from_slice(head);
        bits.extend_from_slice(tail);
        Self { bits }
    }

    /// Hamming distance to another bit string
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl EvolutionaryGenome for BitString {
    type Allele = bool;

    fn dimension(&self) -> usize {
        self.bits.len()
    }

    fn distance(&self, other: &Self) -> f64 {
        self.hamming_distance(other) as f64
    }
}

impl BinaryGenome for BitString {
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

impl std::ops::Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl<const N: usize> From<[bool; N]> for BitString {
    fn from(arr: [bool; N]) -> Self {
        Self { bits: arr.to_vec() }
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_string_zeros_and_ones() {
        let zeros = BitString::zeros(5);
        assert_eq!(zeros.len(), 5);
        assert_eq!(zeros.count_ones(), 0);

        let ones = BitString::ones(5);
        assert_eq!(ones.count_ones(), 5);
        assert_eq!(ones.count_zeros(), 0);
    }

    #[test]
    fn test_bit_string_random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let bs = BitString::random(7, &mut rng);
        assert_eq!(bs.len(), 7);
        assert_eq!(bs.dimension(), 7);
    }

    #[test]
    fn test_bit_string_get_set_flip() {
        let mut bs = BitString::zeros(3);
        assert_eq!(bs.get(0), Some(false));
        assert_eq!(bs.get(3), None);

        bs.set(1, true);
        assert_eq!(bs.get(1), Some(true));

        bs.flip(1);
        bs.flip(2);
        assert_eq!(bs.bits(), &[false, false, true]);
    }

    #[test]
    fn test_bit_string_split_and_concat() {
        let bs = BitString::new(vec![true, false, true, true, false]);
        let (head, tail) = bs.split_at(2).unwrap();
        assert_eq!(head, &[true, false]);
        assert_eq!(tail, &[true, true, false]);

        let joined = BitString::concat(head, tail);
        assert_eq!(joined, bs);
    }

    #[test]
    fn test_bit_string_split_out_of_range() {
        let bs = BitString::zeros(3);
        assert_eq!(
            bs.split_at(4),
            Err(GenomeError::OutOfRange {
                position: 4,
                length: 3
            })
        );
    }

    #[test]
    fn test_bit_string_ones_indices() {
        let bs: BitString = [true, false, false, true].into();
        assert_eq!(bs.ones_indices().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_bit_string_hamming_distance() {
        let bs1 = BitString::new(vec![true, false, true, false]);
        let bs2 = BitString::new(vec![true, true, false, false]);
        assert_eq!(bs1.hamming_distance(&bs2), 2);
        assert_eq!(bs1.distance(&bs2), 2.0);
    }

    #[test]
    fn test_bit_string_display() {
        let bs = BitString::new(vec![true, false, true, true]);
        assert_eq!(format!("{}", bs), "1011");
    }

    #[test]
    fn test_bit_string_serialization() {
        let bs = BitString::new(vec![true, false, true]);
        let serialized = serde_json::to_string(&bs).unwrap();
        let deserialized: BitString = serde_json::from_str(&serialized).unwrap();
        assert_eq!(bs, deserialized);
    }
}
