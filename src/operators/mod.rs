//! Genetic operators
//!
//! This module provides roulette-wheel selection, single-point and blend
//! crossover, and bit-flip and random-addition mutation.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::selection::*;
    pub use super::traits::*;
}
