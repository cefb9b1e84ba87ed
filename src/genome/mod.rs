//! Genome abstractions and implementations
//!
//! This module provides the core `EvolutionaryGenome` trait and the two built-in
//! genome kinds: fixed-length bit vectors and single real values.

pub mod bit_string;
pub mod bounds;
pub mod scalar;
pub mod traits;

pub mod prelude {
    pub use super::bit_string::*;
    pub use super::bounds::*;
    pub use super::scalar::*;
    pub use super::traits::*;
}
