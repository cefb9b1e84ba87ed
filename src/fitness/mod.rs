//! Fitness evaluation
//!
//! This module provides the objective abstraction, the per-generation scaling
//! policies, and the two reference objectives.

pub mod evaluator;
pub mod problems;
pub mod traits;

pub mod prelude {
    pub use super::evaluator::*;
    pub use super::problems::*;
    pub use super::traits::*;
}
