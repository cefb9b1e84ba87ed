//! Evolutionary algorithms
//!
//! This module provides the genome strategies and the generational engine.

pub mod simple_ga;
pub mod strategy;

pub mod prelude {
    pub use super::simple_ga::*;
    pub use super::strategy::*;
}
