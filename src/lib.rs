//! # roulette-evo
//!
//! A small generational genetic algorithm engine.
//!
//! One population of fixed size is evolved for a fixed number of generations:
//! evaluate, select parents by roulette wheel, recombine pairs, mutate, replace.
//! The genome kind is pluggable through [`algorithms::strategy::Strategy`];
//! bit vectors and single real values are provided.
//!
//! ## Core Concepts
//!
//! - **Fitness-proportionate selection**: parents are drawn with probability
//!   proportional to their (scaled) fitness
//! - **Fitness scaling**: objectives that can be negative are shifted to be
//!   strictly positive before selection
//! - **Reproducible runs**: every random draw comes from the caller's `Rng`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roulette_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = SimpleGA::builder()
//!     .population_size(50)
//!     .max_generations(1000)
//!     .strategy(BitVectorStrategy::new(7, CrossoverPoint::Random, 0.8, 0.1))
//!     .fitness(Knapsack::reference(15.0))
//!     .build()?
//!     .run(&mut rng)?;
//!
//! println!("{} -> {}", result.best_genome, result.best_fitness);
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::{KnapsackConfig, RunConfig, ScalarConfig};
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
