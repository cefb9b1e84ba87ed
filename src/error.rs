//! Error types for roulette-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Length mismatch between two bit-vector genomes
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Slice position outside the genome
    #[error("Position {position} is outside a genome of length {length}")]
    OutOfRange { position: usize, length: usize },
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// An operator parameter is outside its legal range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(#[from] GenomeError),
}

/// Error type for loading run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for a run configuration
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its legal range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Run configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A generation's fitness vector summed to zero
    #[error("Degenerate fitness vector in generation {generation}: fitness sums to zero")]
    DegenerateFitness { generation: usize },

    /// Stepped past the generation budget
    #[error("Generation budget of {generations} already spent")]
    BudgetExhausted { generations: usize },

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
