//! Run configuration
//!
//! File-loadable settings for the two reference problems. Every field has a
//! default, so an empty file reproduces the reference runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::simple_ga::{SimpleGA, SimpleGABuilder, SimpleGAConfig};
use crate::algorithms::strategy::{BitVectorStrategy, ScalarStrategy};
use crate::error::{ConfigError, EvoResult};
use crate::fitness::problems::{reference_items, Item, Knapsack, Quadratic, DEFAULT_PENALTY};
use crate::genome::bounds::Bounds;
use crate::operators::crossover::{BlendFallback, CrossoverPoint};

/// Top-level run configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,
    /// Fail on degenerate fitness instead of falling back
    pub strict_fitness: bool,
    pub knapsack: KnapsackConfig,
    pub scalar: ScalarConfig,
}

impl RunConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.knapsack.validate()?;
        self.scalar.validate()
    }
}

/// 0/1 knapsack run with bit-vector genomes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnapsackConfig {
    pub population_size: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub generations: usize,
    pub weight_limit: f64,
    pub penalty: f64,
    /// Fixed cut point, used when `random_point` is off
    pub crossover_point: usize,
    /// Draw a fresh cut point each generation
    pub random_point: bool,
    pub items: Vec<Item>,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            generations: 1000,
            weight_limit: 15.0,
            penalty: DEFAULT_PENALTY,
            crossover_point: 3,
            random_point: true,
            items: reference_items(),
        }
    }
}

impl KnapsackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_common(
            "knapsack",
            self.population_size,
            self.crossover_rate,
            self.mutation_rate,
            self.generations,
        )?;
        if self.items.is_empty() {
            return Err(ConfigError::Invalid(
                "knapsack: item table is empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.penalty) {
            return Err(ConfigError::Invalid(format!(
                "knapsack: penalty must be in [0, 1], got {}",
                self.penalty
            )));
        }
        Ok(())
    }

    pub fn ga_config(&self, strict_fitness: bool) -> SimpleGAConfig {
        SimpleGAConfig {
            population_size: self.population_size,
            max_generations: self.generations,
            strict_fitness,
        }
    }

    /// Crossover point mode selected by `random_point`
    pub fn point(&self) -> CrossoverPoint {
        if self.random_point {
            CrossoverPoint::Random
        } else {
            CrossoverPoint::Fixed(self.crossover_point)
        }
    }

    pub fn strategy(&self) -> BitVectorStrategy {
        BitVectorStrategy::new(
            self.items.len(),
            self.point(),
            self.crossover_rate,
            self.mutation_rate,
        )
    }

    pub fn problem(&self) -> Knapsack {
        Knapsack::new(self.items.clone(), self.weight_limit).with_penalty(self.penalty)
    }

    /// Build the engine; a fixed crossover point outside the genome fails here
    pub fn build(&self, strict_fitness: bool) -> EvoResult<SimpleGA<BitVectorStrategy, Knapsack>> {
        self.validate()?;
        SimpleGABuilder::new()
            .config(self.ga_config(strict_fitness))
            .strategy(self.strategy())
            .fitness(self.problem())
            .build()
    }
}

/// Single-variable maximization of f(x) = -x² + 2x
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalarConfig {
    pub population_size: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub generations: usize,
    pub init_min: f64,
    pub init_max: f64,
    pub alpha: f64,
    pub blend_fallback: BlendFallback,
}

impl Default for ScalarConfig {
    fn default() -> Self {
        Self {
            population_size: 6,
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            generations: 1000,
            init_min: 0.0,
            init_max: 2.0,
            alpha: 0.5,
            blend_fallback: BlendFallback::Zero,
        }
    }
}

impl ScalarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_common(
            "scalar",
            self.population_size,
            self.crossover_rate,
            self.mutation_rate,
            self.generations,
        )?;
        if !(self.init_min.is_finite() && self.init_max.is_finite()) || self.init_min > self.init_max
        {
            return Err(ConfigError::Invalid(format!(
                "scalar: init range [{}, {}] is not a finite interval",
                self.init_min, self.init_max
            )));
        }
        Ok(())
    }

    pub fn ga_config(&self, strict_fitness: bool) -> SimpleGAConfig {
        SimpleGAConfig {
            population_size: self.population_size,
            max_generations: self.generations,
            strict_fitness,
        }
    }

    pub fn strategy(&self) -> ScalarStrategy {
        ScalarStrategy::new(
            Bounds::new(self.init_min, self.init_max),
            self.crossover_rate,
            self.mutation_rate,
        )
        .with_alpha(self.alpha)
        .with_fallback(self.blend_fallback)
    }

    pub fn build(&self, strict_fitness: bool) -> EvoResult<SimpleGA<ScalarStrategy, Quadratic>> {
        self.validate()?;
        SimpleGABuilder::new()
            .config(self.ga_config(strict_fitness))
            .strategy(self.strategy())
            .fitness(Quadratic::new())
            .build()
    }
}

fn validate_common(
    section: &str,
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    generations: usize,
) -> Result<(), ConfigError> {
    if population_size < 2 {
        return Err(ConfigError::Invalid(format!(
            "{}: population_size must be at least 2",
            section
        )));
    }
    if generations == 0 {
        return Err(ConfigError::Invalid(format!(
            "{}: generations must be positive",
            section
        )));
    }
    for (name, rate) in [
        ("crossover_rate", crossover_rate),
        ("mutation_rate", mutation_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Invalid(format!(
                "{}: {} must be in [0, 1], got {}",
                section, name, rate
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvolutionError, OperatorError};

    #[test]
    fn test_empty_document_gives_reference_defaults() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.knapsack.population_size, 50);
        assert_eq!(config.knapsack.items.len(), 7);
        assert_eq!(config.knapsack.crossover_point, 3);
        assert!(config.knapsack.random_point);
        assert_eq!(config.knapsack.point(), CrossoverPoint::Random);
        assert_eq!(config.scalar.population_size, 6);
        assert_eq!(config.scalar.mutation_rate, 0.05);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_document_overrides() {
        let config = RunConfig::from_toml_str(
            r#"
            seed = 42

            [knapsack]
            generations = 200
            crossover_point = 4
            random_point = false

            [scalar]
            blend_fallback = "copy_parents"
            init_min = -1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.knapsack.generations, 200);
        assert_eq!(config.knapsack.point(), CrossoverPoint::Fixed(4));
        assert_eq!(config.knapsack.mutation_rate, 0.1);
        assert_eq!(config.scalar.blend_fallback, BlendFallback::CopyParents);
        assert_eq!(config.scalar.init_min, -1.0);
    }

    #[test]
    fn test_custom_items_accept_integers() {
        let config = RunConfig::from_toml_str(
            r#"
            [knapsack]
            weight_limit = 4
            items = [
                { value = 3, weight = 2 },
                { value = 4, weight = 3 },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(config.knapsack.items, vec![Item::new(3.0, 2.0), Item::new(4.0, 3.0)]);
        assert_eq!(config.knapsack.problem().num_items(), 2);
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let err = RunConfig::from_toml_str("[knapsack]\nmutation_rate = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("mutation_rate"));
    }

    #[test]
    fn test_single_individual_population_rejected() {
        let err = RunConfig::from_toml_str("[scalar]\npopulation_size = 1\n").unwrap_err();
        assert!(err.to_string().contains("at least 2"));

        let config = KnapsackConfig {
            population_size: 2,
            ..KnapsackConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.build(false).is_ok());
    }

    #[test]
    fn test_fixed_point_ignored_in_random_mode() {
        let config = KnapsackConfig {
            crossover_point: 7,
            ..KnapsackConfig::default()
        };
        assert_eq!(config.point(), CrossoverPoint::Random);
        assert!(config.build(false).is_ok());
    }

    #[test]
    fn test_inverted_init_range_rejected() {
        let err = RunConfig::from_toml_str("[scalar]\ninit_min = 3.0\ninit_max = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = RunConfig::from_toml_str("[knapsack\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_point_fails_at_build() {
        let config = KnapsackConfig {
            crossover_point: 7,
            random_point: false,
            ..KnapsackConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.build(false),
            Err(EvolutionError::Operator(OperatorError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = RunConfig::default();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(RunConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_builds_both_engines() {
        let config = RunConfig::default();
        let knapsack = config.knapsack.build(false).unwrap();
        assert_eq!(knapsack.config().population_size, 50);
        assert_eq!(knapsack.strategy().length(), 7);

        let scalar = config.scalar.build(true).unwrap();
        assert!(scalar.config().strict_fitness);
        assert_eq!(scalar.strategy().bounds(), &Bounds::new(0.0, 2.0));
    }
}
