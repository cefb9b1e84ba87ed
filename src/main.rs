use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roulette_evo::prelude::*;

#[derive(Parser)]
#[command(name = "roulette-evo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the 0/1 knapsack problem with bit-vector genomes
    Knapsack(RunArgs),
    /// Maximize f(x) = -x² + 2x with single real-valued genomes
    Scalar(RunArgs),
    /// Print the default run configuration as TOML
    Config,
}

#[derive(Args)]
struct RunArgs {
    /// Run configuration file (TOML); built-in defaults when absent
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the random source; entropy when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the generation budget
    #[arg(short, long)]
    generations: Option<usize>,

    /// Fail on a degenerate fitness vector instead of falling back
    #[arg(long)]
    strict: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn load(&self) -> anyhow::Result<RunConfig> {
        match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => Ok(RunConfig::default()),
        }
    }

    fn rng(&self, config: &RunConfig) -> StdRng {
        match self.seed.or(config.seed) {
            Some(seed) => {
                info!(seed, "using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Knapsack(args) => {
            let config = args.load()?;
            let mut knapsack = config.knapsack.clone();
            if let Some(generations) = args.generations {
                knapsack.generations = generations;
            }
            let ga = knapsack.build(args.strict || config.strict_fitness)?;
            let result = ga.run(&mut args.rng(&config))?;
            let problem = ga.fitness();
            if !args.json {
                println!(
                    "weight: {} / {}",
                    problem.total_weight(&result.best_genome),
                    problem.weight_limit()
                );
            }
            report(&result, args.json)
        }
        Command::Scalar(args) => {
            let config = args.load()?;
            let mut scalar = config.scalar.clone();
            if let Some(generations) = args.generations {
                scalar.generations = generations;
            }
            let ga = scalar.build(args.strict || config.strict_fitness)?;
            let result = ga.run(&mut args.rng(&config))?;
            report(&result, args.json)
        }
        Command::Config => {
            print!("{}", RunConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn report<G>(result: &EvolutionResult<G>, json: bool) -> anyhow::Result<()>
where
    G: EvolutionaryGenome + Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("best genome: {}", result.best_genome);
        println!("best fitness: {}", result.best_fitness);
        println!("best score: {}", result.best_score);
        println!("generations: {}", result.generations);
        println!("{}", result.stats.summary());
    }
    Ok(())
}
