//! Command-line front end for the N-Queens genetic algorithm.
//!
//! ```bash
//! nqueens --queens 8 --population 100 --mutation 0.1 --max-generations 1000
//! RUST_LOG=nqueens_ga=debug nqueens -n 12 --seed 42
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nqueens_ga::render::{compact, Grid};
use nqueens_ga::{Board, EvolutionDriver, NQueensConfig, Reporter, RunResult};

#[derive(Debug, Parser)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens with a genetic algorithm", long_about = None)]
struct Cli {
    /// Number of queens (board width)
    #[arg(short = 'n', long, default_value_t = 8)]
    queens: usize,

    /// Boards per generation (even, at least 6)
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Probability of a column mutating, in (0, 1]
    #[arg(short, long, default_value_t = 0.1)]
    mutation: f64,

    /// Maximum number of generations to run
    #[arg(short = 'g', long, default_value_t = 1000)]
    max_generations: usize,

    /// Generations between progress updates
    #[arg(short, long, default_value_t = 100)]
    report_every: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Build boards on all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn config(&self) -> NQueensConfig {
        let config = NQueensConfig {
            board_size: self.queens,
            population_size: self.population,
            mutation_probability: self.mutation,
            max_generations: self.max_generations,
            report_period: self.report_every,
            parallel: self.parallel,
            seed: None,
        };
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Prints the starting board, periodic updates and the verdict to stdout.
struct Console;

impl Reporter for Console {
    fn on_start(&mut self, best: &Board) {
        println!("Best starting board (of the random population):");
        print!("{}", Grid(best));
        println!("Starting fitness: {}\n", best.fitness());
    }

    fn report(&mut self, generation: usize, best: &Board, best_fitness: f64) {
        println!("Generation {generation}, best board so far: {}", compact(best));
        print!("{}", Grid(best));
        println!("Fitness: {best_fitness}\n");
    }

    fn on_finish(&mut self, result: &RunResult) {
        println!("Generations done: {}", result.generations);
        if result.converged {
            println!("Success! Best achieved: {}%", result.best_fitness);
            println!("Solution: {}", compact(&result.best));
        } else {
            println!("Not quite. Best achieved: {}%", result.best_fitness);
            println!("The search can stall at a local maximum; try another seed or different parameters.");
            println!("Closest arrangement found: {}", compact(&result.best));
        }
        print!("{}", Grid(&result.best));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let driver = EvolutionDriver::new(cli.config()).context("invalid parameters")?;
    driver.run(&mut Console);
    Ok(())
}
