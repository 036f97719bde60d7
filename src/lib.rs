//! Genetic-algorithm solver for the N-Queens problem.
//!
//! A candidate [`Board`] places one queen per column and stores the row of
//! each. Its fitness is the share of queens attacked by no other queen,
//! scaled to 0–100; 100 is a valid solution.
//!
//! Each [`Population`] is one generation, ranked best first. The top half
//! survives; the three best survivors are carried over unchanged and the
//! rest of the next generation is bred by single-point crossover with
//! per-column reset mutation. [`EvolutionDriver`] repeats this until a
//! solution appears or the generation budget in [`NQueensConfig`] runs out.
//!
//! ```
//! use nqueens_ga::{EvolutionDriver, NQueensConfig};
//!
//! let config = NQueensConfig::default()
//!     .with_board_size(6)
//!     .with_population_size(40)
//!     .with_max_generations(300)
//!     .with_seed(7);
//! let result = EvolutionDriver::solve(config).unwrap();
//! assert!(result.best_fitness <= 100.0);
//! assert_eq!(result.converged, result.best.is_solution());
//! ```
//!
//! The search is stochastic and may stall in a local optimum; a run that
//! ends without `converged` can simply be retried with another seed. Board
//! sizes 2 and 3 have no solution at all.
//!
//! # Features
//!
//! - `parallel`: build each generation's boards with rayon.
//! - `serde`: `Serialize`/`Deserialize` for boards, configs and results.

pub mod board;
pub mod config;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod random;
pub mod render;
pub mod runner;
pub mod selection;

pub use board::Board;
pub use config::NQueensConfig;
pub use error::{BoardError, ConfigError};
pub use operators::MutationRate;
pub use population::Population;
pub use runner::{DriverState, EvolutionDriver, Reporter, RunResult, Silent};
