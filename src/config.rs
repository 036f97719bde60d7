//! Solver configuration.
//!
//! [`NQueensConfig`] holds every parameter a caller supplies to the
//! evolutionary loop.

use crate::error::ConfigError;
use crate::operators::MutationRate;
use crate::population::ELITE_COUNT;

/// Smallest population the breeding scheme can sustain: three survivors.
pub const MIN_POPULATION_SIZE: usize = 2 * ELITE_COUNT;

/// Configuration for the N-Queens genetic algorithm.
///
/// # Defaults
///
/// ```
/// use nqueens_ga::NQueensConfig;
///
/// let config = NQueensConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::NQueensConfig;
///
/// let config = NQueensConfig::default()
///     .with_board_size(12)
///     .with_population_size(200)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NQueensConfig {
    /// Board width and number of queens.
    pub board_size: usize,

    /// Boards per generation. Must be even and at least
    /// [`MIN_POPULATION_SIZE`].
    pub population_size: usize,

    /// Per-column mutation probability in `(0, 1]`.
    ///
    /// Converted to an average trials-per-mutation parameter
    /// `M = round(1 / p)`; see [`MutationRate`].
    pub mutation_probability: f64,

    /// Generation budget.
    pub max_generations: usize,

    /// Generations between progress reports.
    pub report_period: usize,

    /// Whether to build boards in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled. Results are the
    /// same either way for a given seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for NQueensConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            mutation_probability: 0.1,
            max_generations: 1000,
            report_period: 100,
            parallel: false,
            seed: None,
        }
    }
}

impl NQueensConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-column mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the reporting period.
    pub fn with_report_period(mut self, n: usize) -> Self {
        self.report_period = n;
        self
    }

    /// Enables or disables parallel board construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mutation rate derived from [`mutation_probability`](Self::mutation_probability).
    pub fn mutation_rate(&self) -> MutationRate {
        MutationRate::from_probability(self.mutation_probability)
    }

    /// The `M` parameter: `round(1 / mutation_probability)`.
    pub fn avg_trials_per_mutation(&self) -> u32 {
        self.mutation_rate().avg_trials()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationOdd(self.population_size));
        }
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
                min: MIN_POPULATION_SIZE,
            });
        }
        // Also rejects NaN.
        if !(self.mutation_probability > 0.0 && self.mutation_probability <= 1.0) {
            return Err(ConfigError::MutationProbability(self.mutation_probability));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::MaxGenerations);
        }
        if self.report_period == 0 {
            return Err(ConfigError::ReportPeriod);
        }
        Ok(())
    }
}
