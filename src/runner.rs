//! Generation loop.
//!
//! [`EvolutionDriver`] holds exactly one [`Population`] at a time and
//! replaces it with a generation bred from its survivors until a board with
//! no attacking queens appears or the generation budget runs out.
//!
//! ```text
//! INITIALIZED ──step──▶ RUNNING ──step──▶ … ──▶ CONVERGED | EXHAUSTED
//! ```
//!
//! Board sizes 2 and 3 have no solution; such runs always end EXHAUSTED,
//! exactly like a run that stagnates in a local optimum.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::NQueensConfig;
use crate::error::ConfigError;
use crate::operators::MutationRate;
use crate::population::Population;
use crate::random::rng_from;

/// Lifecycle of an [`EvolutionDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// The random starting generation exists; no breeding has happened.
    Initialized,
    /// At least one generation has been bred and no stop condition holds.
    Running,
    /// The best board has fitness 100.
    Converged,
    /// The generation budget was used up without a solution.
    Exhausted,
}

impl DriverState {
    /// `true` for [`Converged`](Self::Converged) and [`Exhausted`](Self::Exhausted).
    pub fn is_terminal(self) -> bool {
        matches!(self, DriverState::Converged | DriverState::Exhausted)
    }
}

/// Receives progress from the driver. Has no effect on the search.
///
/// Closures `FnMut(usize, &Board, f64)` implement this trait and receive
/// the periodic reports only.
pub trait Reporter {
    /// Called once with the best board of the random starting generation.
    fn on_start(&mut self, _best: &Board) {}

    /// Called every `report_period` generations.
    fn report(&mut self, generation: usize, best: &Board, best_fitness: f64);

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &RunResult) {}
}

impl<F> Reporter for F
where
    F: FnMut(usize, &Board, f64),
{
    fn report(&mut self, generation: usize, best: &Board, best_fitness: f64) {
        self(generation, best, best_fitness)
    }
}

/// A [`Reporter`] that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _generation: usize, _best: &Board, _best_fitness: f64) {}
}

/// Result of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best board of the final generation.
    pub best: Board,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Generations bred after the random starting generation.
    pub generations: usize,

    /// Whether `best` is a valid N-Queens solution.
    pub converged: bool,

    /// Best fitness of the starting generation followed by that of every
    /// bred generation; `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

impl RunResult {
    /// Row of the queen in each column of the best board.
    pub fn best_columns(&self) -> &[usize] {
        self.best.columns()
    }
}

/// Drives the evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_ga::{EvolutionDriver, NQueensConfig, Silent};
///
/// let config = NQueensConfig::default()
///     .with_board_size(4)
///     .with_population_size(20)
///     .with_max_generations(500)
///     .with_seed(42);
/// let result = EvolutionDriver::new(config)?.run(&mut Silent);
/// assert_eq!(result.best_columns().len(), 4);
/// # Ok::<(), nqueens_ga::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct EvolutionDriver<R: Rng = StdRng> {
    config: NQueensConfig,
    rate: MutationRate,
    rng: R,
    population: Population,
    generation: usize,
    state: DriverState,
    fitness_history: Vec<f64>,
}

impl EvolutionDriver<StdRng> {
    /// Validates `config` and builds the starting generation, seeding from
    /// `config.seed` or OS entropy.
    pub fn new(config: NQueensConfig) -> Result<Self, ConfigError> {
        let rng = rng_from(config.seed);
        Self::with_rng(config, rng)
    }

    /// Runs `config` to completion without reporting.
    pub fn solve(config: NQueensConfig) -> Result<RunResult, ConfigError> {
        Ok(Self::new(config)?.run(&mut Silent))
    }
}

impl<R: Rng> EvolutionDriver<R> {
    /// Validates `config` and builds the starting generation from `rng`.
    ///
    /// `config.seed` is ignored; `rng` is the only random source.
    pub fn with_rng(config: NQueensConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let population = Population::initial_with(
            config.population_size,
            config.board_size,
            config.parallel,
            &mut rng,
        );
        let fitness_history = vec![population.best_fitness()];

        Ok(Self {
            rate: config.mutation_rate(),
            config,
            rng,
            population,
            generation: 0,
            state: DriverState::Initialized,
            fitness_history,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current generation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn config(&self) -> &NQueensConfig {
        &self.config
    }

    /// Advances the state machine by at most one generation.
    ///
    /// A terminal state is returned unchanged. A starting generation that
    /// already contains a solution converges without breeding.
    pub fn step(&mut self) -> DriverState {
        if self.state.is_terminal() {
            return self.state;
        }
        if let Some(done) = self.stop_condition() {
            return self.finish(done);
        }

        self.state = DriverState::Running;
        self.generation += 1;
        self.population = Population::next_with(
            self.config.population_size,
            self.config.board_size,
            self.population.survivors(),
            self.rate,
            self.config.parallel,
            &mut self.rng,
        );

        let best_fitness = self.population.best_fitness();
        self.fitness_history.push(best_fitness);
        debug!(generation = self.generation, best_fitness, "generation bred");

        match self.stop_condition() {
            Some(done) => self.finish(done),
            None => self.state,
        }
    }

    /// Steps until a terminal state, reporting every `report_period`
    /// generations.
    pub fn run<P: Reporter + ?Sized>(mut self, reporter: &mut P) -> RunResult {
        info!(
            board_size = self.config.board_size,
            population_size = self.config.population_size,
            avg_trials_per_mutation = self.rate.avg_trials(),
            max_generations = self.config.max_generations,
            "starting evolution"
        );
        reporter.on_start(self.population.best());

        loop {
            let before = self.generation;
            let state = self.step();
            if self.generation != before && self.generation % self.config.report_period == 0 {
                let best = self.population.best();
                reporter.report(self.generation, best, best.fitness());
            }
            if state.is_terminal() {
                break;
            }
        }

        let result = self.into_result();
        reporter.on_finish(&result);
        result
    }

    /// Snapshot of the current best board and history.
    pub fn into_result(self) -> RunResult {
        let best = self.population.best().clone();
        RunResult {
            best_fitness: best.fitness(),
            converged: best.is_solution(),
            best,
            generations: self.generation,
            fitness_history: self.fitness_history,
        }
    }

    fn stop_condition(&self) -> Option<DriverState> {
        if self.population.best().is_solution() {
            Some(DriverState::Converged)
        } else if self.generation >= self.config.max_generations {
            Some(DriverState::Exhausted)
        } else {
            None
        }
    }

    fn finish(&mut self, state: DriverState) -> DriverState {
        self.state = state;
        info!(
            generations = self.generation,
            best_fitness = self.population.best_fitness(),
            converged = (state == DriverState::Converged),
            "evolution finished"
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn four_queens() -> NQueensConfig {
        NQueensConfig::default()
            .with_board_size(4)
            .with_population_size(20)
            .with_mutation_probability(0.1)
            .with_max_generations(500)
    }

    #[test]
    fn test_four_queens_convergence() {
        let trials = 100;
        let converged = (0..trials)
            .filter(|&seed| {
                let result = EvolutionDriver::solve(four_queens().with_seed(seed)).unwrap();
                result.converged
            })
            .count();
        assert!(
            converged >= 95,
            "expected at least 95/{trials} runs to converge, got {converged}"
        );
    }

    #[test]
    fn test_converged_result_is_solution() {
        let result = EvolutionDriver::solve(four_queens().with_seed(1)).unwrap();
        if result.converged {
            assert_eq!(result.best_fitness, 100.0);
            assert_eq!(result.best.attacking_pairs(), 0);
            assert!(result.generations <= 500);
        } else {
            assert_eq!(result.generations, 500);
        }
    }

    #[test]
    fn test_unsolvable_sizes_exhaust() {
        for n in [2, 3] {
            let config = NQueensConfig::default()
                .with_board_size(n)
                .with_population_size(10)
                .with_max_generations(40)
                .with_seed(7);
            let result = EvolutionDriver::solve(config).unwrap();
            assert!(!result.converged);
            assert_eq!(result.generations, 40);
            assert!(result.best_fitness < 100.0);
            assert_eq!(result.fitness_history.len(), 41);
        }
    }

    #[test]
    fn test_single_queen_converges_immediately() {
        let config = NQueensConfig::default()
            .with_board_size(1)
            .with_population_size(6)
            .with_seed(0);
        let result = EvolutionDriver::solve(config).unwrap();
        assert!(result.converged);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_columns(), &[0]);
    }

    #[test]
    fn test_huge_budget_converging_early() {
        for budget in [1usize << 44, usize::MAX] {
            let config = NQueensConfig::default()
                .with_board_size(1)
                .with_population_size(6)
                .with_max_generations(budget)
                .with_seed(0);
            let result = EvolutionDriver::solve(config).unwrap();
            assert!(result.converged);
            assert_eq!(result.generations, 0);
            assert_eq!(result.fitness_history, vec![100.0]);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = NQueensConfig::default().with_population_size(7);
        assert_eq!(
            EvolutionDriver::new(config).unwrap_err(),
            ConfigError::PopulationOdd(7)
        );
    }

    #[test]
    fn test_state_machine() {
        let config = NQueensConfig::default()
            .with_board_size(3)
            .with_population_size(6)
            .with_max_generations(2);
        let mut driver = EvolutionDriver::with_rng(config, create_rng(42)).unwrap();
        assert_eq!(driver.state(), DriverState::Initialized);
        assert_eq!(driver.generation(), 0);

        assert_eq!(driver.step(), DriverState::Running);
        assert_eq!(driver.generation(), 1);
        assert_eq!(driver.step(), DriverState::Exhausted);
        assert_eq!(driver.generation(), 2);

        // Terminal states are sticky.
        assert_eq!(driver.step(), DriverState::Exhausted);
        assert_eq!(driver.generation(), 2);
    }

    #[test]
    fn test_reports_every_period() {
        let config = NQueensConfig::default()
            .with_board_size(3)
            .with_population_size(8)
            .with_max_generations(20)
            .with_report_period(5)
            .with_seed(3);

        let mut seen = Vec::new();
        let mut reporter = |generation: usize, best: &Board, fitness: f64| {
            assert_eq!(best.fitness(), fitness);
            seen.push(generation);
        };
        let result = EvolutionDriver::new(config).unwrap().run(&mut reporter);

        assert_eq!(result.generations, 20);
        assert_eq!(seen, vec![5, 10, 15, 20]);
    }

    #[test]
    fn test_reporter_hooks() {
        #[derive(Default)]
        struct Recorder {
            started: usize,
            reports: usize,
            finished: Option<usize>,
        }

        impl Reporter for Recorder {
            fn on_start(&mut self, best: &Board) {
                assert_eq!(best.size(), 3);
                self.started += 1;
            }
            fn report(&mut self, _generation: usize, _best: &Board, _best_fitness: f64) {
                self.reports += 1;
            }
            fn on_finish(&mut self, result: &RunResult) {
                self.finished = Some(result.generations);
            }
        }

        let config = NQueensConfig::default()
            .with_board_size(3)
            .with_population_size(6)
            .with_max_generations(9)
            .with_report_period(3)
            .with_seed(1);
        let mut recorder = Recorder::default();
        EvolutionDriver::new(config).unwrap().run(&mut recorder);

        assert_eq!(recorder.started, 1);
        assert_eq!(recorder.reports, 3);
        assert_eq!(recorder.finished, Some(9));
    }

    #[test]
    fn test_fitness_history_never_decreases() {
        let config = NQueensConfig::default()
            .with_board_size(8)
            .with_population_size(30)
            .with_max_generations(200)
            .with_seed(42);
        let result = EvolutionDriver::solve(config).unwrap();

        assert_eq!(result.fitness_history.len(), result.generations + 1);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness regressed with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.fitness_history.last().copied(), Some(result.best_fitness));
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let config = NQueensConfig::default()
            .with_board_size(6)
            .with_population_size(16)
            .with_max_generations(100)
            .with_seed(2024);
        let a = EvolutionDriver::solve(config.clone()).unwrap();
        let b = EvolutionDriver::solve(config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_same_trajectory() {
        let config = NQueensConfig::default()
            .with_board_size(8)
            .with_population_size(40)
            .with_max_generations(100)
            .with_seed(5);
        let seq = EvolutionDriver::solve(config.clone()).unwrap();
        let par = EvolutionDriver::solve(config.with_parallel(true)).unwrap();
        assert_eq!(seq.fitness_history, par.fitness_history);
        assert_eq!(seq.best, par.best);
    }
}
