//! Candidate solutions.
//!
//! A [`Board`] is one queen per column, with the queen's row stored per
//! column. Fitness is computed once at construction and the board is never
//! mutated afterwards, so the two can never disagree.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::BoardError;
use crate::fitness;
use crate::operators::{self, MutationRate};

/// One candidate placement of `n` queens on an `n × n` board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    columns: Vec<usize>,
    safe_queens: usize,
    fitness: f64,
}

impl Board {
    /// Seed construction: every column gets a uniformly random row.
    ///
    /// # Panics
    /// Panics if `board_size` is zero.
    pub fn random<R: Rng>(board_size: usize, rng: &mut R) -> Self {
        assert!(board_size > 0, "board_size must be at least 1");
        let columns = (0..board_size)
            .map(|_| rng.random_range(0..board_size))
            .collect();
        Self::scored(columns)
    }

    /// Offspring construction: single-point crossover of the two parents,
    /// with each column independently subject to reset mutation.
    ///
    /// # Panics
    /// Panics if the parents have different sizes.
    pub fn offspring<R: Rng>(
        parent_a: &Board,
        parent_b: &Board,
        rate: MutationRate,
        rng: &mut R,
    ) -> Self {
        let columns =
            operators::single_point_crossover(&parent_a.columns, &parent_b.columns, rate, rng);
        Self::scored(columns)
    }

    /// Builds a board from an explicit encoding.
    pub fn from_columns(columns: Vec<usize>) -> Result<Self, BoardError> {
        let size = columns.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((column, &row)) = columns.iter().enumerate().find(|(_, &r)| r >= size) {
            return Err(BoardError::RowOutOfRange { column, row, size });
        }
        Ok(Self::scored(columns))
    }

    fn scored(columns: Vec<usize>) -> Self {
        let safe_queens = fitness::safe_queen_count(&columns);
        let fitness = fitness::score(safe_queens, columns.len());
        Self {
            columns,
            safe_queens,
            fitness,
        }
    }

    /// Row of the queen in each column.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Board width, equal to the number of queens.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Fitness in `[0, 100]`.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn safe_queens(&self) -> usize {
        self.safe_queens
    }

    /// Number of attacking queen pairs. Recomputed on each call.
    pub fn attacking_pairs(&self) -> usize {
        fitness::attacking_pairs(&self.columns)
    }

    /// `true` when no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.safe_queens == self.columns.len()
    }

    /// Selection order: higher fitness first.
    pub fn cmp_by_fitness_desc(&self, other: &Board) -> Ordering {
        other.fitness.total_cmp(&self.fitness)
    }
}
