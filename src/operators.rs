//! Breeding operators: single-point crossover with per-column reset mutation.
//!
//! Operators work on raw row encodings (`&[usize]`) and know nothing about
//! fitness; [`Board::offspring`](crate::Board::offspring) wraps them and
//! scores the child.
//!
//! # Mutation model
//!
//! Mutation is parameterized by the average number of columns examined per
//! mutation event, `M`. For every column a uniform integer in `[0, M]` is
//! drawn and the column is replaced by a fresh random row when the draw is
//! zero, giving a per-column probability of `1 / (M + 1)`.

use rand::Rng;

/// Per-column mutation rate, expressed as average trials per mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRate {
    avg_trials: u32,
}

impl MutationRate {
    /// Creates a rate of one expected mutation per `avg_trials` columns.
    ///
    /// Values below 1 are raised to 1.
    pub fn new(avg_trials: u32) -> Self {
        Self {
            avg_trials: avg_trials.max(1),
        }
    }

    /// Derives `M = round(1 / probability)`.
    ///
    /// `probability` is expected in `(0, 1]`; callers validate it first.
    pub fn from_probability(probability: f64) -> Self {
        Self::new((1.0 / probability).round() as u32)
    }

    /// The `M` parameter.
    pub fn avg_trials(&self) -> u32 {
        self.avg_trials
    }

    /// Effective per-column mutation probability, `1 / (M + 1)`.
    pub fn probability(&self) -> f64 {
        1.0 / (self.avg_trials as f64 + 1.0)
    }

    /// Draws once and reports whether a mutation fires.
    #[inline]
    pub fn fires<R: Rng>(&self, rng: &mut R) -> bool {
        rng.random_range(0..=self.avg_trials) == 0
    }
}

/// Draws a crossover point uniformly from `[0, board_size)`.
///
/// # Panics
/// Panics if `board_size` is zero.
pub fn crossover_point<R: Rng>(board_size: usize, rng: &mut R) -> usize {
    rng.random_range(0..board_size)
}

/// Returns `gene`, or a uniformly random row in `[0, board_size)` when the
/// mutation draw fires.
#[inline]
pub fn reset_mutation<R: Rng>(
    gene: usize,
    board_size: usize,
    rate: MutationRate,
    rng: &mut R,
) -> usize {
    if rate.fires(rng) {
        rng.random_range(0..board_size)
    } else {
        gene
    }
}

/// Single-point crossover with per-column reset mutation.
///
/// Columns `[0, k)` come from `parent_a` and `[k, n)` from `parent_b`,
/// where `k` is drawn uniformly from `[0, n)`. `k = 0` takes every column
/// from `parent_b`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent_a: &[usize],
    parent_b: &[usize],
    rate: MutationRate,
    rng: &mut R,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = crossover_point(n, rng);
    crossover_at(parent_a, parent_b, point, rate, rng)
}

/// Crossover at a fixed `point`; see [`single_point_crossover`].
///
/// A `point` past the end takes every column from `parent_a`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover_at<R: Rng>(
    parent_a: &[usize],
    parent_b: &[usize],
    point: usize,
    rate: MutationRate,
    rng: &mut R,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    let point = point.min(n);
    parent_a[..point]
        .iter()
        .chain(&parent_b[point..])
        .map(|&gene| reset_mutation(gene, n, rate, rng))
        .collect()
}
