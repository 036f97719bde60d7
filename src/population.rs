//! A single generation of boards.
//!
//! A [`Population`] is built wholesale, either from random seeds or by
//! breeding the previous generation's survivors, then ranked once by
//! descending fitness. It is not modified afterwards.
//!
//! # Breeding scheme
//!
//! With `h = generation_size / 2` survivors `s[0..h]` from the previous
//! generation:
//!
//! 1. `s[0]`, `s[1]`, `s[2]` are copied forward unchanged (elitism).
//! 2. `s[0]` is crossed with each of `s[1..h]`.
//! 3. `s[1]` is crossed with each of `s[2..h]`.
//!
//! That is `3 + (h - 1) + (h - 2) = 2h` boards, and it over-samples the two
//! best survivors as parents. Convergence is fast but can stall in a local
//! optimum.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::board::Board;
use crate::operators::MutationRate;
use crate::random::{child_seeds, create_rng};
use crate::selection;

/// Survivors copied unchanged into the next generation.
pub const ELITE_COUNT: usize = 3;

/// One generation, ranked best first.
#[derive(Debug, Clone)]
pub struct Population {
    generation_size: usize,
    board_size: usize,
    members: Vec<Board>,
}

impl Population {
    /// Builds a generation of `generation_size` random boards.
    ///
    /// # Panics
    /// Panics if `generation_size < 2` or `board_size == 0`.
    pub fn initial<R: Rng>(generation_size: usize, board_size: usize, rng: &mut R) -> Self {
        Self::initial_with(generation_size, board_size, false, rng)
    }

    /// Breeds the next generation from `prior_survivors`.
    ///
    /// `prior_survivors` must hold at least `max(3, generation_size / 2)`
    /// boards, ranked best first. The produced generation has exactly
    /// `generation_size` members when `generation_size` is even.
    ///
    /// # Panics
    /// Panics if there are too few survivors for the breeding scheme.
    pub fn next<R: Rng>(
        generation_size: usize,
        board_size: usize,
        prior_survivors: &[Board],
        rate: MutationRate,
        rng: &mut R,
    ) -> Self {
        Self::next_with(generation_size, board_size, prior_survivors, rate, false, rng)
    }

    pub(crate) fn initial_with<R: Rng>(
        generation_size: usize,
        board_size: usize,
        parallel: bool,
        rng: &mut R,
    ) -> Self {
        assert!(
            generation_size >= 2,
            "generation_size must be at least 2, got {generation_size}"
        );
        assert!(board_size > 0, "board_size must be at least 1");

        let seeds = child_seeds(rng, generation_size);
        let members = build_boards(seeds, parallel, |seed| {
            Board::random(board_size, &mut create_rng(seed))
        });
        Self::ranked(generation_size, board_size, members)
    }

    pub(crate) fn next_with<R: Rng>(
        generation_size: usize,
        board_size: usize,
        prior_survivors: &[Board],
        rate: MutationRate,
        parallel: bool,
        rng: &mut R,
    ) -> Self {
        let members = breed(generation_size, prior_survivors, rate, parallel, rng);
        Self::ranked(generation_size, board_size, members)
    }

    fn ranked(generation_size: usize, board_size: usize, members: Vec<Board>) -> Self {
        Self {
            generation_size,
            board_size,
            members: selection::sort_by_fitness(members),
        }
    }

    pub fn generation_size(&self) -> usize {
        self.generation_size
    }

    /// Width of every board in this generation.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// All boards, best first.
    pub fn members(&self) -> &[Board] {
        &self.members
    }

    /// The fittest board.
    pub fn best(&self) -> &Board {
        &self.members[0]
    }

    pub fn best_fitness(&self) -> f64 {
        self.best().fitness()
    }

    /// The top `generation_size / 2` boards.
    pub fn survivors(&self) -> &[Board] {
        selection::truncate(&self.members)
    }
}

/// The unranked next generation: elites first, in survivor order, then
/// offspring in breeding-pair order.
pub(crate) fn breed<R: Rng>(
    generation_size: usize,
    prior_survivors: &[Board],
    rate: MutationRate,
    parallel: bool,
    rng: &mut R,
) -> Vec<Board> {
    let half = selection::survivor_count(generation_size);
    let required = half.max(ELITE_COUNT);
    assert!(
        prior_survivors.len() >= required,
        "breeding {generation_size} boards needs at least {required} survivors, got {}",
        prior_survivors.len()
    );

    let pairs = breeding_pairs(half);
    let jobs: Vec<((usize, usize), u64)> = pairs
        .iter()
        .copied()
        .zip(child_seeds(rng, pairs.len()))
        .collect();

    let mut members = Vec::with_capacity(ELITE_COUNT + jobs.len());
    members.extend_from_slice(&prior_survivors[..ELITE_COUNT]);
    members.extend(build_boards(jobs, parallel, |((a, b), seed)| {
        Board::offspring(
            &prior_survivors[a],
            &prior_survivors[b],
            rate,
            &mut create_rng(seed),
        )
    }));

    members
}

/// Parent index pairs for the non-elite part of a generation.
fn breeding_pairs(half: usize) -> Vec<(usize, usize)> {
    let from_first = (1..half).map(|i| (0, i));
    let from_second = (2..half).map(|i| (1, i));
    from_first.chain(from_second).collect()
}

#[cfg(feature = "parallel")]
fn build_boards<T, F>(jobs: Vec<T>, parallel: bool, make: F) -> Vec<Board>
where
    T: Send,
    F: Fn(T) -> Board + Send + Sync,
{
    if parallel {
        jobs.into_par_iter().map(make).collect()
    } else {
        jobs.into_iter().map(make).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn build_boards<T, F>(jobs: Vec<T>, _parallel: bool, make: F) -> Vec<Board>
where
    F: Fn(T) -> Board,
{
    jobs.into_iter().map(make).collect()
}
