//! Truncation selection.
//!
//! A generation is ranked once, best first, and the top half survives to
//! parent the next generation. Ranking sorts an index list keyed by fitness
//! and then moves each board into place exactly once.

use crate::board::Board;

/// Indices of `boards` ordered by descending fitness.
///
/// The sort is stable: equal-fitness boards keep their relative order.
pub fn rank_by_fitness(boards: &[Board]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boards.len()).collect();
    order.sort_by(|&a, &b| boards[a].cmp_by_fitness_desc(&boards[b]));
    order
}

/// Reorders `boards` by descending fitness.
pub fn sort_by_fitness(boards: Vec<Board>) -> Vec<Board> {
    let order = rank_by_fitness(&boards);
    let mut slots: Vec<Option<Board>> = boards.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Number of survivors kept from a generation of `generation_size`.
pub fn survivor_count(generation_size: usize) -> usize {
    generation_size / 2
}

/// The surviving prefix of a sorted generation.
pub fn truncate(sorted: &[Board]) -> &[Board] {
    &sorted[..survivor_count(sorted.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cols: &[usize]) -> Board {
        Board::from_columns(cols.to_vec()).unwrap()
    }

    #[test]
    fn test_rank_by_fitness() {
        let boards = vec![
            board(&[0, 0, 0, 0]), // 0
            board(&[1, 3, 0, 2]), // 100
            board(&[0, 0, 3, 1]), // 50
        ];
        assert_eq!(rank_by_fitness(&boards), vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let boards = vec![
            board(&[0, 0, 0, 0]),
            board(&[1, 1, 1, 1]),
            board(&[2, 2, 2, 2]),
        ];
        assert_eq!(rank_by_fitness(&boards), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_fitness_moves_boards() {
        let boards = vec![
            board(&[0, 0, 0, 0]),
            board(&[0, 0, 3, 1]),
            board(&[1, 3, 0, 2]),
        ];
        let sorted = sort_by_fitness(boards);
        let fits: Vec<f64> = sorted.iter().map(Board::fitness).collect();
        assert_eq!(fits, vec![100.0, 50.0, 0.0]);
        assert_eq!(sorted[0].columns(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_truncate_half() {
        let boards: Vec<Board> = (0..7).map(|r| board(&[r % 2, 0])).collect();
        assert_eq!(survivor_count(7), 3);
        assert_eq!(truncate(&boards).len(), 3);
        assert_eq!(survivor_count(20), 10);
    }
}
