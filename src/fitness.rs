//! Conflict counting and fitness scoring.
//!
//! A board is encoded as `columns[c] = row of the queen in column c`.
//! Two queens attack each other when they share a row or a diagonal;
//! columns are distinct by construction.
//!
//! All functions are pure and O(n²) in the number of queens.

/// Fitness of a fully non-attacking arrangement.
pub const PERFECT_FITNESS: f64 = 100.0;

/// Returns `true` if the queens in columns `i` and `j` attack each other.
///
/// # Panics
/// Panics if `i` or `j` is out of bounds.
#[inline]
pub fn conflicts(columns: &[usize], i: usize, j: usize) -> bool {
    let (ri, rj) = (columns[i], columns[j]);
    ri == rj || i.abs_diff(j) == ri.abs_diff(rj)
}

/// Returns `true` if the queen in column `i` attacks no other queen.
pub fn is_safe(columns: &[usize], i: usize) -> bool {
    (0..columns.len()).all(|j| j == i || !conflicts(columns, i, j))
}

/// Number of queens that attack no other queen.
pub fn safe_queen_count(columns: &[usize]) -> usize {
    (0..columns.len()).filter(|&i| is_safe(columns, i)).count()
}

/// Number of unordered queen pairs that attack each other.
///
/// Zero exactly when [`safe_queen_count`] equals the number of queens.
pub fn attacking_pairs(columns: &[usize]) -> usize {
    let n = columns.len();
    (0..n)
        .map(|i| (i + 1..n).filter(|&j| conflicts(columns, i, j)).count())
        .sum()
}

/// Scales a safe-queen count to the 0–100 fitness range.
///
/// Returns `0.0` for an empty board.
pub fn score(safe_queens: usize, board_size: usize) -> f64 {
    if board_size == 0 {
        return 0.0;
    }
    PERFECT_FITNESS * safe_queens as f64 / board_size as f64
}

/// Fitness of an encoding: `100 * safe / n`.
pub fn fitness(columns: &[usize]) -> f64 {
    score(safe_queen_count(columns), columns.len())
}
