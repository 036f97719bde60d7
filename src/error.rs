//! Error types.
//!
//! The evolutionary loop itself has no failure modes once its configuration
//! is accepted; every recoverable error here comes from caller input.

/// Invalid solver configuration, reported before any population is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board_size must be at least 1, got {0}")]
    BoardSize(usize),
    #[error("population_size must be even, got {0}")]
    PopulationOdd(usize),
    #[error("population_size must be at least {min}, got {size}")]
    PopulationTooSmall { size: usize, min: usize },
    #[error("mutation_probability must be in (0, 1], got {0}")]
    MutationProbability(f64),
    #[error("max_generations must be at least 1")]
    MaxGenerations,
    #[error("report_period must be at least 1")]
    ReportPeriod,
}

/// Invalid explicit board encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one column")]
    Empty,
    #[error("row {row} in column {column} is outside a {size}x{size} board")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::PopulationTooSmall { size: 4, min: 6 };
        assert_eq!(err.to_string(), "population_size must be at least 6, got 4");

        let err = BoardError::RowOutOfRange {
            column: 2,
            row: 9,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "row 9 in column 2 is outside a 4x4 board"
        );
    }
}
