//! Text views of a board.
//!
//! Pure functions over [`Board::columns`]; nothing here touches solver
//! state or writes to a stream.

use std::fmt;

use crate::board::Board;

/// Row indices separated by spaces, e.g. `"1 3 0 2"`.
pub fn compact(board: &Board) -> String {
    board
        .columns()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An `n × n` grid with `Q` at each queen.
///
/// Row 0 is the top line; column 0 is the leftmost cell.
pub fn grid(board: &Board) -> String {
    Grid(board).to_string()
}

/// [`Display`](fmt::Display) adapter producing the [`grid`] view.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a>(pub &'a Board);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.size();
        let columns = self.0.columns();
        let rule = " ---".repeat(n);

        for row in 0..n {
            writeln!(f, "{rule}")?;
            for &queen_row in columns {
                f.write_str(if queen_row == row { "| Q " } else { "|   " })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{rule}")
    }
}
