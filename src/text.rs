//! Text import and export for grids of characters.
//!
//! Import makes one row per non-empty line and one cell per character.
//! Export writes one line per row, each terminated by a newline, so the
//! exported text of a rectangular grid imports back to an equal grid.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::*;

use crate::grid::Grid;

impl From<&str> for Grid<char> {
    /// # Example
    /// ```
    /// use grider::{grid, Grid};
    ///
    /// let grid = Grid::from("AB\nCD\n");
    /// assert_eq!(grid, grid![['A', 'B'], ['C', 'D']]);
    /// ```
    fn from(text: &str) -> Self {
        let rows: Vec<Vec<char>> = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        trace!(rows = rows.len(), "Parsed character grid");
        Grid::from_rows(rows)
    }
}

impl FromStr for Grid<char> {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Grid::from(text))
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for character in row {
                write!(f, "{character}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
