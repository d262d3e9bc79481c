//! A generic two-dimensional grid of cells.
//!
//! [`Grid`] stores rows of any cell type and offers indexed access,
//! shape-preserving and expanding transforms, structural appends, adjacency
//! queries and strided walks. [`Point`], [`Vector`], [`Direction`] and
//! [`DirectionWithDiagonals`] provide the coordinate arithmetic, and the
//! [`views`] module holds read-only snapshots of a grid by cell or column.
//!
//! # Example
//! ```
//! use grider::{Grid, GridLike, Point};
//!
//! let grid = Grid::from("#..\n.#.\n..#");
//! assert_eq!(grid.dimensions(), (3, 3));
//!
//! let diagonal = grid.stride((1, 1).into(), Point::ORIGIN);
//! assert!(diagonal.map(|p| grid[p]).all(|c| c == '#'));
//!
//! let zoomed = grid.flat_map(|&c| grider::grid![[c; 2]; 2]);
//! assert_eq!(zoomed.dimensions(), (6, 6));
//! ```

use thiserror::Error;

/// Builds a [`Grid`] from nested row literals.
///
/// # Example
/// ```
/// use grider::{grid, Grid};
///
/// let rows = grid![[1, 2], [3, 4]];
/// assert_eq!(rows, Grid::from_rows(vec![vec![1, 2], vec![3, 4]]));
///
/// let filled = grid![['.'; 3]; 2];
/// assert_eq!(filled.to_string(), "...\n...\n");
/// ```
#[macro_export]
macro_rules! grid {
    ([$cell:expr; $columns:expr]; $rows:expr) => {
        $crate::Grid::from_rows(vec![vec![$cell; $columns]; $rows])
    };
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::Grid::from_rows(vec![$(vec![$($cell),*]),*])
    };
}

pub mod direction;
pub mod grid;
pub mod grid_like;
pub mod point;
pub mod stride;
mod text;
pub mod views;

pub use direction::{Direction, DirectionWithDiagonals, Heading};
pub use grid::{Grid, Neighbors};
pub use grid_like::GridLike;
pub use point::{Point, Vector};
pub use stride::Stride;
pub use views::{CellIter, Cells, Column, Columns, PointsByRow};

/// Precondition failures of grid construction and reshaping.
///
/// The panicking operations ([`Grid::append_rows`], [`Grid::append_columns`],
/// [`Grid::flat_map`], [`Grid::from_cells`]) report these as their panic
/// message; the `try_` forms return them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("appending columns requires the grids to be the same height (expected {expected} rows, found {found})")]
    HeightMismatch { expected: usize, found: usize },

    #[error("appending rows requires the grids to be the same width (expected {expected} columns, found {found})")]
    WidthMismatch { expected: usize, found: usize },

    #[error("expanding a grid requires at least one row and one column")]
    EmptyGrid,

    #[error("rows must hold at least one cell")]
    ZeroRowWidth,
}
