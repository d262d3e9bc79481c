use std::ops::{Index, IndexMut, RangeInclusive};
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::*;

use crate::grid_like::GridLike;
use crate::point::{Point, Vector};
use crate::stride::Stride;
use crate::views::{cell_at, CellIter, Cells, Columns};
use crate::GridError;

/// Points returned by the adjacency queries; never more than eight.
pub type Neighbors = SmallVec<[Point; 8]>;

/// Length of the first row, or 0 for a grid without rows.
pub(crate) fn first_row_len<C>(rows: &[Vec<C>]) -> usize {
    rows.first().map_or(0, Vec::len)
}

/// A rectangular table of cells stored as rows.
///
/// Storage is shared copy-on-write: cloning a grid or taking a view is
/// cheap, and the first mutation through a shared handle copies the rows so
/// that no other handle observes it.
///
/// Rows are expected to share one length but this is not checked; the
/// column count is always the length of the first row.
///
/// # Example
/// ```
/// use grider::{grid, GridLike, Point};
///
/// let grid = grid![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(grid.dimensions(), (2, 3));
/// assert_eq!(grid[(1, 2)], 6);
/// assert_eq!(grid.get(Point::new(0, 1)), Some(&2));
/// assert_eq!(grid.get(Point::new(2, 0)), None);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Grid<C> {
    rows: Arc<Vec<Vec<C>>>,
}

impl<C> Grid<C> {
    /// Creates a grid from nested rows, stored as given.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Creates a grid by chunking `cells` into rows of `cells_per_row`.
    ///
    /// When the cell count is not a multiple of `cells_per_row` the last row
    /// is short.
    ///
    /// # Panics
    /// Panics if `cells_per_row` is zero.
    ///
    /// # Example
    /// ```
    /// use grider::{grid, Grid};
    ///
    /// assert_eq!(Grid::from_cells(1..=6, 3), grid![[1, 2, 3], [4, 5, 6]]);
    /// ```
    pub fn from_cells(cells: impl IntoIterator<Item = C>, cells_per_row: usize) -> Self {
        if cells_per_row == 0 {
            panic!("{}", GridError::ZeroRowWidth);
        }
        let mut rows = Vec::new();
        let mut current = Vec::with_capacity(cells_per_row);
        for cell in cells {
            current.push(cell);
            if current.len() == cells_per_row {
                rows.push(std::mem::replace(
                    &mut current,
                    Vec::with_capacity(cells_per_row),
                ));
            }
        }
        if !current.is_empty() {
            trace!(len = current.len(), cells_per_row, "Final row is short");
            rows.push(current);
        }
        debug!(rows = rows.len(), cells_per_row, "Chunked cells into grid");
        Self::from_rows(rows)
    }

    /// Returns an iterator over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns one row.
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[C] {
        &self.rows[row]
    }

    /// Returns the cells of `row` within the inclusive `columns` range.
    ///
    /// # Panics
    /// Panics if the row or the range is out of range.
    pub fn row_range(&self, row: usize, columns: RangeInclusive<usize>) -> &[C] {
        &self.rows[row][columns]
    }

    /// Returns the cell at `point`, or `None` when the point is outside the
    /// grid's rows and columns.
    ///
    /// The column bound is the first row's width. A point inside that bound
    /// but past the end of a shorter row also returns `None`.
    pub fn get(&self, point: Point) -> Option<&C> {
        if !self.contains(point) {
            return None;
        }
        cell_at(&self.rows, point)
    }

    /// Iterates `(point, cell)` pairs in row-major order.
    pub fn iter(&self) -> CellIter<'_, C> {
        CellIter::new(&self.rows)
    }

    /// A snapshot of every cell with its point.
    pub fn cells(&self) -> Cells<C> {
        Cells::new(Arc::clone(&self.rows))
    }

    /// A snapshot indexed by column.
    pub fn columns(&self) -> Columns<C> {
        Columns::new(Arc::clone(&self.rows))
    }

    /// Returns a grid of the same shape with `transform` applied to every cell.
    pub fn map<N>(&self, mut transform: impl FnMut(&C) -> N) -> Grid<N> {
        Grid::from_rows(
            self.rows
                .iter()
                .map(|row| row.iter().map(&mut transform).collect())
                .collect(),
        )
    }

    /// Like [`Grid::map`], but `transform` also receives each cell's point.
    ///
    /// # Example
    /// ```
    /// use grider::{grid, Point};
    ///
    /// let sums = grid![[0, 0], [0, 0]].map_by_point(|p: Point, _| p.row + p.column);
    /// assert_eq!(sums, grid![[0, 1], [1, 2]]);
    /// ```
    pub fn map_by_point<N>(&self, mut transform: impl FnMut(Point, &C) -> N) -> Grid<N> {
        Grid::from_rows(
            self.rows
                .iter()
                .enumerate()
                .map(|(row, cells)| {
                    cells
                        .iter()
                        .enumerate()
                        .map(|(column, cell)| {
                            transform(Point::new(row as isize, column as isize), cell)
                        })
                        .collect()
                })
                .collect(),
        )
    }

    /// Expands every cell into a sub-grid and stitches the sub-grids together.
    ///
    /// Sub-grids of one source row are joined left to right with
    /// [`Grid::append_columns`], then the joined rows top to bottom with
    /// [`Grid::append_rows`].
    ///
    /// # Panics
    /// Panics if the grid has no rows or no columns, or if sub-grids do not
    /// line up. See [`Grid::try_flat_map`].
    ///
    /// # Example
    /// ```
    /// use grider::grid;
    ///
    /// let zoomed = grid![[1, 2], [3, 4]].flat_map(|&c| grid![[c, c], [c, c]]);
    /// assert_eq!(zoomed, grid![[1, 1, 2, 2], [1, 1, 2, 2], [3, 3, 4, 4], [3, 3, 4, 4]]);
    /// ```
    pub fn flat_map<N: Clone>(&self, transform: impl FnMut(&C) -> Grid<N>) -> Grid<N> {
        self.try_flat_map(transform)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Fallible form of [`Grid::flat_map`].
    ///
    /// # Errors
    /// Returns [`GridError::EmptyGrid`] for a grid without rows or columns,
    /// and a dimension mismatch when neighbouring sub-grids differ in height
    /// or joined rows differ in width.
    pub fn try_flat_map<N: Clone>(
        &self,
        mut transform: impl FnMut(&C) -> Grid<N>,
    ) -> Result<Grid<N>, GridError> {
        let (row_count, column_count) = self.dimensions();
        if row_count == 0 || column_count == 0 {
            return Err(GridError::EmptyGrid);
        }
        trace!(row_count, column_count, "Expanding grid");

        let mut expanded: Option<Grid<N>> = None;
        for row in self.rows.iter() {
            let mut expanded_row: Option<Grid<N>> = None;
            for cell in row {
                let block = transform(cell);
                expanded_row = Some(match expanded_row.take() {
                    Some(mut partial) => {
                        partial.try_append_columns(block)?;
                        partial
                    }
                    None => block,
                });
            }
            let expanded_row = expanded_row.ok_or(GridError::EmptyGrid)?;
            expanded = Some(match expanded.take() {
                Some(mut partial) => {
                    partial.try_append_rows(expanded_row)?;
                    partial
                }
                None => expanded_row,
            });
        }

        let expanded = expanded.ok_or(GridError::EmptyGrid)?;
        debug!(
            rows = expanded.row_count(),
            columns = expanded.column_count(),
            "Expanded grid"
        );
        Ok(expanded)
    }

    /// Returns every in-bounds neighbour of `(row, column)`, diagonals
    /// included.
    ///
    /// Order: north, north-west, north-east, south, south-west, south-east,
    /// west, east, each present only when inside the grid.
    pub fn adjacent_of(&self, row: isize, column: isize) -> Neighbors {
        let (has_up, has_down, has_left, has_right) = self.open_sides(row, column);
        let mut adjacent = Neighbors::new();
        if has_up {
            adjacent.push(Point::new(row - 1, column));
            if has_left {
                adjacent.push(Point::new(row - 1, column - 1));
            }
            if has_right {
                adjacent.push(Point::new(row - 1, column + 1));
            }
        }
        if has_down {
            adjacent.push(Point::new(row + 1, column));
            if has_left {
                adjacent.push(Point::new(row + 1, column - 1));
            }
            if has_right {
                adjacent.push(Point::new(row + 1, column + 1));
            }
        }
        if has_left {
            adjacent.push(Point::new(row, column - 1));
        }
        if has_right {
            adjacent.push(Point::new(row, column + 1));
        }
        adjacent
    }

    /// Returns the in-bounds north, south, west and east neighbours of
    /// `(row, column)`, in that order.
    pub fn cardinal_adjacent_of(&self, row: isize, column: isize) -> Neighbors {
        let (has_up, has_down, has_left, has_right) = self.open_sides(row, column);
        let mut adjacent = Neighbors::new();
        if has_up {
            adjacent.push(Point::new(row - 1, column));
        }
        if has_down {
            adjacent.push(Point::new(row + 1, column));
        }
        if has_left {
            adjacent.push(Point::new(row, column - 1));
        }
        if has_right {
            adjacent.push(Point::new(row, column + 1));
        }
        adjacent
    }

    fn open_sides(&self, row: isize, column: isize) -> (bool, bool, bool, bool) {
        let last_row = self.row_count() as isize - 1;
        let last_column = self.column_count() as isize - 1;
        (row > 0, row < last_row, column > 0, column < last_column)
    }

    /// Walks from `start` by `step` until the next point leaves the grid.
    ///
    /// `start` itself is always yielded first.
    ///
    /// # Example
    /// ```
    /// use grider::{grid, Point, Vector};
    ///
    /// let grid = grid![[0; 4]; 3];
    /// let diagonal: Vec<Point> = grid.stride(Vector::new(1, 1), Point::new(0, 1)).collect();
    /// assert_eq!(diagonal, vec![Point::new(0, 1), Point::new(1, 2), Point::new(2, 3)]);
    /// ```
    pub fn stride(&self, step: Vector, start: Point) -> Stride {
        Stride::new(self.row_count(), self.column_count(), step, start)
    }
}

impl<C: Clone> Grid<C> {
    /// Mutable access to the rows, copying them first if they are shared.
    fn rows_mut(&mut self) -> &mut Vec<Vec<C>> {
        Arc::make_mut(&mut self.rows)
    }

    fn into_rows(self) -> Vec<Vec<C>> {
        Arc::try_unwrap(self.rows).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Overwrites the cell at each point of `locations` with `render(point)`,
    /// in order. A repeated point keeps its last rendering.
    ///
    /// # Panics
    /// Panics if any point is out of bounds.
    ///
    /// # Example
    /// ```
    /// use grider::{grid, Point};
    ///
    /// let mut grid = grid![['.', '.'], ['.', '.']];
    /// grid.visualize([Point::new(0, 0), Point::new(1, 1)], |_| '#');
    /// assert_eq!(grid.to_string(), "#.\n.#\n");
    /// ```
    pub fn visualize(
        &mut self,
        locations: impl IntoIterator<Item = Point>,
        mut render: impl FnMut(Point) -> C,
    ) {
        let mut written = 0usize;
        for point in locations {
            self[point] = render(point);
            written += 1;
        }
        trace!(written, "Visualized points");
    }

    /// Appends `other`'s rows onto the ends of this grid's rows.
    ///
    /// # Panics
    /// Panics if the grids differ in height.
    pub fn append_columns(&mut self, other: Grid<C>) {
        self.try_append_columns(other)
            .unwrap_or_else(|error| panic!("{error}"));
    }

    /// Appends `other`'s rows below this grid's rows.
    ///
    /// # Panics
    /// Panics if the grids differ in width.
    pub fn append_rows(&mut self, other: Grid<C>) {
        self.try_append_rows(other)
            .unwrap_or_else(|error| panic!("{error}"));
    }

    /// Fallible form of [`Grid::append_columns`].
    ///
    /// # Errors
    /// Returns [`GridError::HeightMismatch`] if the grids differ in height;
    /// `self` is left unchanged.
    pub fn try_append_columns(&mut self, other: Grid<C>) -> Result<(), GridError> {
        if other.row_count() != self.row_count() {
            return Err(GridError::HeightMismatch {
                expected: self.row_count(),
                found: other.row_count(),
            });
        }
        trace!(columns = other.column_count(), "Appending columns");
        for (row, extra) in self.rows_mut().iter_mut().zip(other.into_rows()) {
            row.extend(extra);
        }
        Ok(())
    }

    /// Fallible form of [`Grid::append_rows`].
    ///
    /// # Errors
    /// Returns [`GridError::WidthMismatch`] if the grids differ in width;
    /// `self` is left unchanged.
    pub fn try_append_rows(&mut self, other: Grid<C>) -> Result<(), GridError> {
        if other.column_count() != self.column_count() {
            return Err(GridError::WidthMismatch {
                expected: self.column_count(),
                found: other.column_count(),
            });
        }
        trace!(rows = other.row_count(), "Appending rows");
        self.rows_mut().extend(other.into_rows());
        Ok(())
    }
}

impl<C> GridLike for Grid<C> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        first_row_len(&self.rows)
    }
}

impl<C> Clone for Grid<C> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<C> From<Vec<Vec<C>>> for Grid<C> {
    fn from(rows: Vec<Vec<C>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<C> Index<(usize, usize)> for Grid<C> {
    type Output = C;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.rows[row][column]
    }
}

impl<C> Index<Point> for Grid<C> {
    type Output = C;

    fn index(&self, point: Point) -> &Self::Output {
        let (row, column) = point
            .indices()
            .unwrap_or_else(|| panic!("point {point} has a negative coordinate"));
        &self.rows[row][column]
    }
}

impl<C: Clone> IndexMut<Point> for Grid<C> {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        let (row, column) = point
            .indices()
            .unwrap_or_else(|| panic!("point {point} has a negative coordinate"));
        &mut self.rows_mut()[row][column]
    }
}

impl<'a, C> IntoIterator for &'a Grid<C> {
    type Item = (Point, &'a C);
    type IntoIter = CellIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<C: serde::Serialize> serde::Serialize for Grid<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter())
    }
}
