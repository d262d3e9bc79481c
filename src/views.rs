//! Read-only projections of a [`Grid`](crate::Grid).
//!
//! Point views walk row-major with [`PointsByRow`]; cell views walk the
//! same order but follow each row's own length. Views own a snapshot of the grid
//! taken when they were created: later mutation of the grid is not visible
//! through them.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;
use std::sync::Arc;

use crate::grid::first_row_len;
use crate::grid_like::GridLike;
use crate::point::Point;

/// Looks up a cell by its real row length, so short rows yield `None`.
pub(crate) fn cell_at<C>(rows: &[Vec<C>], point: Point) -> Option<&C> {
    let (row, column) = point.indices()?;
    rows.get(row)?.get(column)
}

/// A row-major walk over the points of a `row_count` x `column_count` extent.
///
/// # Example
/// ```
/// use grider::{Point, PointsByRow};
///
/// let points: Vec<Point> = PointsByRow::new(2, 2).collect();
/// assert_eq!(
///     points,
///     vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsByRow {
    row_count: usize,
    column_count: usize,
    row: usize,
    column: usize,
}

impl PointsByRow {
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            row: 0,
            column: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.column_count == 0 || self.row >= self.row_count {
            return 0;
        }
        (self.row_count - self.row) * self.column_count - self.column
    }
}

impl Iterator for PointsByRow {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let point = Point::new(self.row as isize, self.column as isize);
        self.column += 1;
        if self.column == self.column_count {
            self.row += 1;
            self.column = 0;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PointsByRow {}
impl FusedIterator for PointsByRow {}

impl GridLike for PointsByRow {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }
}

/// Iterator over `(point, cell)` pairs in row-major order.
///
/// Each row is walked to its own length, so every stored cell of a ragged
/// grid is visited.
#[derive(Debug, Clone)]
pub struct CellIter<'a, C> {
    rows: &'a [Vec<C>],
    row: usize,
    column: usize,
}

impl<'a, C> CellIter<'a, C> {
    pub(crate) fn new(rows: &'a [Vec<C>]) -> Self {
        Self {
            rows,
            row: 0,
            column: 0,
        }
    }
}

impl<'a, C> Iterator for CellIter<'a, C> {
    type Item = (Point, &'a C);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cells = self.rows.get(self.row)?;
            if let Some(cell) = cells.get(self.column) {
                let point = Point::new(self.row as isize, self.column as isize);
                self.column += 1;
                return Some((point, cell));
            }
            self.row += 1;
            self.column = 0;
        }
    }
}

impl<C> FusedIterator for CellIter<'_, C> {}

/// Snapshot of every cell of a grid, enumerated row-major with its point.
pub struct Cells<C> {
    rows: Arc<Vec<Vec<C>>>,
}

impl<C> Cells<C> {
    pub(crate) fn new(rows: Arc<Vec<Vec<C>>>) -> Self {
        Self { rows }
    }

    /// Returns the cell at `point`, or `None` when it is not in the snapshot.
    pub fn get(&self, point: Point) -> Option<&C> {
        cell_at(&self.rows, point)
    }

    pub fn iter(&self) -> CellIter<'_, C> {
        CellIter::new(&self.rows)
    }
}

impl<C> GridLike for Cells<C> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        first_row_len(&self.rows)
    }
}

impl<'a, C> IntoIterator for &'a Cells<C> {
    type Item = (Point, &'a C);
    type IntoIter = CellIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> Clone for Cells<C> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.rows))
    }
}

impl<C: fmt::Debug> fmt::Debug for Cells<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Snapshot of a grid indexed by column number.
///
/// # Example
/// ```
/// use grider::grid;
///
/// let columns = grid![[1, 2], [3, 4]].columns();
/// assert_eq!(columns.len(), 2);
/// let second = columns.column(1);
/// assert_eq!(second.iter().collect::<Vec<_>>(), vec![&2, &4]);
/// assert_eq!(second[1], 4);
/// ```
pub struct Columns<C> {
    rows: Arc<Vec<Vec<C>>>,
}

impl<C> Columns<C> {
    pub(crate) fn new(rows: Arc<Vec<Vec<C>>>) -> Self {
        Self { rows }
    }

    /// Number of columns, taken from the first row.
    pub fn len(&self) -> usize {
        first_row_len(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column at `column`, or `None` past the last one.
    pub fn get(&self, column: usize) -> Option<Column<C>> {
        (column < self.len()).then(|| Column {
            rows: Arc::clone(&self.rows),
            column,
        })
    }

    /// Returns the column at `column`.
    ///
    /// # Panics
    /// Panics if `column` is not below [`Columns::len`].
    pub fn column(&self, column: usize) -> Column<C> {
        let count = self.len();
        self.get(column).unwrap_or_else(|| {
            panic!("column index {column} out of range for {count} columns")
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Column<C>> + '_ {
        (0..self.len()).map(move |column| self.column(column))
    }
}

impl<C> GridLike for Columns<C> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

impl<C> Clone for Columns<C> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.rows))
    }
}

impl<C: fmt::Debug> fmt::Debug for Columns<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// One column of a grid snapshot, indexed by row number.
pub struct Column<C> {
    rows: Arc<Vec<Vec<C>>>,
    column: usize,
}

impl<C> Column<C> {
    /// The column number this view projects.
    pub fn column_index(&self) -> usize {
        self.column
    }

    /// Number of cells, one per row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&C> {
        self.rows.get(row)?.get(self.column)
    }

    /// Iterates the column top to bottom.
    ///
    /// # Panics
    /// Panics on reaching a row too short to hold this column.
    pub fn iter(&self) -> impl Iterator<Item = &C> + '_ {
        self.rows.iter().map(move |row| &row[self.column])
    }
}

impl<C> Index<usize> for Column<C> {
    type Output = C;

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row][self.column]
    }
}

impl<C: PartialEq> PartialEq for Column<C> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<C: Eq> Eq for Column<C> {}

impl<C> Clone for Column<C> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            column: self.column,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Column<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
