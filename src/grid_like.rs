use crate::point::Point;
use crate::views::PointsByRow;

/// A trait for types that describe a rectangular extent of rows and columns.
///
/// The column count is the length of the first row; ragged rows are not
/// taken into account.
pub trait GridLike {
    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns.
    fn column_count(&self) -> usize;

    /// Returns `(row_count, column_count)`.
    fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Returns whether `point` lies within `0..row_count` and `0..column_count`.
    fn contains(&self, point: Point) -> bool {
        point
            .indices()
            .is_some_and(|(row, column)| row < self.row_count() && column < self.column_count())
    }

    /// Returns a row-major walk over every point of the extent.
    fn points_by_row(&self) -> PointsByRow {
        PointsByRow::new(self.row_count(), self.column_count())
    }
}
