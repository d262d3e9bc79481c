use std::iter::FusedIterator;

use crate::grid_like::GridLike;
use crate::point::{Point, Vector};

/// Points visited by stepping a fixed vector from a start point, ending
/// before the first step that leaves the grid.
///
/// The start point is yielded even if it lies outside the grid. The grid's
/// extent is captured on creation; clone the iterator to walk it again.
/// A zero step inside the grid never ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stride {
    row_count: usize,
    column_count: usize,
    step: Vector,
    next: Option<Point>,
}

impl Stride {
    pub(crate) fn new(row_count: usize, column_count: usize, step: Vector, start: Point) -> Self {
        Self {
            row_count,
            column_count,
            step,
            next: Some(start),
        }
    }
}

impl GridLike for Stride {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }
}

impl Iterator for Stride {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = current + self.step;
        self.next = self.contains(following).then_some(following);
        Some(current)
    }
}

impl FusedIterator for Stride {}
