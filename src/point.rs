use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::direction::Heading;

/// A (row, column) location in a grid.
///
/// Points carry no bounds of their own: whether a point is valid depends on
/// the grid it is used with, and points may freely step outside of it.
///
/// Points order lexicographically by row, then by column.
///
/// # Example
/// ```
/// use grider::{Point, Vector};
///
/// let from = Point::new(1, 1);
/// let to = Point::new(3, 0);
/// assert_eq!(from.vector_to(to), Vector::new(2, -1));
/// assert_eq!(from.moved_by(Vector::new(2, -1)), to);
/// assert!(Point::new(0, 9) < Point::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub row: isize,
    pub column: isize,
}

/// A (row, column) displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vector {
    pub rows: isize,
    pub columns: isize,
}

impl Point {
    /// The top-left corner of every grid.
    pub const ORIGIN: Point = Point { row: 0, column: 0 };

    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Returns the displacement that moves `self` onto `other`.
    pub fn vector_to(self, other: Point) -> Vector {
        Vector::new(other.row - self.row, other.column - self.column)
    }

    /// Returns this point translated by `vector`.
    pub fn moved_by(self, vector: Vector) -> Point {
        Point::new(self.row + vector.rows, self.column + vector.columns)
    }

    /// Moves this point `amount` steps toward `direction` in place.
    ///
    /// # Example
    /// ```
    /// use grider::{Direction, DirectionWithDiagonals, Point};
    ///
    /// let mut point = Point::new(5, 5);
    /// point.move_toward(2, Direction::Up);
    /// point.move_toward(1, DirectionWithDiagonals::SouthEast);
    /// assert_eq!(point, Point::new(4, 6));
    /// ```
    pub fn move_toward(&mut self, amount: isize, direction: impl Heading) {
        *self += direction.offset() * amount;
    }

    /// Returns a copy of this point moved `amount` steps toward `direction`.
    pub fn moved_toward(self, amount: isize, direction: impl Heading) -> Point {
        let mut next = self;
        next.move_toward(amount, direction);
        next
    }

    /// Converts to `(row, column)` storage indices, or `None` when either
    /// coordinate is negative.
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        Some((row, column))
    }
}

impl Vector {
    pub const fn new(rows: isize, columns: isize) -> Self {
        Self { rows, columns }
    }

    /// Returns the displacement pointing the opposite way.
    pub fn inverted(self) -> Vector {
        Vector::new(-self.rows, -self.columns)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r: {}, c: {})", self.row, self.column)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r: {}, c: {})", self.rows, self.columns)
    }
}

impl From<(isize, isize)> for Point {
    fn from((row, column): (isize, isize)) -> Self {
        Point::new(row, column)
    }
}

impl From<(isize, isize)> for Vector {
    fn from((rows, columns): (isize, isize)) -> Self {
        Vector::new(rows, columns)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, vector: Vector) -> Self::Output {
        self.moved_by(vector)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, vector: Vector) {
        *self = self.moved_by(vector);
    }
}

/// `to - from` is the vector leading from `from` to `to`.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Self::Output {
        other.vector_to(self)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.inverted()
    }
}

impl Mul<isize> for Vector {
    type Output = Vector;

    fn mul(self, amount: isize) -> Self::Output {
        Vector::new(self.rows * amount, self.columns * amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Direction, DirectionWithDiagonals};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_vector_to_and_moved_by() {
        let a = Point::new(2, 3);
        let b = Point::new(-1, 7);
        let v = a.vector_to(b);
        assert_eq!(v, Vector::new(-3, 4));
        assert_eq!(a.moved_by(v), b);
        assert_eq!(b - a, v);
        assert_eq!(b.moved_by(v.inverted()), a);
        assert_eq!(-v, v.inverted());
    }

    #[test]
    fn test_move_toward_mutates_in_place() {
        let mut p = Point::ORIGIN;
        p.move_toward(3, Direction::Down);
        p.move_toward(2, Direction::Right);
        assert_eq!(p, Point::new(3, 2));
        p.move_toward(1, DirectionWithDiagonals::NorthWest);
        assert_eq!(p, Point::new(2, 1));
    }

    #[test]
    fn test_moved_toward_leaves_original() {
        let p = Point::new(4, 4);
        let q = p.moved_toward(2, DirectionWithDiagonals::SouthWest);
        assert_eq!(p, Point::new(4, 4));
        assert_eq!(q, Point::new(6, 2));
        assert_eq!(p.moved_toward(0, Direction::Left), p);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1, -2).to_string(), "(r: 1, c: -2)");
        assert_eq!(Vector::new(0, 5).to_string(), "(r: 0, c: 5)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut points = vec![
            Point::new(1, 0),
            Point::new(0, 2),
            Point::new(0, 1),
            Point::new(1, -1),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, -1),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_indices_rejects_negative() {
        assert_eq!(Point::new(2, 3).indices(), Some((2, 3)));
        assert_eq!(Point::new(-1, 3).indices(), None);
        assert_eq!(Point::new(0, -1).indices(), None);
    }

    proptest! {
        #[test]
        fn test_vector_round_trip_proptest(
            r1 in -1000isize..1000, c1 in -1000isize..1000,
            r2 in -1000isize..1000, c2 in -1000isize..1000,
        ) {
            let a = Point::new(r1, c1);
            let b = Point::new(r2, c2);
            prop_assert_eq!(a + a.vector_to(b), b);
            prop_assert_eq!(b + a.vector_to(b).inverted(), a);
        }
    }
}
