use crate::point::Vector;

/// A movement symbol that translates a [`Point`](crate::Point) by one step.
///
/// Implemented by both [`Direction`] and [`DirectionWithDiagonals`], so
/// point arithmetic accepts either set.
pub trait Heading: Copy {
    /// The displacement of a single step in this direction.
    fn offset(self) -> Vector;
}

/// The four cardinal directions, with rows growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The eight compass directions, cardinals and diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DirectionWithDiagonals {
    North,
    NorthWest,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The opposite direction.
    ///
    /// # Example
    /// ```
    /// use grider::Direction;
    ///
    /// assert_eq!(Direction::Left.inverse(), Direction::Right);
    /// assert_eq!(Direction::Left.inverse().inverse(), Direction::Left);
    /// ```
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// A quarter turn clockwise: up, right, down, left, up.
    pub const fn rotate_clockwise_90_degrees(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

impl DirectionWithDiagonals {
    pub const ALL: [DirectionWithDiagonals; 8] = [
        DirectionWithDiagonals::North,
        DirectionWithDiagonals::NorthWest,
        DirectionWithDiagonals::NorthEast,
        DirectionWithDiagonals::West,
        DirectionWithDiagonals::East,
        DirectionWithDiagonals::SouthWest,
        DirectionWithDiagonals::South,
        DirectionWithDiagonals::SouthEast,
    ];

    /// The opposite direction, mirrored through the centre.
    pub const fn inverse(self) -> Self {
        match self {
            DirectionWithDiagonals::North => DirectionWithDiagonals::South,
            DirectionWithDiagonals::NorthWest => DirectionWithDiagonals::SouthEast,
            DirectionWithDiagonals::NorthEast => DirectionWithDiagonals::SouthWest,
            DirectionWithDiagonals::West => DirectionWithDiagonals::East,
            DirectionWithDiagonals::East => DirectionWithDiagonals::West,
            DirectionWithDiagonals::SouthWest => DirectionWithDiagonals::NorthEast,
            DirectionWithDiagonals::South => DirectionWithDiagonals::North,
            DirectionWithDiagonals::SouthEast => DirectionWithDiagonals::NorthWest,
        }
    }
}

impl Heading for Direction {
    fn offset(self) -> Vector {
        match self {
            Direction::Up => Vector::new(-1, 0),
            Direction::Down => Vector::new(1, 0),
            Direction::Left => Vector::new(0, -1),
            Direction::Right => Vector::new(0, 1),
        }
    }
}

impl Heading for DirectionWithDiagonals {
    fn offset(self) -> Vector {
        let rows = match self {
            Self::North | Self::NorthWest | Self::NorthEast => -1,
            Self::South | Self::SouthWest | Self::SouthEast => 1,
            Self::West | Self::East => 0,
        };
        let columns = match self {
            Self::West | Self::NorthWest | Self::SouthWest => -1,
            Self::East | Self::NorthEast | Self::SouthEast => 1,
            Self::North | Self::South => 0,
        };
        Vector::new(rows, columns)
    }
}

impl From<Direction> for DirectionWithDiagonals {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => DirectionWithDiagonals::North,
            Direction::Down => DirectionWithDiagonals::South,
            Direction::Left => DirectionWithDiagonals::West,
            Direction::Right => DirectionWithDiagonals::East,
        }
    }
}

impl From<Direction> for Vector {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

impl From<DirectionWithDiagonals> for Vector {
    fn from(direction: DirectionWithDiagonals) -> Self {
        direction.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(Direction::Up, Direction::Right)]
    #[test_case(Direction::Right, Direction::Down)]
    #[test_case(Direction::Down, Direction::Left)]
    #[test_case(Direction::Left, Direction::Up)]
    fn test_rotate_clockwise(from: Direction, to: Direction) {
        assert_eq!(from.rotate_clockwise_90_degrees(), to);
    }

    #[test_case(DirectionWithDiagonals::North, Vector::new(-1, 0))]
    #[test_case(DirectionWithDiagonals::NorthWest, Vector::new(-1, -1))]
    #[test_case(DirectionWithDiagonals::NorthEast, Vector::new(-1, 1))]
    #[test_case(DirectionWithDiagonals::West, Vector::new(0, -1))]
    #[test_case(DirectionWithDiagonals::East, Vector::new(0, 1))]
    #[test_case(DirectionWithDiagonals::SouthWest, Vector::new(1, -1))]
    #[test_case(DirectionWithDiagonals::South, Vector::new(1, 0))]
    #[test_case(DirectionWithDiagonals::SouthEast, Vector::new(1, 1))]
    fn test_diagonal_offsets(direction: DirectionWithDiagonals, expected: Vector) {
        assert_eq!(direction.offset(), expected);
    }

    #[test]
    fn test_inverse_offsets_cancel() {
        for direction in Direction::ALL {
            assert_eq!(direction.inverse().offset(), direction.offset().inverted());
        }
        for direction in DirectionWithDiagonals::ALL {
            assert_eq!(direction.inverse().offset(), direction.offset().inverted());
        }
    }

    #[test]
    fn test_inverse_has_no_fixed_points() {
        for direction in DirectionWithDiagonals::ALL {
            assert_ne!(direction.inverse(), direction);
        }
    }

    #[test]
    fn test_cardinal_conversion_keeps_offset() {
        for direction in Direction::ALL {
            assert_eq!(DirectionWithDiagonals::from(direction).offset(), direction.offset());
        }
    }

    proptest! {
        #[test]
        fn test_inverse_is_involution_proptest(
            four in prop::sample::select(Direction::ALL.to_vec()),
            eight in prop::sample::select(DirectionWithDiagonals::ALL.to_vec()),
        ) {
            prop_assert_eq!(four.inverse().inverse(), four);
            prop_assert_eq!(eight.inverse().inverse(), eight);
        }

        #[test]
        fn test_four_rotations_return_proptest(
            direction in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let rotated = direction
                .rotate_clockwise_90_degrees()
                .rotate_clockwise_90_degrees()
                .rotate_clockwise_90_degrees()
                .rotate_clockwise_90_degrees();
            prop_assert_eq!(rotated, direction);
            prop_assert_eq!(
                direction.rotate_clockwise_90_degrees().rotate_clockwise_90_degrees(),
                direction.inverse()
            );
        }
    }
}
