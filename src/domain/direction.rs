use crate::util::*;

/// The four orthogonal neighbor directions.
/// By convention `Up` increases the row index and `Down` decreases it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) offset for each direction, indexed by discriminant.
    const OFFSETS: [[i32; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

    #[inline]
    pub fn offset(self) -> Coord<2> {
        let [r, c] = Self::OFFSETS[self as usize];
        vector![r, c]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(Direction::Up.offset(), vector![1, 0]);
        assert_eq!(Direction::Down.offset(), vector![-1, 0]);
        assert_eq!(Direction::Left.offset(), vector![0, 1]);
        assert_eq!(Direction::Right.offset(), vector![0, -1]);
    }

    #[test]
    fn offsets_cancel() {
        let total = Direction::ALL
            .iter()
            .fold(Coord::<2>::zero(), |acc, d| acc + d.offset());
        assert_eq!(total, Coord::<2>::zero());
    }
}
