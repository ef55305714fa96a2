//! Grid position (x, y) coordinates.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::Direction;

/// Width and height of the square crossword grid.
pub const GRID_SIZE: u8 = 20;

/// Number of cells in the crossword grid.
pub const GRID_CELLS: usize = GRID_SIZE as usize * GRID_SIZE as usize;

/// A cell position on the crossword grid.
///
/// `x` is the column (0 at the left edge) and `y` the row (0 at the top).
/// Both are always within `0..GRID_SIZE`.
///
/// Positions are ordered in reading order: by row first, then by column.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(3, 5);
/// assert_eq!((pos.x(), pos.y()), (3, 5));
///
/// // Reading order compares rows before columns
/// assert!(Position::new(19, 0) < Position::new(0, 1));
///
/// // Stepping outside the grid yields `None`
/// assert_eq!(pos.step(Direction::Down, 2), Some(Position::new(3, 7)));
/// assert_eq!(pos.step(Direction::Across, -4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// The geometric center of the grid, `(GRID_SIZE / 2, GRID_SIZE / 2)`.
    pub const CENTER: Self = Self::new(GRID_SIZE / 2, GRID_SIZE / 2);

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than [`GRID_SIZE`].
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < GRID_SIZE && y < GRID_SIZE);
        Self { x, y }
    }

    /// Creates a position from signed coordinates.
    ///
    /// Returns `None` if either coordinate lies outside the grid.
    #[must_use]
    pub fn checked_new(x: i32, y: i32) -> Option<Self> {
        let x = u8::try_from(x).ok().filter(|x| *x < GRID_SIZE)?;
        let y = u8::try_from(y).ok().filter(|y| *y < GRID_SIZE)?;
        Some(Self { x, y })
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (`y * GRID_SIZE + x`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * GRID_SIZE as usize + self.x as usize
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`GRID_CELLS`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < GRID_CELLS);
        let size = GRID_SIZE as usize;
        Self::new((index % size) as u8, (index / size) as u8)
    }

    /// Returns the position `offset` cells away along `direction`.
    ///
    /// Negative offsets move left or up. Returns `None` when the result falls
    /// outside the grid.
    #[must_use]
    pub fn step(self, direction: Direction, offset: i32) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::checked_new(
            i32::from(self.x) + dx * offset,
            i32::from(self.y) + dy * offset,
        )
    }

    /// Returns an iterator over all grid positions in reading order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..GRID_CELLS).map(Self::from_index)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Position::CENTER, Position::new(10, 10));
    }

    #[test]
    fn test_checked_new_bounds() {
        assert_eq!(Position::checked_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::checked_new(19, 19), Some(Position::new(19, 19)));
        assert_eq!(Position::checked_new(-1, 0), None);
        assert_eq!(Position::checked_new(0, -1), None);
        assert_eq!(Position::checked_new(20, 0), None);
        assert_eq!(Position::checked_new(0, 20), None);
    }

    #[test]
    #[should_panic(expected = "x < GRID_SIZE && y < GRID_SIZE")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(20, 0);
    }

    #[test]
    fn test_all_is_reading_order() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), GRID_CELLS);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(1, 0));
        assert_eq!(all[20], Position::new(0, 1));
    }

    proptest! {
        #[test]
        fn test_index_round_trip(index in 0..GRID_CELLS) {
            prop_assert_eq!(Position::from_index(index).index(), index);
        }

        #[test]
        fn test_step_back_and_forth(x in 0..GRID_SIZE, y in 0..GRID_SIZE, offset in -25..25i32) {
            let pos = Position::new(x, y);
            for direction in Direction::ALL {
                if let Some(moved) = pos.step(direction, offset) {
                    prop_assert_eq!(moved.step(direction, -offset), Some(pos));
                    prop_assert_eq!(moved.step(direction.perpendicular(), 0), Some(moved));
                }
            }
        }
    }
}
