//! Word direction.

/// The direction a word runs in.
///
/// # Examples
///
/// ```
/// use crossword_core::Direction;
///
/// assert_eq!(Direction::Across.perpendicular(), Direction::Down);
/// assert_eq!(Direction::Down.perpendicular(), Direction::Across);
/// assert_eq!(Direction::Across.to_string(), "Across");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the direction crossing this one at a right angle.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the `(dx, dy)` step between consecutive letters.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Across => (1, 0),
            Self::Down => (0, 1),
        }
    }

    /// Returns the one-letter abbreviation used in clue references (`A` or `D`).
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Self::Across => 'A',
            Self::Down => 'D',
        }
    }
}
