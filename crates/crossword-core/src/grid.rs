//! Fixed-size `GRID_SIZE × GRID_SIZE` cell containers.
//!
//! [`Grid`] is the generic container used for every per-cell matrix in the
//! workspace (the solution letters, the player's view, placement bookkeeping).
//! [`LetterGrid`] is the solution grid: each cell is either blank or holds a
//! [`Letter`].
//!
//! # Text format
//!
//! [`LetterGrid`] implements [`Display`] and [`FromStr`] using one character
//! per cell in reading order:
//!
//! - `A`-`Z` (or `a`-`z`) are letters
//! - `.` or `_` are blank cells
//! - whitespace is ignored
//!
//! Exactly [`GRID_CELLS`] cell characters must be present.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{GRID_CELLS, GRID_SIZE, Letter, Position};

/// A `GRID_SIZE × GRID_SIZE` matrix of cells indexed by [`Position`].
///
/// # Examples
///
/// ```
/// use crossword_core::{Grid, Position};
///
/// let mut grid = Grid::filled(0_u32);
/// grid[Position::new(2, 3)] += 5;
///
/// assert_eq!(grid[Position::new(2, 3)], 5);
/// assert_eq!(grid.iter().filter(|(_, n)| **n > 0).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: [T; GRID_CELLS],
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position in reading order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        Self {
            cells: std::array::from_fn(|i| f(Position::from_index(i))),
        }
    }

    /// Returns an iterator over `(position, cell)` pairs in reading order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Position, &T)> + ExactSizeIterator {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::from_index(i), cell))
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(usize::from(GRID_SIZE))
    }

    /// Creates a new grid by applying `f` to every cell.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            cells: std::array::from_fn(|i| f(&self.cells[i])),
        }
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Creates a grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Default for Grid<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// The solution grid: every cell is blank (`None`) or holds a letter.
///
/// # Examples
///
/// ```
/// use crossword_core::{Letter, LetterGrid, Position};
///
/// let mut grid = LetterGrid::new();
/// let pos = Position::new(4, 7);
/// grid[pos] = Letter::from_char('K');
///
/// assert!(grid.is_letter(pos));
/// assert_eq!(grid.letter(pos).map(Letter::as_char), Some('K'));
/// assert_eq!(grid.letter_count(), 1);
/// ```
pub type LetterGrid = Grid<Option<Letter>>;

impl Grid<Option<Letter>> {
    /// Creates an all-blank grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the letter at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<Letter> {
        self[pos]
    }

    /// Returns `true` if the cell at `pos` is part of a placed word.
    #[must_use]
    pub fn is_letter(&self, pos: Position) -> bool {
        self[pos].is_some()
    }

    /// Returns the number of letter cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns the smallest rectangle containing every letter cell as
    /// `(top_left, bottom_right)`, or `None` for an all-blank grid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let mut letters = self.iter().filter(|(_, cell)| cell.is_some()).map(|(pos, _)| pos);
        let first = letters.next()?;
        let (min_x, min_y, max_x, max_y) = letters.fold(
            (first.x(), first.y(), first.x(), first.y()),
            |(min_x, min_y, max_x, max_y), pos| {
                (
                    min_x.min(pos.x()),
                    min_y.min(pos.y()),
                    max_x.max(pos.x()),
                    max_y.max(pos.y()),
                )
            },
        );
        Some((Position::new(min_x, min_y), Position::new(max_x, max_y)))
    }
}

impl Display for Grid<Option<Letter>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(letter) => write!(f, "{letter}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`LetterGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than a letter, `.`, `_` or whitespace was found.
    #[display("invalid grid character: {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The text did not contain exactly [`GRID_CELLS`] cells.
    #[display("expected {} cells, found {len}", GRID_CELLS)]
    InvalidLength {
        /// Number of cells found.
        len: usize,
    },
}

impl FromStr for Grid<Option<Letter>> {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '.' | '_' => Ok(None),
                _ => Letter::from_char(ch)
                    .map(Some)
                    .ok_or(ParseGridError::InvalidChar { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let len = cells.len();
        let cells: [Option<Letter>; GRID_CELLS] = cells
            .try_into()
            .map_err(|_| ParseGridError::InvalidLength { len })?;
        Ok(Self { cells })
    }
}
