//! Answers, dictionary entries and placed words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Direction, Letter, Position};

/// Minimum number of letters in an answer.
pub const MIN_ANSWER_LEN: usize = 2;

/// Error returned when an answer string is not a valid crossword answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnswerError {
    /// The answer was empty.
    #[display("answer is empty")]
    Empty,
    /// The answer contained whitespace.
    #[display("answer contains whitespace")]
    ContainsWhitespace,
    /// The answer contained a character other than an ASCII letter.
    #[display("answer contains invalid character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The answer was shorter than [`MIN_ANSWER_LEN`].
    #[display("answer has {len} letter(s), at least {} required", MIN_ANSWER_LEN)]
    TooShort {
        /// Number of letters found.
        len: usize,
    },
}

/// A crossword answer: at least [`MIN_ANSWER_LEN`] upper-case letters.
///
/// # Examples
///
/// ```
/// use crossword_core::{Answer, AnswerError};
///
/// let answer: Answer = "Rust".parse()?;
/// assert_eq!(answer.to_string(), "RUST");
/// assert_eq!(answer.len(), 4);
/// assert!(answer.matches_guess(" rust "));
///
/// assert_eq!("ICE CREAM".parse::<Answer>(), Err(AnswerError::ContainsWhitespace));
/// assert_eq!("X".parse::<Answer>(), Err(AnswerError::TooShort { len: 1 }));
/// # Ok::<(), AnswerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Answer(Box<[Letter]>);

impl Answer {
    /// Returns the letters of the answer.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; answers hold at least [`MIN_ANSWER_LEN`] letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `guess` spells this answer.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        let guess = guess.trim();
        guess.len() == self.len()
            && guess
                .bytes()
                .zip(self.letters())
                .all(|(byte, letter)| byte.to_ascii_uppercase() == letter.as_ascii())
    }
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AnswerError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(AnswerError::ContainsWhitespace);
        }
        let letters = s
            .chars()
            .map(|ch| Letter::from_char(ch).ok_or(AnswerError::InvalidChar { ch }))
            .collect::<Result<Box<[_]>, _>>()?;
        if letters.len() < MIN_ANSWER_LEN {
            return Err(AnswerError::TooShort { len: letters.len() });
        }
        Ok(Self(letters))
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// An unplaced `(answer, clue)` pair from the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    answer: Answer,
    clue: String,
}

impl WordEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(answer: Answer, clue: impl Into<String>) -> Self {
        Self {
            answer,
            clue: clue.into(),
        }
    }

    /// Returns the answer.
    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }
}

/// Where a word sits on the grid: its first cell and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Cell holding the first letter.
    pub origin: Position,
    /// Direction the word runs in.
    pub direction: Direction,
}

impl Placement {
    /// Creates a new placement.
    #[must_use]
    pub const fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Returns the cell holding letter `offset` of the word, or `None` when it
    /// falls outside the grid.
    #[must_use]
    pub fn cell(self, offset: usize) -> Option<Position> {
        let offset = i32::try_from(offset).ok()?;
        self.origin.step(self.direction, offset)
    }

    /// Returns the cells of a run of `len` letters, or `None` if any of them
    /// falls outside the grid.
    #[must_use]
    pub fn cells(self, len: usize) -> Option<Vec<Position>> {
        (0..len).map(|offset| self.cell(offset)).collect()
    }
}

/// A word placed on the grid with its clue number.
///
/// Built from a [`WordEntry`] once the generator has decided where it goes;
/// never mutated afterwards.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, PlacedWord, Placement, Position, WordEntry};
///
/// let entry = WordEntry::new("CAT".parse()?, "Feline");
/// let placement = Placement::new(Position::new(8, 10), Direction::Across);
/// let word = PlacedWord::new(entry, placement, 1).unwrap();
///
/// let cells: Vec<_> = word.cells().map(|(pos, letter)| (pos.x(), letter.as_char())).collect();
/// assert_eq!(cells, [(8, 'C'), (9, 'A'), (10, 'T')]);
///
/// // Runs leaving the grid are rejected
/// let entry = WordEntry::new("CAT".parse()?, "Feline");
/// let placement = Placement::new(Position::new(18, 0), Direction::Across);
/// assert!(PlacedWord::new(entry, placement, 1).is_none());
/// # Ok::<(), crossword_core::AnswerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    entry: WordEntry,
    placement: Placement,
    cells: Box<[Position]>,
    number: u16,
}

impl PlacedWord {
    /// Places `entry` at `placement` with clue `number`.
    ///
    /// Returns `None` if the run does not fit inside the grid.
    #[must_use]
    pub fn new(entry: WordEntry, placement: Placement, number: u16) -> Option<Self> {
        let cells = placement.cells(entry.answer.len())?.into_boxed_slice();
        Some(Self {
            entry,
            placement,
            cells,
            number,
        })
    }

    /// Returns the answer.
    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.entry.answer
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.entry.clue
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; see [`Answer::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.placement.origin
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.placement.direction
    }

    /// Returns the clue number.
    #[must_use]
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Returns `true` if this word starts at or passes through `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns an iterator over `(position, letter)` pairs along the run.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        self.cells
            .iter()
            .copied()
            .zip(self.entry.answer.letters().iter().copied())
    }
}
