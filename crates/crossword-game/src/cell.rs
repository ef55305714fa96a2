use std::fmt::{self, Display};

use crossword_core::Letter;

/// What the player sees in one cell of the grid.
///
/// # Example
///
/// ```
/// use crossword_core::Letter;
/// use crossword_game::DisplayCell;
///
/// let cell = DisplayCell::Revealed(Letter::from_char('A').unwrap());
/// assert!(cell.is_revealed());
/// assert!(!DisplayCell::Hidden.is_revealed());
/// assert_eq!(cell.to_string(), "A");
/// assert_eq!(DisplayCell::Hidden.to_string(), "_");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum DisplayCell {
    /// Not part of any word.
    #[default]
    Blank,
    /// A letter cell the player has not uncovered yet.
    Hidden,
    /// A letter cell showing its solution letter.
    Revealed(Letter),
}

impl DisplayCell {
    /// Returns the shown letter, if the cell is revealed.
    #[must_use]
    pub fn as_letter(self) -> Option<Letter> {
        match self {
            Self::Revealed(letter) => Some(letter),
            Self::Blank | Self::Hidden => None,
        }
    }
}

impl Display for DisplayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("."),
            Self::Hidden => f.write_str("_"),
            Self::Revealed(letter) => Display::fmt(letter, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_letter() {
        let a = Letter::from_char('a').unwrap();
        assert_eq!(DisplayCell::Revealed(a).as_letter(), Some(a));
        assert_eq!(DisplayCell::Hidden.as_letter(), None);
        assert_eq!(DisplayCell::Blank.as_letter(), None);
    }
}
