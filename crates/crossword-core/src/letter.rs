//! Crossword letter representation.

use std::fmt::{self, Display};

/// A single crossword letter in the range `A`-`Z`.
///
/// Letters are always stored in upper case. Lower-case input is normalized on
/// construction, every other character is rejected.
///
/// # Examples
///
/// ```
/// use crossword_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert_eq!(Letter::from_char('1'), None);
/// assert_eq!(Letter::from_char('É'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Array containing all 26 letters in alphabetical order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from an ASCII byte, normalizing lower case.
    ///
    /// Returns `None` if `byte` is not an ASCII letter.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Creates a letter from a character, normalizing lower case.
    ///
    /// Returns `None` for anything other than an ASCII letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Returns the upper-case character of this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the upper-case ASCII byte of this letter.
    #[must_use]
    pub const fn as_ascii(self) -> u8 {
        self.0
    }

    /// Returns the alphabet index (0 for `A`, 25 for `Z`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
