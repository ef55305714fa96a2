//! Clue dictionary loading.
//!
//! A dictionary file is plain UTF-8 text with one `ANSWER:CLUE` entry per line.
//! The answer is everything before the first colon and the clue everything
//! after it, both trimmed. Answers are normalized to upper case, clues are kept
//! verbatim.
//!
//! Lines are skipped (and logged at debug level) when they have no colon, when
//! the answer is not a valid [`Answer`] (whitespace, non-letters, fewer than two
//! letters), or when the answer already appeared on an earlier line.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Answer, AnswerError, WordEntry};

/// Error returned when a dictionary file cannot be read.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DictionaryError {
    /// The file could not be opened or read.
    #[display("failed to read dictionary {}: {source}", path.display())]
    Io {
        /// Path of the dictionary file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Reason a dictionary line was not turned into an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LineError {
    /// The line has no `:` separator.
    #[display("missing ':' separator")]
    MissingSeparator,
    /// The text before the separator is not a valid answer.
    #[display("{_0}")]
    InvalidAnswer(AnswerError),
}

/// The pool of `(answer, clue)` entries puzzles are generated from.
///
/// Answers are unique within a dictionary; when built from entries with
/// repeated answers the first occurrence wins.
///
/// # Examples
///
/// ```
/// use crossword_core::Dictionary;
///
/// let dictionary = Dictionary::parse(
///     "\
/// CAT: Feline
/// ACT: Deed
/// no separator here
/// ICE CREAM: Frozen dessert
/// cat: Duplicate of an earlier answer
/// ",
/// );
///
/// assert_eq!(dictionary.len(), 2);
/// assert_eq!(dictionary.entries()[1].answer().to_string(), "ACT");
/// assert_eq!(dictionary.entries()[1].clue(), "Deed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dictionary text, skipping malformed lines.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match parse_line(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::debug!("skipping dictionary line {}: {e}", i + 1);
                    None
                }
            });
        entries.collect()
    }

    /// Reads and parses the dictionary file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read or is not
    /// valid UTF-8.
    pub fn load<P>(path: P) -> Result<Self, DictionaryError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_owned(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        log::info!(
            "loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Returns the entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }
}

impl FromIterator<WordEntry> for Dictionary {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut seen = HashSet::new();
        let entries = iter
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.answer().clone());
                if !fresh {
                    log::debug!("skipping duplicate answer {}", entry.answer());
                }
                fresh
            })
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses a single `ANSWER:CLUE` line.
///
/// # Errors
///
/// Returns [`LineError`] if the line has no colon or the answer is invalid.
pub fn parse_line(line: &str) -> Result<WordEntry, LineError> {
    let (answer, clue) = line.split_once(':').ok_or(LineError::MissingSeparator)?;
    let answer = answer
        .trim()
        .parse::<Answer>()
        .map_err(LineError::InvalidAnswer)?;
    Ok(WordEntry::new(answer, clue.trim()))
}
