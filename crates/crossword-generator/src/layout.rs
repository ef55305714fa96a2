//! Placed words and their clue numbers.

use crossword_core::{Direction, LetterGrid, PlacedWord, Placement, Position, WordEntry};

/// How clue numbers are assigned to placed words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum NumberingStyle {
    /// Every word gets its own number, even when an across and a down word
    /// start in the same cell.
    #[default]
    PerWord,
    /// Words starting in the same cell share one number, as in printed
    /// crosswords.
    SharedOrigin,
}

/// The numbered words of a puzzle, in reading order of their origin cells.
///
/// Clues are identified by `(number, direction)`; with
/// [`NumberingStyle::SharedOrigin`] a number alone may name two words.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Placement, Position, WordEntry};
/// use crossword_generator::{Layout, NumberingStyle};
///
/// let words = vec![
///     (
///         WordEntry::new("ACT".parse()?, "Deed"),
///         Placement::new(Position::new(9, 10), Direction::Down),
///     ),
///     (
///         WordEntry::new("CAT".parse()?, "Feline"),
///         Placement::new(Position::new(8, 10), Direction::Across),
///     ),
/// ];
/// let layout = Layout::new(words, NumberingStyle::PerWord);
///
/// let cat = layout.find(1, Direction::Across).unwrap();
/// assert_eq!(cat.answer().to_string(), "CAT");
/// assert_eq!(layout.clue_number_at(Position::new(9, 10)), Some(2));
/// # Ok::<(), crossword_core::AnswerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    words: Vec<PlacedWord>,
}

impl Layout {
    /// Numbers `placed` words in reading order of their origins.
    ///
    /// Words are stably sorted by origin `(y, x)`, so words sharing an origin
    /// keep their placement order. Placements that leave the grid are dropped.
    #[must_use]
    pub fn new(mut placed: Vec<(WordEntry, Placement)>, style: NumberingStyle) -> Self {
        placed.sort_by_key(|(_, placement)| placement.origin);

        let mut words = Vec::with_capacity(placed.len());
        let mut number = 0_u16;
        let mut previous_origin = None;
        for (entry, placement) in placed {
            let next = if style.is_shared_origin() && previous_origin == Some(placement.origin) {
                number
            } else {
                number + 1
            };
            let Some(word) = PlacedWord::new(entry, placement, next) else {
                log::warn!("dropping word placed outside the grid at {}", placement.origin);
                continue;
            };
            number = next;
            previous_origin = Some(placement.origin);
            words.push(word);
        }
        Self { words }
    }

    /// Returns the placed words in numbering order.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Returns the number of placed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the placed words in numbering order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedWord> {
        self.words.iter()
    }

    /// Returns the word identified by `(number, direction)`.
    #[must_use]
    pub fn find(&self, number: u16, direction: Direction) -> Option<&PlacedWord> {
        self.words
            .iter()
            .find(|word| word.number() == number && word.direction() == direction)
    }

    /// Returns the first word with `number`, whatever its direction.
    #[must_use]
    pub fn find_by_number(&self, number: u16) -> Option<&PlacedWord> {
        self.words.iter().find(|word| word.number() == number)
    }

    /// Returns the clue number printed in the cell at `pos`, if a word starts
    /// there.
    #[must_use]
    pub fn clue_number_at(&self, pos: Position) -> Option<u16> {
        self.words
            .iter()
            .find(|word| word.origin() == pos)
            .map(PlacedWord::number)
    }

    /// Returns the words running in `direction`, in numbering order.
    pub fn clues(&self, direction: Direction) -> impl Iterator<Item = &PlacedWord> {
        self.words
            .iter()
            .filter(move |word| word.direction() == direction)
    }

    /// Builds the solution grid spelled by the placed words.
    #[must_use]
    pub fn letter_grid(&self) -> LetterGrid {
        let mut grid = LetterGrid::new();
        for (pos, letter) in self.words.iter().flat_map(|word| word.cells()) {
            grid[pos] = Some(letter);
        }
        grid
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a PlacedWord;
    type IntoIter = std::slice::Iter<'a, PlacedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(answer: &str) -> WordEntry {
        WordEntry::new(answer.parse().unwrap(), format!("clue for {answer}"))
    }

    fn placed(answer: &str, x: u8, y: u8, direction: Direction) -> (WordEntry, Placement) {
        (entry(answer), Placement::new(Position::new(x, y), direction))
    }

    fn summary(layout: &Layout) -> Vec<(u16, String, Direction)> {
        layout
            .iter()
            .map(|word| (word.number(), word.answer().to_string(), word.direction()))
            .collect()
    }

    #[test]
    fn test_numbers_follow_reading_order() {
        let layout = Layout::new(
            vec![
                placed("CAT", 8, 10, Direction::Across),
                placed("TAB", 10, 10, Direction::Down),
                placed("ACT", 9, 9, Direction::Down),
                placed("BAT", 3, 12, Direction::Across),
            ],
            NumberingStyle::PerWord,
        );

        assert_eq!(
            summary(&layout),
            [
                (1, "ACT".to_owned(), Direction::Down),
                (2, "CAT".to_owned(), Direction::Across),
                (3, "TAB".to_owned(), Direction::Down),
                (4, "BAT".to_owned(), Direction::Across),
            ]
        );
    }

    #[test]
    fn test_per_word_numbering_splits_shared_origin() {
        let layout = Layout::new(
            vec![
                placed("CAT", 8, 10, Direction::Across),
                placed("COT", 8, 10, Direction::Down),
                placed("ART", 2, 3, Direction::Across),
            ],
            NumberingStyle::PerWord,
        );

        assert_eq!(
            summary(&layout),
            [
                (1, "ART".to_owned(), Direction::Across),
                (2, "CAT".to_owned(), Direction::Across),
                (3, "COT".to_owned(), Direction::Down),
            ]
        );
        assert_eq!(layout.clue_number_at(Position::new(8, 10)), Some(2));
        assert_eq!(layout.find_by_number(3).map(PlacedWord::direction), Some(Direction::Down));
    }

    #[test]
    fn test_shared_origin_numbering() {
        let layout = Layout::new(
            vec![
                placed("COT", 8, 10, Direction::Down),
                placed("CAT", 8, 10, Direction::Across),
                placed("ART", 2, 3, Direction::Across),
                placed("TO", 10, 12, Direction::Across),
            ],
            NumberingStyle::SharedOrigin,
        );

        assert_eq!(
            summary(&layout),
            [
                (1, "ART".to_owned(), Direction::Across),
                (2, "COT".to_owned(), Direction::Down),
                (2, "CAT".to_owned(), Direction::Across),
                (3, "TO".to_owned(), Direction::Across),
            ]
        );
        assert_eq!(
            layout.find(2, Direction::Across).map(|w| w.answer().to_string()),
            Some("CAT".to_owned())
        );
        // first match in numbering order
        assert_eq!(
            layout.find_by_number(2).map(|w| w.answer().to_string()),
            Some("COT".to_owned())
        );
    }

    #[test]
    fn test_lookup_misses() {
        let layout = Layout::new(
            vec![placed("CAT", 8, 10, Direction::Across)],
            NumberingStyle::PerWord,
        );
        assert!(layout.find(1, Direction::Down).is_none());
        assert!(layout.find(2, Direction::Across).is_none());
        assert!(layout.find_by_number(0).is_none());
        assert_eq!(layout.clue_number_at(Position::new(9, 10)), None);
    }

    #[test]
    fn test_out_of_grid_words_are_dropped() {
        let layout = Layout::new(
            vec![
                placed("CAT", 18, 0, Direction::Across),
                placed("DOG", 0, 5, Direction::Down),
            ],
            NumberingStyle::PerWord,
        );
        assert_eq!(summary(&layout), [(1, "DOG".to_owned(), Direction::Down)]);
    }

    #[test]
    fn test_clues_and_letter_grid() {
        let layout = Layout::new(
            vec![
                placed("CAT", 8, 10, Direction::Across),
                placed("ACT", 9, 10, Direction::Down),
            ],
            NumberingStyle::PerWord,
        );
        let across: Vec<_> = layout.clues(Direction::Across).map(PlacedWord::number).collect();
        let down: Vec<_> = layout.clues(Direction::Down).map(PlacedWord::number).collect();
        assert_eq!(across, [1]);
        assert_eq!(down, [2]);

        let grid = layout.letter_grid();
        assert_eq!(grid.letter_count(), 5);
        assert_eq!(grid.letter(Position::new(9, 12)).map(|l| l.as_char()), Some('T'));
    }
}
