use crossword_core::{Direction, LetterGrid, PlacedWord, Position};
use crossword_generator::{GeneratedPuzzle, Layout, PuzzleSeed};

use crate::{
    DisplayCell, DisplayGrid, GuessOutcome, REVEAL_PROBABILITY, RevealOutcome, view,
};

const VIEW_SEED_LABEL: &str = "view";

/// A crossword game session.
///
/// Owns the solution, the numbered words and the player's view of the grid.
/// The solution and the layout never change; the view only gains revealed
/// letters through guesses and reveals.
///
/// # Example
///
/// ```
/// use crossword_core::{Dictionary, Direction};
/// use crossword_game::{Game, GuessOutcome};
/// use crossword_generator::PuzzleGenerator;
///
/// let dictionary = Dictionary::parse("CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\n");
/// let puzzle = PuzzleGenerator::new(&dictionary).generate()?;
/// let mut game = Game::new(puzzle);
///
/// let word = game.layout().words()[0].clone();
/// let outcome = game.guess(word.number(), word.direction(), &word.answer().to_string());
/// assert_eq!(outcome, GuessOutcome::Correct);
/// assert!(word.cells().all(|(pos, _)| game.cell(pos).is_revealed()));
///
/// game.reveal_all();
/// assert!(game.is_solved());
/// # Ok::<(), crossword_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    solution: LetterGrid,
    layout: Layout,
    seed: PuzzleSeed,
    display: DisplayGrid,
}

impl Game {
    /// Starts a game on `puzzle`, revealing each letter with the default
    /// [`REVEAL_PROBABILITY`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_reveal_probability(puzzle, REVEAL_PROBABILITY)
    }

    /// Starts a game on `puzzle`, revealing each letter with `probability`.
    ///
    /// The probability is clamped into `[0, 1]`. The initial view is drawn
    /// from a seed derived from the puzzle seed, so the same puzzle always
    /// starts with the same letters shown.
    #[must_use]
    pub fn with_reveal_probability(puzzle: GeneratedPuzzle, probability: f64) -> Self {
        let GeneratedPuzzle {
            solution,
            layout,
            seed,
        } = puzzle;
        let mut rng = seed.derive(VIEW_SEED_LABEL).rng();
        let display = view::project(&solution, probability, &mut rng);
        Self {
            solution,
            layout,
            seed,
            display,
        }
    }

    /// Returns what the player sees at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> DisplayCell {
        self.display[pos]
    }

    /// Returns the player's view of the whole grid.
    #[must_use]
    pub fn display(&self) -> &DisplayGrid {
        &self.display
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn solution(&self) -> &LetterGrid {
        &self.solution
    }

    /// Returns the numbered words of the puzzle.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the clue number printed at `pos`, if a word starts there.
    #[must_use]
    pub fn clue_number_at(&self, pos: Position) -> Option<u16> {
        self.layout.clue_number_at(pos)
    }

    /// Returns `true` if every letter of `word` is revealed.
    #[must_use]
    pub fn is_word_revealed(&self, word: &PlacedWord) -> bool {
        word.cells().all(|(pos, _)| self.display[pos].is_revealed())
    }

    /// Checks `candidate` against the answer of clue `(number, direction)`.
    ///
    /// The comparison ignores ASCII case and surrounding whitespace. A correct
    /// guess reveals the whole word; other outcomes leave the view unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use crossword_core::{Dictionary, Direction};
    /// use crossword_game::{Game, GuessOutcome};
    /// use crossword_generator::PuzzleGenerator;
    ///
    /// let dictionary = Dictionary::parse("CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\n");
    /// let mut game = Game::with_reveal_probability(PuzzleGenerator::new(&dictionary).generate()?, 0.0);
    /// let word = game.layout().words()[0].clone();
    ///
    /// assert_eq!(game.guess(word.number(), word.direction(), "XYZ"), GuessOutcome::Incorrect);
    /// assert!(!game.is_word_revealed(&word));
    /// assert_eq!(game.guess(99, Direction::Across, "CAT"), GuessOutcome::UnknownClue);
    /// # Ok::<(), crossword_generator::GenerateError>(())
    /// ```
    pub fn guess(&mut self, number: u16, direction: Direction, candidate: &str) -> GuessOutcome {
        let Some(word) = self.layout.find(number, direction) else {
            log::debug!("guess for unknown clue {number} {direction}");
            return GuessOutcome::UnknownClue;
        };
        if !word.answer().matches_guess(candidate) {
            log::debug!("incorrect guess for {number} {direction}");
            return GuessOutcome::Incorrect;
        }
        reveal_word(&mut self.display, word);
        GuessOutcome::Correct
    }

    /// Reveals the first word numbered `number`, whatever its direction.
    ///
    /// With shared numbering a number can name both an across and a down
    /// word; use [`reveal_clue`](Self::reveal_clue) to pick one.
    pub fn reveal(&mut self, number: u16) -> RevealOutcome {
        let Some(word) = self.layout.find_by_number(number) else {
            return RevealOutcome::UnknownClue;
        };
        reveal_word(&mut self.display, word);
        RevealOutcome::Revealed
    }

    /// Reveals the word of clue `(number, direction)`.
    pub fn reveal_clue(&mut self, number: u16, direction: Direction) -> RevealOutcome {
        let Some(word) = self.layout.find(number, direction) else {
            return RevealOutcome::UnknownClue;
        };
        reveal_word(&mut self.display, word);
        RevealOutcome::Revealed
    }

    /// Reveals every letter of the solution.
    pub fn reveal_all(&mut self) {
        self.display = view::reveal_all(&self.solution);
    }

    /// Returns `true` if no letter cell is hidden.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.display.iter().all(|(_, cell)| !cell.is_hidden())
    }
}

fn reveal_word(display: &mut DisplayGrid, word: &PlacedWord) {
    for (pos, letter) in word.cells() {
        display[pos] = DisplayCell::Revealed(letter);
    }
}
