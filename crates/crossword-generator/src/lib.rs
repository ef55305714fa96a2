//! Crossword puzzle generation.
//!
//! [`PuzzleGenerator`] builds a random crossword from a [`Dictionary`]:
//!
//! 1. Shuffle the dictionary and take a target number of entries, drawn
//!    uniformly from the configured word range (5 to 10 by default).
//! 2. Place the first entry (the anchor) through the center of the grid, in a
//!    random direction.
//! 3. For every remaining entry, collect each way it can cross an
//!    already-placed word on a shared letter, shuffle those options and keep
//!    the first one the [`PlacementBoard`] accepts. Entries without a legal
//!    option are skipped.
//! 4. Number the placed words in reading order ([`Layout`]).
//!
//! The search is greedy: there is no backtracking, so a puzzle may end up with
//! fewer words than its target.
//!
//! Every puzzle is driven by a [`PuzzleSeed`]; generating twice from the same
//! seed and dictionary yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use crossword_core::Dictionary;
//! use crossword_generator::PuzzleGenerator;
//!
//! let dictionary = Dictionary::parse(
//!     "\
//! CAT:Feline
//! ACT:Deed
//! TAB:Bar bill
//! BAT:Cricket tool
//! ART:Gallery contents
//! ",
//! );
//! let generator = PuzzleGenerator::new(&dictionary);
//! let puzzle = generator.generate()?;
//!
//! assert!(!puzzle.layout.is_empty());
//! for word in &puzzle.layout {
//!     for (pos, letter) in word.cells() {
//!         assert_eq!(puzzle.solution.letter(pos), Some(letter));
//!     }
//! }
//! # Ok::<(), crossword_generator::GenerateError>(())
//! ```

use std::ops::RangeInclusive;

use crossword_core::{Dictionary, Direction, LetterGrid, Placement, WordEntry};

pub use self::{
    layout::{Layout, NumberingStyle},
    placement::{PlacementBoard, PlacementPolicy, anchor_placement, crossing_options},
    seed::{ParseSeedError, PuzzleSeed, SEED_LEN},
};

mod layout;
mod placement;
mod seed;

/// Default minimum number of words a puzzle aims for.
pub const MIN_WORDS: usize = 5;

/// Default maximum number of words a puzzle aims for.
pub const MAX_WORDS: usize = 10;

/// Error returned when no puzzle can be generated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum GenerateError {
    /// The dictionary has fewer entries than the minimum word count.
    #[display("cannot generate a puzzle from {available} word(s), at least {required} needed")]
    InsufficientPool {
        /// Number of dictionary entries.
        available: usize,
        /// Minimum number of entries.
        required: usize,
    },
    /// The first word cannot be placed through the center of the grid.
    #[display("cannot place {answer} at the center of the grid")]
    AnchorRejected {
        /// The rejected answer.
        answer: String,
    },
}

/// A generated crossword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully filled solution grid.
    pub solution: LetterGrid,
    /// The numbered placed words.
    pub layout: Layout,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Generates crosswords from a dictionary.
///
/// Configuration is builder style; the defaults follow the classic game:
/// 5 to 10 words, [`PlacementPolicy::Permissive`] and
/// [`NumberingStyle::PerWord`].
///
/// # Examples
///
/// ```
/// use crossword_core::Dictionary;
/// use crossword_generator::{
///     GenerateError, NumberingStyle, PlacementPolicy, PuzzleGenerator, PuzzleSeed,
/// };
///
/// let dictionary = Dictionary::parse("CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\n");
/// let generator = PuzzleGenerator::new(&dictionary)
///     .with_policy(PlacementPolicy::Strict)
///     .with_numbering(NumberingStyle::SharedOrigin);
///
/// // Same seed, same puzzle
/// let seed = PuzzleSeed::from_bytes([42; 32]);
/// assert_eq!(generator.generate_with_seed(seed)?, generator.generate_with_seed(seed)?);
///
/// // Too few words
/// let small = Dictionary::parse("CAT:Feline\nACT:Deed\n");
/// let err = PuzzleGenerator::new(&small).generate().unwrap_err();
/// assert_eq!(err, GenerateError::InsufficientPool { available: 2, required: 5 });
/// # Ok::<(), GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    dictionary: &'a Dictionary,
    policy: PlacementPolicy,
    numbering: NumberingStyle,
    word_range: RangeInclusive<usize>,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator drawing words from `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            policy: PlacementPolicy::default(),
            numbering: NumberingStyle::default(),
            word_range: MIN_WORDS..=MAX_WORDS,
        }
    }

    /// Sets the placement policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the numbering style.
    #[must_use]
    pub fn with_numbering(mut self, numbering: NumberingStyle) -> Self {
        self.numbering = numbering;
        self
    }

    /// Sets the range the target word count is drawn from.
    ///
    /// The start of the range is also the minimum dictionary size.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or starts at zero.
    #[must_use]
    pub fn with_word_range(mut self, word_range: RangeInclusive<usize>) -> Self {
        assert!(
            *word_range.start() > 0 && !word_range.is_empty(),
            "word range must be non-empty and start above zero"
        );
        self.word_range = word_range;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InsufficientPool`] if the dictionary is smaller
    /// than the minimum word count, and [`GenerateError::AnchorRejected`] if the
    /// first drawn word does not fit through the center of the grid.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        use rand::prelude::*;

        let required = *self.word_range.start();
        let available = self.dictionary.len();
        if available < required {
            return Err(GenerateError::InsufficientPool {
                available,
                required,
            });
        }

        let mut rng = seed.rng();
        let mut pool: Vec<&WordEntry> = self.dictionary.iter().collect();
        pool.shuffle(&mut rng);
        let target = rng.random_range(self.word_range.clone()).min(pool.len());
        let Some((anchor, rest)) = pool[..target].split_first() else {
            return Err(GenerateError::InsufficientPool {
                available,
                required,
            });
        };

        let direction = if rng.random_bool(0.5) {
            Direction::Across
        } else {
            Direction::Down
        };
        let mut board = PlacementBoard::new(self.policy);
        let anchor_placement = anchor_placement(anchor.answer().len(), direction)
            .filter(|placement| board.can_place(anchor.answer(), *placement))
            .ok_or_else(|| GenerateError::AnchorRejected {
                answer: anchor.answer().to_string(),
            })?;
        board.apply(anchor.answer(), anchor_placement);

        let mut placed: Vec<(WordEntry, Placement)> = vec![((*anchor).clone(), anchor_placement)];
        for entry in rest {
            let mut options = crossing_options(
                placed
                    .iter()
                    .map(|(entry, placement)| (entry.answer(), *placement)),
                entry.answer(),
            );
            options.shuffle(&mut rng);

            let Some(placement) = options
                .into_iter()
                .find(|placement| board.can_place(entry.answer(), *placement))
            else {
                log::debug!("no legal crossing for {}, skipping", entry.answer());
                continue;
            };
            board.apply(entry.answer(), placement);
            placed.push(((*entry).clone(), placement));
        }

        log::info!(
            "generated puzzle with {}/{} words from seed {seed}",
            placed.len(),
            target
        );
        Ok(GeneratedPuzzle {
            solution: board.into_letters(),
            layout: Layout::new(placed, self.numbering),
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crossword_core::{GRID_SIZE, Position};
    use proptest::prelude::*;

    use super::*;

    const WORDS: &str = "\
CAT:Feline
ACT:Deed
TAB:Bar bill
BAT:Cricket tool
ART:Gallery contents
RUST:Iron oxide
CARGO:Ship's load
CRATE:Wooden box
TRAIT:Characteristic
BORROW:Take temporarily
OWNER:Proprietor
THREAD:Sewing strand
MACRO:Large scale, as opposed to micro
MODULE:Self-contained unit
STRING:Cord
VECTOR:Quantity with direction
LIFETIME:Span of existence
COMPILER:Source translator
";

    fn dictionary() -> Dictionary {
        Dictionary::parse(WORDS)
    }

    fn seed(byte: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([byte; SEED_LEN])
    }

    /// Checks the layout/solution invariants every generated puzzle must hold.
    fn check_invariants(puzzle: &GeneratedPuzzle, dictionary: &Dictionary) -> Result<(), TestCaseError> {
        let words = puzzle.layout.words();
        prop_assert!((1..=MAX_WORDS).contains(&words.len()));

        // runs inside the grid and spelled on the solution
        for word in words {
            prop_assert_eq!(word.cells().len(), word.answer().len());
            for (pos, letter) in word.cells() {
                prop_assert!(pos.x() < GRID_SIZE && pos.y() < GRID_SIZE);
                prop_assert_eq!(puzzle.solution.letter(pos), Some(letter));
            }
        }

        // letter cells are exactly the covered cells
        for pos in Position::all() {
            let covered = words.iter().any(|word| word.covers(pos));
            prop_assert_eq!(puzzle.solution.is_letter(pos), covered, "cell {}", pos);
        }

        // shared cells are perpendicular crossings
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                let shared = a.cells().filter(|(pos, _)| b.covers(*pos)).count();
                if shared > 0 {
                    prop_assert_ne!(a.direction(), b.direction());
                    prop_assert_eq!(shared, 1);
                }
            }
        }

        // numbers 1..=k in reading order
        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(usize::from(word.number()), i + 1);
        }
        for pair in words.windows(2) {
            prop_assert!(pair[0].origin() <= pair[1].origin());
        }

        // answers come from the dictionary, no duplicates
        let mut seen = HashSet::new();
        for word in words {
            prop_assert!(seen.insert(word.answer().clone()));
            prop_assert!(
                dictionary
                    .iter()
                    .any(|entry| entry.answer() == word.answer() && entry.clue() == word.clue())
            );
        }
        Ok(())
    }

    #[test]
    fn test_generate_is_reproducible() {
        let dictionary = dictionary();
        let generator = PuzzleGenerator::new(&dictionary);
        let first = generator.generate_with_seed(seed(1)).unwrap();
        let second = generator.generate_with_seed(seed(1)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, seed(1));
    }

    #[test]
    fn test_anchor_passes_through_center() {
        let dictionary = dictionary();
        let generator = PuzzleGenerator::new(&dictionary);
        for byte in 0..32 {
            let puzzle = generator.generate_with_seed(seed(byte)).unwrap();
            let center = Position::CENTER;
            assert!(
                puzzle.layout.iter().any(|word| {
                    let expected = anchor_placement(word.len(), word.direction());
                    expected == Some(word.placement()) && word.covers(center)
                }),
                "no word anchored through the center for seed byte {byte}"
            );
        }
    }

    #[test]
    fn test_insufficient_pool() {
        let dictionary = Dictionary::parse("CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\n");
        let err = PuzzleGenerator::new(&dictionary).generate().unwrap_err();
        assert_eq!(
            err,
            GenerateError::InsufficientPool {
                available: 4,
                required: 5
            }
        );

        let empty = Dictionary::new();
        assert!(
            PuzzleGenerator::new(&empty)
                .generate()
                .unwrap_err()
                .is_insufficient_pool()
        );
    }

    #[test]
    fn test_pool_of_exactly_five_never_exceeds_five() {
        let dictionary = Dictionary::parse("CAT:a\nACT:b\nTAB:c\nBAT:d\nART:e\n");
        let generator = PuzzleGenerator::new(&dictionary);
        for byte in 0..64 {
            let puzzle = generator.generate_with_seed(seed(byte)).unwrap();
            assert!((1..=5).contains(&puzzle.layout.len()));
        }
    }

    #[test]
    fn test_anchor_longer_than_grid_fails() {
        let long = "ABCDEFGHIJKLMNOPQRSTU";
        let text: String = (0..5)
            .map(|i| format!("{}{}:too long\n", long, "XYZVW".chars().nth(i).unwrap()))
            .collect();
        let dictionary = Dictionary::parse(&text);
        assert_eq!(dictionary.len(), 5);

        let err = PuzzleGenerator::new(&dictionary).generate().unwrap_err();
        assert!(err.is_anchor_rejected());
    }

    #[test]
    fn test_with_word_range() {
        let dictionary = Dictionary::parse("CAT:a\nACT:b\n");
        let generator = PuzzleGenerator::new(&dictionary).with_word_range(1..=2);
        let puzzle = generator.generate_with_seed(seed(9)).unwrap();
        assert!((1..=2).contains(&puzzle.layout.len()));
    }

    #[test]
    #[should_panic(expected = "word range must be non-empty")]
    fn test_with_word_range_rejects_zero() {
        let dictionary = Dictionary::new();
        let _ = PuzzleGenerator::new(&dictionary).with_word_range(0..=3);
    }

    proptest! {
        #[test]
        fn test_permissive_invariants(bytes in any::<[u8; SEED_LEN]>()) {
            let dictionary = dictionary();
            let generator = PuzzleGenerator::new(&dictionary);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes)).unwrap();
            check_invariants(&puzzle, &dictionary)?;
        }

        #[test]
        fn test_strict_invariants(bytes in any::<[u8; SEED_LEN]>()) {
            let dictionary = dictionary();
            let generator = PuzzleGenerator::new(&dictionary).with_policy(PlacementPolicy::Strict);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes)).unwrap();
            check_invariants(&puzzle, &dictionary)?;

            // no word is extended by a letter before or after it
            for word in puzzle.layout.iter() {
                let len = i32::try_from(word.len()).unwrap();
                for pos in [word.origin().step(word.direction(), -1), word.origin().step(word.direction(), len)]
                    .into_iter()
                    .flatten()
                {
                    prop_assert!(!puzzle.solution.is_letter(pos));
                }
            }
        }

        #[test]
        fn test_shared_origin_numbering_has_no_gaps(bytes in any::<[u8; SEED_LEN]>()) {
            let dictionary = dictionary();
            let generator = PuzzleGenerator::new(&dictionary).with_numbering(NumberingStyle::SharedOrigin);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes)).unwrap();

            let origins: HashSet<_> = puzzle.layout.iter().map(|word| word.origin()).collect();
            let numbers: HashSet<_> = puzzle.layout.iter().map(|word| word.number()).collect();
            prop_assert_eq!(origins.len(), numbers.len());
            let max = puzzle.layout.iter().map(|word| word.number()).max().unwrap_or(0);
            prop_assert_eq!(usize::from(max), numbers.len());
            for word in puzzle.layout.iter() {
                prop_assert_eq!(puzzle.layout.clue_number_at(word.origin()), Some(word.number()));
            }
        }
    }
}
