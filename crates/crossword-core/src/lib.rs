//! Core data structures for crossword applications.
//!
//! This crate provides the value types shared by puzzle generation and game
//! management:
//!
//! 1. **Grid geometry**
//!    - [`position`]: cell coordinates on the fixed [`GRID_SIZE`] square grid,
//!      ordered in reading order
//!    - [`direction`]: [`Direction::Across`] / [`Direction::Down`]
//!    - [`grid`]: the generic [`Grid`] container and the solution [`LetterGrid`]
//!
//! 2. **Words**
//!    - [`letter`]: a single `A`-`Z` [`Letter`]
//!    - [`word`]: [`Answer`], dictionary [`WordEntry`], [`Placement`] and
//!      [`PlacedWord`]
//!
//! 3. **Dictionary source**
//!    - [`dictionary`]: the `ANSWER:CLUE` file format and [`Dictionary`]
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Dictionary, Direction, PlacedWord, Placement, Position};
//!
//! let dictionary = Dictionary::parse("CAT:Feline\nACT:Deed\n");
//! let entry = dictionary.entries()[0].clone();
//!
//! let word = PlacedWord::new(entry, Placement::new(Position::CENTER, Direction::Down), 1)
//!     .expect("fits inside the grid");
//! assert_eq!(word.cells().len(), 3);
//! ```

pub mod dictionary;
pub mod direction;
pub mod grid;
pub mod letter;
pub mod position;
pub mod word;

pub use self::{
    dictionary::{Dictionary, DictionaryError},
    direction::Direction,
    grid::{Grid, LetterGrid, ParseGridError},
    letter::Letter,
    position::{GRID_CELLS, GRID_SIZE, Position},
    word::{Answer, AnswerError, MIN_ANSWER_LEN, PlacedWord, Placement, WordEntry},
};
