//! Crossword game session.
//!
//! A [`Game`] is started from a generated puzzle. It keeps the solution hidden
//! behind a [`DisplayGrid`] where some letters start out revealed and the rest
//! are uncovered by correct guesses or explicit reveals.
//!
//! Unknown clues are reported through the operation outcomes
//! ([`GuessOutcome::UnknownClue`], [`RevealOutcome::UnknownClue`]) and never
//! modify the view.

mod cell;
mod game;
mod view;

pub use self::{
    cell::DisplayCell,
    game::Game,
    view::{DisplayGrid, REVEAL_PROBABILITY, clamp_probability, project, reveal_all},
};

/// Result of [`Game::guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GuessOutcome {
    /// The guess matched and the word is now revealed.
    #[display("correct")]
    Correct,
    /// The guess did not match.
    #[display("incorrect")]
    Incorrect,
    /// No word has the given number and direction.
    #[display("no such clue")]
    UnknownClue,
}

/// Result of [`Game::reveal`] and [`Game::reveal_clue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum RevealOutcome {
    /// The word is now revealed.
    #[display("revealed")]
    Revealed,
    /// No word has the given number (and direction).
    #[display("no such clue")]
    UnknownClue,
}
