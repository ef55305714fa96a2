//! The player's view of the grid.

use crossword_core::{Grid, LetterGrid};
use rand_pcg::Pcg64;

use crate::DisplayCell;

/// Default probability that a letter cell starts out revealed.
pub const REVEAL_PROBABILITY: f64 = 0.18;

/// The grid as shown to the player.
pub type DisplayGrid = Grid<DisplayCell>;

/// Clamps `probability` into `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Projects the solution grid onto a fresh display grid.
///
/// Blank solution cells stay blank. Each letter cell is independently revealed
/// with `probability` (clamped into `[0, 1]`) and hidden otherwise.
///
/// # Example
///
/// ```
/// use crossword_core::LetterGrid;
/// use crossword_game::project;
/// use crossword_generator::PuzzleSeed;
///
/// let solution: LetterGrid = format!("CAT{}", ".".repeat(397)).parse()?;
/// let mut rng = PuzzleSeed::from_bytes([0; 32]).rng();
///
/// let all_hidden = project(&solution, 0.0, &mut rng);
/// assert_eq!(all_hidden.iter().filter(|(_, cell)| cell.is_hidden()).count(), 3);
///
/// let all_shown = project(&solution, 1.0, &mut rng);
/// assert!(all_shown.iter().all(|(pos, cell)| cell.as_letter() == solution[pos]));
/// # Ok::<(), crossword_core::ParseGridError>(())
/// ```
#[must_use]
pub fn project(solution: &LetterGrid, probability: f64, rng: &mut Pcg64) -> DisplayGrid {
    use rand::prelude::*;

    let probability = clamp_probability(probability);
    DisplayGrid::from_fn(|pos| match solution[pos] {
        None => DisplayCell::Blank,
        Some(letter) if rng.random_bool(probability) => DisplayCell::Revealed(letter),
        Some(_) => DisplayCell::Hidden,
    })
}

/// Builds the display grid with every letter of `solution` revealed.
#[must_use]
pub fn reveal_all(solution: &LetterGrid) -> DisplayGrid {
    solution.map(|cell| cell.map_or(DisplayCell::Blank, DisplayCell::Revealed))
}
