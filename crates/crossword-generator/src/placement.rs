//! Word placement on the solution grid.
//!
//! [`PlacementBoard`] owns the solution grid while a puzzle is being built. It
//! answers whether a word may go at a given [`Placement`] and writes accepted
//! words into the grid. [`anchor_placement`] and [`crossing_options`] produce
//! the candidate placements the generator tries.

use crossword_core::{Answer, Direction, Grid, LetterGrid, Placement, Position};

/// How strictly new words are checked against their neighbours.
///
/// Both policies require every letter to fit inside the grid, every shared
/// cell to hold the same letter, and shared cells to be crossed at a right
/// angle (a word never runs over another word going the same way).
///
/// ```text
/// Permissive allows:      Strict rejects both:
///
///   C A T                   C A T
///     R O W                   R O W    <- side by side
///     T                       T
///
///   C A T D O G             C A T D O G    <- head touches tail
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementPolicy {
    /// Words may touch along their sides or abut end to end.
    #[default]
    Permissive,
    /// The cells before the first and after the last letter must be blank, and
    /// every letter that is not a crossing must have blank neighbours on both
    /// sides.
    Strict,
}

/// Which directions pass through a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Coverage {
    across: bool,
    down: bool,
}

impl Coverage {
    fn contains(self, direction: Direction) -> bool {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn insert(&mut self, direction: Direction) {
        match direction {
            Direction::Across => self.across = true,
            Direction::Down => self.down = true,
        }
    }
}

/// The solution grid under construction.
///
/// # Examples
///
/// ```
/// use crossword_core::{Answer, Direction, Placement, Position};
/// use crossword_generator::{PlacementBoard, PlacementPolicy};
///
/// let cat: Answer = "CAT".parse()?;
/// let act: Answer = "ACT".parse()?;
///
/// let mut board = PlacementBoard::new(PlacementPolicy::Permissive);
/// assert!(board.place(&cat, Placement::new(Position::new(8, 10), Direction::Across)));
///
/// // ACT's `A` on CAT's `A`
/// let crossing = Placement::new(Position::new(9, 10), Direction::Down);
/// assert!(board.can_place(&act, crossing));
///
/// // ACT's `C` on CAT's `A` disagrees
/// let clash = Placement::new(Position::new(9, 9), Direction::Down);
/// assert!(!board.can_place(&act, clash));
/// # Ok::<(), crossword_core::AnswerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlacementBoard {
    letters: LetterGrid,
    coverage: Grid<Coverage>,
    policy: PlacementPolicy,
}

impl PlacementBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new(policy: PlacementPolicy) -> Self {
        Self {
            letters: LetterGrid::new(),
            coverage: Grid::default(),
            policy,
        }
    }

    /// Returns the solution grid built so far.
    #[must_use]
    pub fn letters(&self) -> &LetterGrid {
        &self.letters
    }

    /// Consumes the board and returns the solution grid.
    #[must_use]
    pub fn into_letters(self) -> LetterGrid {
        self.letters
    }

    /// Returns `true` if `answer` may be written at `placement`.
    #[must_use]
    pub fn can_place(&self, answer: &Answer, placement: Placement) -> bool {
        let Some(cells) = placement.cells(answer.len()) else {
            return false;
        };

        for (&pos, &letter) in cells.iter().zip(answer.letters()) {
            match self.letters[pos] {
                None => {}
                Some(existing) if existing == letter => {
                    if self.coverage[pos].contains(placement.direction) {
                        return false;
                    }
                }
                Some(_) => return false,
            }
        }

        match self.policy {
            PlacementPolicy::Permissive => true,
            PlacementPolicy::Strict => self.is_isolated(placement, &cells),
        }
    }

    /// Writes `answer` at `placement` if [`can_place`](Self::can_place)
    /// accepts it. Returns whether the word was written.
    pub fn place(&mut self, answer: &Answer, placement: Placement) -> bool {
        if !self.can_place(answer, placement) {
            return false;
        }
        self.apply(answer, placement);
        true
    }

    /// Writes `answer` at `placement` without checking legality.
    ///
    /// Cells outside the grid are ignored.
    pub(crate) fn apply(&mut self, answer: &Answer, placement: Placement) {
        for (offset, &letter) in answer.letters().iter().enumerate() {
            if let Some(pos) = placement.cell(offset) {
                self.letters[pos] = Some(letter);
                self.coverage[pos].insert(placement.direction);
            }
        }
    }

    fn is_isolated(&self, placement: Placement, cells: &[Position]) -> bool {
        let is_blank = |pos: Option<Position>| pos.is_none_or(|pos| !self.letters.is_letter(pos));

        let Ok(len) = i32::try_from(cells.len()) else {
            return false;
        };
        let before = placement.origin.step(placement.direction, -1);
        let after = placement.origin.step(placement.direction, len);
        if !is_blank(before) || !is_blank(after) {
            return false;
        }

        let side = placement.direction.perpendicular();
        cells
            .iter()
            .filter(|pos| !self.letters.is_letter(**pos))
            .all(|pos| is_blank(pos.step(side, -1)) && is_blank(pos.step(side, 1)))
    }
}

/// Returns the placement centering a word of `len` letters on the grid.
///
/// The origin is `(N/2 - len/2, N/2)` for [`Direction::Across`] and
/// `(N/2, N/2 - len/2)` for [`Direction::Down`]. Returns `None` when the word
/// is too long for that origin to exist; longer-than-grid words that still get
/// an origin are rejected later by [`PlacementBoard::can_place`].
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
/// use crossword_generator::anchor_placement;
///
/// let placement = anchor_placement(6, Direction::Across).unwrap();
/// assert_eq!(placement.origin, Position::new(7, 10));
/// ```
#[must_use]
pub fn anchor_placement(len: usize, direction: Direction) -> Option<Placement> {
    let half = i32::try_from(len / 2).ok()?;
    let origin = Position::CENTER.step(direction, -half)?;
    Some(Placement::new(origin, direction))
}

/// Enumerates every way `answer` can cross an already-placed word.
///
/// For each placed word `e` and each pair of indices `(i, j)` with
/// `e[i] == answer[j]`, the option runs perpendicular to `e` with letter `j`
/// on `e`'s cell `i`. Options whose origin would fall above or left of the
/// grid are dropped; all other legality checks are left to
/// [`PlacementBoard::can_place`].
pub fn crossing_options<'a, I>(placed: I, answer: &Answer) -> Vec<Placement>
where
    I: IntoIterator<Item = (&'a Answer, Placement)>,
{
    let mut options = Vec::new();
    for (existing, placement) in placed {
        let direction = placement.direction.perpendicular();
        for (i, existing_letter) in existing.letters().iter().enumerate() {
            let Some(cell) = placement.cell(i) else {
                continue;
            };
            for (j, letter) in answer.letters().iter().enumerate() {
                if letter != existing_letter {
                    continue;
                }
                let Ok(j) = i32::try_from(j) else {
                    continue;
                };
                if let Some(origin) = cell.step(direction, -j) {
                    options.push(Placement::new(origin, direction));
                }
            }
        }
    }
    options
}
