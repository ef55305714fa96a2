use std::fmt::{self, Display, Write as _};

use crossword_core::{Direction, Position};
use crossword_game::Game;

/// The grid, cropped to the letter cells.
///
/// Every cell takes three columns: the clue number (if a word starts there)
/// followed by `_` for hidden letters or the revealed letter. Blank cells are
/// left empty.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a>(pub &'a Game);

impl Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let Some((top_left, bottom_right)) = game.solution().bounding_box() else {
            return Ok(());
        };

        let mut line = String::new();
        for y in top_left.y()..=bottom_right.y() {
            line.clear();
            for x in top_left.x()..=bottom_right.x() {
                let pos = Position::new(x, y);
                let cell = game.cell(pos);
                if x > top_left.x() {
                    line.push(' ');
                }
                if cell.is_blank() {
                    line.push_str("   ");
                    continue;
                }
                match game.clue_number_at(pos) {
                    Some(number) => write!(line, "{number:>2}{cell}")?,
                    None => write!(line, "  {cell}")?,
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// The across and down clue lists.
///
/// Solved words show their answer after the clue.
#[derive(Debug, Clone, Copy)]
pub struct CluesView<'a>(pub &'a Game);

impl Display for CluesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        for direction in Direction::ALL {
            writeln!(f, "{direction}")?;
            for word in game.layout().clues(direction) {
                write!(
                    f,
                    "{:>4}. {} ({} letters)",
                    word.number(),
                    word.clue(),
                    word.len()
                )?;
                if game.is_word_revealed(word) {
                    write!(f, " {}", word.answer())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The whole game screen: grid, clues and the solved banner.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a>(pub &'a Game);

impl Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "{}", GridView(game))?;
        write!(f, "{}", CluesView(game))?;
        if game.is_solved() {
            write!(f, "\nSolved!\n")?;
        }
        Ok(())
    }
}
