//! Line-oriented terminal front end.
//!
//! Reads one command per line, applies it to the [`AppState`] and prints the
//! resulting messages and, when requested, the game screen. Malformed input
//! is reported and never reaches the game.

use std::io::{self, BufRead, Write};

use crate::{
    action::{Action, ParseActionError},
    action_handler,
    render,
    state::AppState,
};

const PROMPT: &str = "> ";

#[derive(Debug)]
pub struct CrosswordApp {
    app_state: AppState,
}

impl CrosswordApp {
    #[must_use]
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }

    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Runs the command loop until `quit` or the end of `input`.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        match &self.app_state.game {
            Some(game) => write!(output, "{}", render::GameView(game))?,
            None => writeln!(output, "No puzzle loaded. Type `new` to generate one.")?,
        }
        writeln!(output, "Type `help` for the list of commands.")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                break;
            };

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(ParseActionError::Empty) => continue,
                Err(err) => {
                    writeln!(output, "Error: {err}. Type `help` for the list of commands.")?;
                    continue;
                }
            };
            log::debug!("action: {action:?}");

            let effect = action_handler::handle(&mut self.app_state, action);
            for message in &effect.messages {
                writeln!(output, "{message}")?;
            }
            if effect.redraw_requested
                && let Some(game) = &self.app_state.game
            {
                write!(output, "{}", render::GameView(game))?;
            }
            if effect.quit_requested {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossword_core::Dictionary;
    use crossword_generator::PuzzleSeed;

    use super::*;
    use crate::game_factory::GameFactory;

    const WORDS: &str = "CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\n";

    fn run(app: &mut CrosswordApp, input: &str) -> String {
        let mut output = Vec::new();
        app.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn started_app() -> CrosswordApp {
        let factory = GameFactory::new(Dictionary::parse(WORDS)).with_reveal_probability(0.0);
        let mut app_state = AppState::new(factory);
        app_state
            .start_new_game(Some(PuzzleSeed::from_bytes([6; 32])))
            .unwrap();
        CrosswordApp::new(app_state)
    }

    #[test]
    fn reveal_all_then_quit() {
        let mut app = started_app();
        let output = run(&mut app, "reveal-all\nquit\nreveal-all\n");
        assert!(output.contains("Solved!"));
        assert!(app.app_state().game.as_ref().unwrap().is_solved());
    }

    #[test]
    fn malformed_input_is_reported() {
        let mut app = started_app();
        let before = app.app_state().game.clone();
        let output = run(&mut app, "\nguess one a cat\ndance\n");
        assert!(output.contains("Error: invalid clue number \"one\""));
        assert!(output.contains("Error: unknown command \"dance\""));
        assert_eq!(app.app_state().game, before);
    }

    #[test]
    fn missing_game_is_announced() {
        let mut app = CrosswordApp::new(AppState::new(GameFactory::new(Dictionary::new())));
        let output = run(&mut app, "new\n");
        assert!(output.starts_with("No puzzle loaded."));
        assert!(output.contains("Cannot generate a new puzzle"));
    }
}
