use crossword_game::Game;
use crossword_generator::{GenerateError, PuzzleSeed};

use crate::game_factory::GameFactory;

#[derive(Debug)]
pub struct AppState {
    pub game: Option<Game>,
    pub factory: GameFactory,
}

impl AppState {
    #[must_use]
    pub fn new(factory: GameFactory) -> Self {
        Self {
            game: None,
            factory,
        }
    }

    /// Replaces the current game with a freshly generated one.
    ///
    /// On failure the current game, if any, is kept.
    pub fn start_new_game(&mut self, seed: Option<PuzzleSeed>) -> Result<&Game, GenerateError> {
        let game = self.factory.generate_game(seed)?;
        Ok(self.game.insert(game))
    }
}
