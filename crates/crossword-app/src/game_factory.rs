use crossword_core::Dictionary;
use crossword_game::{Game, REVEAL_PROBABILITY, clamp_probability};
use crossword_generator::{
    GenerateError, NumberingStyle, PlacementPolicy, PuzzleGenerator, PuzzleSeed,
};

/// Builds new games from the loaded dictionary and the command-line options.
#[derive(Debug, Clone)]
pub struct GameFactory {
    dictionary: Dictionary,
    policy: PlacementPolicy,
    numbering: NumberingStyle,
    reveal_probability: f64,
}

impl GameFactory {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            policy: PlacementPolicy::default(),
            numbering: NumberingStyle::default(),
            reveal_probability: REVEAL_PROBABILITY,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_numbering(mut self, numbering: NumberingStyle) -> Self {
        self.numbering = numbering;
        self
    }

    #[must_use]
    pub fn with_reveal_probability(mut self, probability: f64) -> Self {
        self.reveal_probability = clamp_probability(probability);
        self
    }

    /// Generates a game from `seed`, or from a fresh random seed.
    pub fn generate_game(&self, seed: Option<PuzzleSeed>) -> Result<Game, GenerateError> {
        let generator = PuzzleGenerator::new(&self.dictionary)
            .with_policy(self.policy)
            .with_numbering(self.numbering);
        let puzzle = match seed {
            Some(seed) => generator.generate_with_seed(seed)?,
            None => generator.generate()?,
        };
        Ok(Game::with_reveal_probability(
            puzzle,
            self.reveal_probability,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &str = "CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\nRUST:Oxide\n";

    #[test]
    fn same_seed_builds_same_game() {
        let factory = GameFactory::new(Dictionary::parse(WORDS))
            .with_policy(PlacementPolicy::Strict)
            .with_numbering(NumberingStyle::SharedOrigin);
        let seed = PuzzleSeed::from_bytes([8; 32]);

        let first = factory.generate_game(Some(seed)).unwrap();
        let second = factory.generate_game(Some(seed)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed(), seed);
    }

    #[test]
    fn reveal_probability_reaches_the_game() {
        let factory = GameFactory::new(Dictionary::parse(WORDS)).with_reveal_probability(1.5);
        let game = factory.generate_game(None).unwrap();
        assert!(game.is_solved());
    }

    #[test]
    fn empty_dictionary_cannot_generate() {
        let factory = GameFactory::new(Dictionary::new());
        assert!(
            factory
                .generate_game(None)
                .unwrap_err()
                .is_insufficient_pool()
        );
    }
}
