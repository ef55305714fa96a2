use crossword_core::Direction;
use crossword_game::{GuessOutcome, RevealOutcome};

use crate::{
    action::{Action, HELP},
    state::AppState,
};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ActionEffect {
    pub messages: Vec<String>,
    pub redraw_requested: bool,
    pub quit_requested: bool,
}

impl ActionEffect {
    fn message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

const NO_GAME: &str = "No puzzle loaded. Type `new` to generate one.";

pub fn handle(app_state: &mut AppState, action: Action) -> ActionEffect {
    let mut effect = ActionEffect::default();

    match action {
        Action::Guess {
            number,
            direction,
            answer,
        } => guess(app_state, &mut effect, number, direction, &answer),
        Action::Reveal { number, direction } => reveal(app_state, &mut effect, number, direction),
        Action::RevealAll => match &mut app_state.game {
            Some(game) => {
                game.reveal_all();
                effect.redraw_requested = true;
            }
            None => effect.message(NO_GAME),
        },
        Action::NewPuzzle => match app_state.start_new_game(None) {
            Ok(game) => {
                effect.message(format!("New puzzle, seed {}", game.seed()));
                effect.redraw_requested = true;
            }
            Err(err) => {
                log::warn!("failed to generate a new puzzle: {err}");
                effect.message(format!("Cannot generate a new puzzle: {err}"));
            }
        },
        Action::Show => {
            if app_state.game.is_some() {
                effect.redraw_requested = true;
            } else {
                effect.message(NO_GAME);
            }
        }
        Action::Help => effect.message(HELP),
        Action::Quit => effect.quit_requested = true,
    }

    effect
}

fn guess(
    app_state: &mut AppState,
    effect: &mut ActionEffect,
    number: u16,
    direction: Direction,
    answer: &str,
) {
    let Some(game) = &mut app_state.game else {
        effect.message(NO_GAME);
        return;
    };
    match game.guess(number, direction, answer) {
        GuessOutcome::Correct => {
            effect.message("Correct!");
            effect.redraw_requested = true;
        }
        GuessOutcome::Incorrect => effect.message("Incorrect, try again."),
        GuessOutcome::UnknownClue => {
            effect.message(unknown_clue(number, Some(direction)));
        }
    }
}

fn reveal(
    app_state: &mut AppState,
    effect: &mut ActionEffect,
    number: u16,
    direction: Option<Direction>,
) {
    let Some(game) = &mut app_state.game else {
        effect.message(NO_GAME);
        return;
    };
    let outcome = match direction {
        Some(direction) => game.reveal_clue(number, direction),
        None => game.reveal(number),
    };
    match outcome {
        RevealOutcome::Revealed => effect.redraw_requested = true,
        RevealOutcome::UnknownClue => effect.message(unknown_clue(number, direction)),
    }
}

fn unknown_clue(number: u16, direction: Option<Direction>) -> String {
    match direction {
        Some(direction) => format!("There is no clue {number}{}.", direction.abbreviation()),
        None => format!("There is no clue {number}."),
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{Dictionary, Direction};
    use crossword_generator::PuzzleSeed;

    use super::{ActionEffect, handle};
    use crate::{action::Action, game_factory::GameFactory, state::AppState};

    const WORDS: &str = "CAT:Feline\nACT:Deed\nTAB:Bill\nBAT:Club\nART:Craft\n";

    fn started_state() -> AppState {
        let factory = GameFactory::new(Dictionary::parse(WORDS)).with_reveal_probability(0.0);
        let mut app_state = AppState::new(factory);
        app_state
            .start_new_game(Some(PuzzleSeed::from_bytes([4; 32])))
            .unwrap();
        app_state
    }

    fn first_clue(app_state: &AppState) -> (u16, Direction, String) {
        let word = &app_state.game.as_ref().unwrap().layout().words()[0];
        (word.number(), word.direction(), word.answer().to_string())
    }

    #[test]
    fn correct_guess_requests_redraw() {
        let mut app_state = started_state();
        let (number, direction, answer) = first_clue(&app_state);

        let effect = handle(
            &mut app_state,
            Action::Guess {
                number,
                direction,
                answer: answer.to_lowercase(),
            },
        );
        assert!(effect.redraw_requested);
        assert_eq!(effect.messages, ["Correct!"]);
    }

    #[test]
    fn wrong_guess_does_not_touch_game() {
        let mut app_state = started_state();
        let (number, direction, _) = first_clue(&app_state);
        let before = app_state.game.clone();

        let effect = handle(
            &mut app_state,
            Action::Guess {
                number,
                direction,
                answer: "QQQ".to_owned(),
            },
        );
        assert!(!effect.redraw_requested);
        assert_eq!(effect.messages, ["Incorrect, try again."]);
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn unknown_clue_is_reported() {
        let mut app_state = started_state();
        let before = app_state.game.clone();

        let effect = handle(
            &mut app_state,
            Action::Reveal {
                number: 99,
                direction: None,
            },
        );
        assert_eq!(effect.messages, ["There is no clue 99."]);
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn unknown_clue_names_direction() {
        let mut app_state = started_state();
        let before = app_state.game.clone();

        let effect = handle(
            &mut app_state,
            Action::Reveal {
                number: 99,
                direction: Some(Direction::Down),
            },
        );
        assert_eq!(effect.messages, ["There is no clue 99D."]);

        let effect = handle(
            &mut app_state,
            Action::Guess {
                number: 99,
                direction: Direction::Across,
                answer: "CAT".to_owned(),
            },
        );
        assert_eq!(effect.messages, ["There is no clue 99A."]);
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn reveal_all_solves_game() {
        let mut app_state = started_state();
        let effect = handle(&mut app_state, Action::RevealAll);
        assert!(effect.redraw_requested);
        assert!(app_state.game.as_ref().unwrap().is_solved());
    }

    #[test]
    fn failed_new_puzzle_keeps_game() {
        let mut app_state = started_state();
        app_state.factory = GameFactory::new(Dictionary::new());
        let before = app_state.game.clone();

        let effect = handle(&mut app_state, Action::NewPuzzle);
        assert!(!effect.redraw_requested);
        assert_eq!(effect.messages.len(), 1);
        assert!(effect.messages[0].starts_with("Cannot generate a new puzzle"));
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn actions_without_game_ask_for_new_puzzle() {
        let mut app_state = AppState::new(GameFactory::new(Dictionary::new()));
        for action in [
            Action::Show,
            Action::RevealAll,
            Action::Reveal {
                number: 1,
                direction: None,
            },
        ] {
            let effect = handle(&mut app_state, action);
            assert!(!effect.redraw_requested);
            assert_eq!(effect.messages.len(), 1);
        }
    }

    #[test]
    fn quit_and_help() {
        let mut app_state = started_state();
        assert_eq!(
            handle(&mut app_state, Action::Quit),
            ActionEffect {
                quit_requested: true,
                ..ActionEffect::default()
            }
        );
        let effect = handle(&mut app_state, Action::Help);
        assert!(effect.messages[0].starts_with("Commands:"));
    }
}
