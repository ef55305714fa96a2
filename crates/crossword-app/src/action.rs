use std::str::FromStr;

use crossword_core::Direction;

pub const HELP: &str = "\
Commands:
  guess <number> <a|d> <answer>  check an answer for a clue
  reveal <number> [a|d]          show the answer of a clue
  reveal-all                     show the whole solution
  new                            start a new puzzle
  show                           print the grid and clues again
  help                           print this help
  quit                           leave the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Guess {
        number: u16,
        direction: Direction,
        answer: String,
    },
    Reveal {
        number: u16,
        direction: Option<Direction>,
    },
    RevealAll,
    NewPuzzle,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseActionError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {command:?}")]
    UnknownCommand {
        command: String,
    },
    #[display("missing {name} for {command:?}")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    #[display("invalid clue number {text:?}")]
    InvalidNumber {
        text: String,
    },
    #[display("invalid direction {text:?}, expected a(cross) or d(own)")]
    InvalidDirection {
        text: String,
    },
    #[display("unexpected argument {text:?}")]
    UnexpectedArgument {
        text: String,
    },
}

fn parse_number(text: &str) -> Result<u16, ParseActionError> {
    text.parse()
        .ok()
        .filter(|number| *number > 0)
        .ok_or_else(|| ParseActionError::InvalidNumber {
            text: text.to_owned(),
        })
}

fn parse_direction(text: &str) -> Result<Direction, ParseActionError> {
    match text.to_ascii_lowercase().as_str() {
        "a" | "across" => Ok(Direction::Across),
        "d" | "down" => Ok(Direction::Down),
        _ => Err(ParseActionError::InvalidDirection {
            text: text.to_owned(),
        }),
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ParseActionError::Empty);
        };
        let command = command.to_ascii_lowercase();

        let mut required = |command: &'static str, name: &'static str| {
            words
                .next()
                .ok_or(ParseActionError::MissingArgument { command, name })
        };
        let action = match command.as_str() {
            "guess" | "g" => {
                let number = parse_number(required("guess", "clue number")?)?;
                let direction = parse_direction(required("guess", "direction")?)?;
                let answer = required("guess", "answer")?.to_owned();
                Self::Guess {
                    number,
                    direction,
                    answer,
                }
            }
            "reveal" | "r" => {
                let number = parse_number(required("reveal", "clue number")?)?;
                let direction = words.next().map(parse_direction).transpose()?;
                Self::Reveal { number, direction }
            }
            "reveal-all" | "solve" => Self::RevealAll,
            "new" | "n" => Self::NewPuzzle,
            "show" | "s" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                return Err(ParseActionError::UnknownCommand {
                    command: command.clone(),
                });
            }
        };

        if let Some(extra) = words.next() {
            return Err(ParseActionError::UnexpectedArgument {
                text: extra.to_owned(),
            });
        }
        Ok(action)
    }
}
