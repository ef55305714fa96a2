//! Crossword terminal application.
//!
//! Generates a random crossword from a clue dictionary and lets the player
//! guess and reveal answers one command per line.

use std::{io, path::PathBuf};

use clap::Parser;
use crossword_app::{app::CrosswordApp, game_factory::GameFactory, state::AppState};
use crossword_core::Dictionary;
use crossword_game::REVEAL_PROBABILITY;
use crossword_generator::{NumberingStyle, PlacementPolicy, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Dictionary file with one `ANSWER: clue` entry per line.
    #[arg(long, value_name = "PATH", default_value = "words.txt")]
    dictionary: PathBuf,

    /// Seed of the first puzzle (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Reject placements that touch unrelated words.
    #[arg(long)]
    strict: bool,

    /// Give words starting in the same cell one shared number.
    #[arg(long)]
    shared_numbers: bool,

    /// Probability that a letter starts out revealed.
    #[arg(long, value_name = "P", default_value_t = REVEAL_PROBABILITY)]
    reveal_probability: f64,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let dictionary = Dictionary::load(&args.dictionary).unwrap_or_else(|err| {
        log::error!("{err}");
        Dictionary::new()
    });
    let policy = if args.strict {
        PlacementPolicy::Strict
    } else {
        PlacementPolicy::Permissive
    };
    let numbering = if args.shared_numbers {
        NumberingStyle::SharedOrigin
    } else {
        NumberingStyle::PerWord
    };
    let factory = GameFactory::new(dictionary)
        .with_policy(policy)
        .with_numbering(numbering)
        .with_reveal_probability(args.reveal_probability);

    let mut app_state = AppState::new(factory);
    if let Err(err) = app_state.start_new_game(args.seed) {
        eprintln!("Cannot generate a puzzle: {err}");
    }

    CrosswordApp::new(app_state).run(io::stdin().lock(), io::stdout().lock())
}
