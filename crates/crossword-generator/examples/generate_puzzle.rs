//! Example demonstrating crossword generation.
//!
//! This example shows how to:
//! - Load a dictionary and create a `PuzzleGenerator`
//! - Generate a random puzzle, or the puzzle of a given seed
//! - Display the solution, the numbered clues and the seed
//! - Sample many puzzles and keep the one with the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample puzzles in parallel and print the densest one (default budget: 1000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --densest --max-tries 1000
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use crossword_core::{Dictionary, Direction};
use crossword_generator::{
    GeneratedPuzzle, NumberingStyle, PlacementPolicy, PuzzleGenerator, PuzzleSeed,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Dictionary file with one `ANSWER: clue` entry per line.
    #[arg(long, value_name = "PATH", default_value = "assets/words.txt")]
    dictionary: PathBuf,

    /// Seed to generate from (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "densest")]
    seed: Option<PuzzleSeed>,

    /// Reject placements that touch unrelated words.
    #[arg(long)]
    strict: bool,

    /// Give words starting in the same cell one shared number.
    #[arg(long)]
    shared_numbers: bool,

    /// Keep the sampled puzzle with the most placed words.
    #[arg(long)]
    densest: bool,

    /// Maximum puzzles to sample with `--densest`.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let dictionary = match Dictionary::load(&args.dictionary) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

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
    let generator = PuzzleGenerator::new(&dictionary)
        .with_policy(policy)
        .with_numbering(numbering);

    let result = if args.densest {
        if args.max_tries == 0 {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        (0..args.max_tries)
            .into_par_iter()
            .filter_map(|_| generator.generate().ok())
            .max_by_key(|puzzle| puzzle.layout.len())
            .ok_or_else(|| "No puzzle could be generated.".to_owned())
    } else {
        let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
        generator
            .generate_with_seed(seed)
            .map_err(|err| err.to_string())
    };

    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
    println!();

    for direction in Direction::ALL {
        println!("{direction}:");
        for word in puzzle.layout.clues(direction) {
            println!("  {}. {} ({})", word.number(), word.clue(), word.answer());
        }
        println!();
    }

    println!("Words: {}", puzzle.layout.len());
}
