//! Crossword Interlock Generator
//!
//! Console front end for the interlock search engine. Takes a word list,
//! finds every unique crossword-style arrangement, and renders each one as
//! a character grid. Engine log messages and per-permutation progress
//! markers stream to stdout as the search runs.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use crossgen::{Event, FnSink, Solver};

/// Finds all unique crossword-style interlockings of a set of words.
#[derive(Parser)]
#[command(name = "crossgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the given words and print every unique layout.
    Solve {
        /// Words to interlock; comma- or space-separated, case-insensitive.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { words }) => {
            let words = normalize(&words.join(","));
            run_solver(&words);
        }
        None => run_interactive(),
    }
}

/// Splits raw input on commas and whitespace, trims, uppercases, keeps only
/// ASCII-alphabetic words, and drops duplicates while preserving order.
fn normalize(input: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for piece in input.split([',', ' ', '\t']) {
        let word = piece.trim().to_ascii_uppercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            continue;
        }
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Runs the engine on a normalized word list, streaming log output and
/// printing every unique solution grid.
fn run_solver(words: &[String]) {
    let solver = Solver::with_sink(FnSink(print_event));

    match solver.solve(words) {
        Ok(report) => {
            for (i, layout) in report.solutions.iter().enumerate() {
                println!();
                println!("Solution {}:", i + 1);
                print!("{}", layout.render());
            }
        }
        Err(error) => eprintln!("ERROR: {error}."),
    }
}

/// Prints engine log lines as they arrive; progress fragments stay on the
/// current line.
fn print_event(event: Event) {
    if let Event::Log(line) = event {
        if line.continuation {
            print!("{}", line.text);
            let _ = io::stdout().flush();
        } else {
            println!("{}", line.text);
        }
    }
}

/// Prompt loop: read a comma-separated word list per line, solve it, repeat
/// until an empty line.
fn run_interactive() {
    let stdin = io::stdin();

    loop {
        print_banner();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input).is_err() || input.trim().is_empty() {
            println!("Goodbye!");
            break;
        }

        let words = normalize(&input);
        if words.len() < 2 {
            println!("Input error. Try again.");
            continue;
        }

        run_solver(&words);
        println!();
    }
}

fn print_banner() {
    println!("+-------------------------------------+");
    println!("|                                     |");
    println!("| Welcome to the Crossword generator! |");
    println!("|                                     |");
    println!("+-------------------------------------+");
    println!();
    println!("Enter the words to interlock, separated by commas. Press 'Enter' to quit.");
    println!();
    print!(": ");
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_trims_and_uppercases() {
        assert_eq!(
            normalize("cat, act , dog"),
            vec!["CAT".to_string(), "ACT".to_string(), "DOG".to_string()]
        );
    }

    #[test]
    fn test_normalize_drops_duplicates_preserving_order() {
        assert_eq!(
            normalize("CAT,act,CAT,dog"),
            vec!["CAT".to_string(), "ACT".to_string(), "DOG".to_string()]
        );
    }

    #[test]
    fn test_normalize_rejects_non_alphabetic() {
        assert_eq!(normalize("c4t, , a-b, act"), vec!["ACT".to_string()]);
        assert!(normalize("  ,, ").is_empty());
    }
}
