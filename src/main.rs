//! Spellfix - a corpus-driven spelling suggestion tool.
//!
//! # Overview
//!
//! This program suggests likely intended spellings for misspelled words by:
//! - Building a word-frequency model from a text corpus (once, at startup)
//! - Generating every candidate within one or two single-character edits
//! - Keeping only candidates that exist in the corpus vocabulary
//! - Ranking survivors by corpus probability
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  User Input     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CLI / REPL    │ ← Argument parsing, per-token loop (main.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Corrector     │ ← Candidate pool, probability ranking (corrector.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Edit Generator  │ ← One- and two-edit frontiers (edits.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Language Model  │ ← Corpus frequencies and probabilities (corpus.rs)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - `main.rs`: Entry point, argument handling, suggestion loop
//! - `corrector.rs`: Candidate selection and probability ranking
//! - `edits.rs`: Bounded edit-distance candidate generation
//! - `corpus.rs`: Corpus tokenization and the frequency/probability model
//! - `distance.rs`: Weighted minimum edit distance (diagnostic utility)
//! - `config.rs`: Persisted user configuration
//!
//! # Edit Distance Mode
//!
//! `--distance SOURCE TARGET` bypasses the corpus entirely and prints the
//! dynamic-programming grid plus the weighted distance between two strings.

use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

mod config;
mod corpus;
mod corrector;
mod distance;
mod edits;

use config::Config;
use corpus::LanguageModel;
use corrector::Corrector;
use distance::{min_edit_distance, EditCosts};

#[derive(Parser, Debug)]
#[command(name = "spellfix")]
#[command(about = "Corpus-driven spelling suggestion tool")]
#[command(version)]
struct Args {
    /// Words to check; reads lines from stdin when omitted
    words: Vec<String>,

    /// Custom corpus file path
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Do not count adjacent-letter swaps as a single edit
    #[arg(long)]
    no_transpose: bool,

    /// Print the edit-distance matrix for two strings and exit
    #[arg(long, num_args = 2, value_names = ["SOURCE", "TARGET"])]
    distance: Option<Vec<String>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(pair) = &args.distance {
        print_distance(&pair[0], &pair[1]);
        return Ok(());
    }

    let config = Config::load()?;

    // Persist defaults so users get a concrete config.toml on first run.
    if let Err(err) = config.save() {
        eprintln!("Failed to persist config defaults: {err}");
    }

    let top_n = args.top_n.unwrap_or(config.suggestion_count);
    let allow_transpose = config.allow_transpose && !args.no_transpose;

    let model = load_model(args.corpus.as_deref().or(config.corpus_path.as_deref()))?;
    let corrector = Corrector::with_settings(model, allow_transpose);

    if !args.words.is_empty() {
        for word in &args.words {
            suggest_tokens(&corrector, word, top_n);
        }
        return Ok(());
    }

    // Interactive mode: one line of input at a time until EOF.
    println!("Enter a word per line (Ctrl+D to quit).");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        suggest_tokens(&corrector, &line, top_n);
    }

    Ok(())
}

/// Build the language model from the given corpus file, or from the
/// embedded default corpus when no path is configured.
fn load_model(corpus_path: Option<&std::path::Path>) -> Result<LanguageModel, Box<dyn std::error::Error>> {
    let model = match corpus_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let model = LanguageModel::from_text(&text)?;
            println!(
                "Loaded corpus from {}: {} words, {} tokens",
                path.display(),
                model.word_count(),
                model.total_tokens()
            );
            model
        }
        None => {
            let model = LanguageModel::embedded()?;
            println!(
                "Using embedded corpus: {} words, {} tokens",
                model.word_count(),
                model.total_tokens()
            );
            model
        }
    };
    Ok(model)
}

/// Suggest corrections for every word token in `input` and print them.
///
/// Multi-word input is split the same way the corpus is tokenized, so
/// "teh quik" is handled token by token.
fn suggest_tokens(corrector: &Corrector, input: &str, top_n: usize) {
    for token in corpus::tokenize(input) {
        let suggestions = corrector.suggest(&token, top_n);

        if suggestions.is_empty() {
            println!("{}: no suggestions", token);
            continue;
        }

        println!("{}:", token);
        for suggestion in &suggestions {
            println!("  {:<20} {:.6}", suggestion.term, suggestion.probability);
        }
    }
}

/// Print the full DP grid and the resulting distance for two strings.
fn print_distance(source: &str, target: &str) {
    let matrix = min_edit_distance(source, target, EditCosts::default());

    for row in matrix.cells() {
        let line: Vec<String> = row.iter().map(|cell| format!("{:>3}", cell)).collect();
        println!("{}", line.join(" "));
    }
    println!(
        "edit distance '{}' -> '{}': {}",
        source,
        target,
        matrix.distance()
    );
}
