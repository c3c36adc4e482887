//! Corpus loading and language model construction.
//!
//! This module turns raw corpus text into an immutable [`LanguageModel`]:
//! a vocabulary with per-word occurrence counts and the probability
//! distribution derived from them.
//!
//! # Corpus Format
//!
//! A corpus is arbitrary text. Words are maximal runs of word characters
//! (`\w+` semantics), lowercased; everything between them is discarded.
//! Frequencies are raw occurrence counts, probabilities are
//! `count / total_tokens`.
//!
//! # Embedded Corpus
//!
//! A small default corpus is embedded at compile time from
//! `corpus/default.txt` so the program works even when no corpus file is
//! supplied.
//!
//! # Lifecycle
//!
//! The model is built once at startup and never mutated afterwards. Queries
//! only read from it, so sharing it across threads needs no locking.

use ahash::AHashMap;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

// Embed the default corpus at compile time.
// If the file doesn't exist, this will fail at compile time with a clear error
const EMBEDDED_CORPUS: &str = include_str!("../corpus/default.txt");

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern must compile"))
}

/// Errors produced while building a language model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The corpus contained no words at all, so no probability
    /// distribution can be derived from it.
    #[error("corpus contains no words")]
    EmptyCorpus,
}

/// Split text into lowercase word tokens, in source order.
///
/// Tokens are maximal runs of alphanumeric/underscore characters; all other
/// characters act as separators and are dropped.
///
/// # Example
/// ```text
/// tokenize("The fox, the dog.") == ["the", "fox", "the", "dog"]
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// An immutable word-frequency model over a corpus.
///
/// Holds the vocabulary, the occurrence count of every word, and the
/// probability of every word. The three views are always consistent: the
/// vocabulary is exactly the key set of both tables.
#[derive(Debug)]
pub struct LanguageModel {
    /// Occurrence count per word.
    frequencies: AHashMap<String, u64>,
    /// `count / total_tokens` per word.
    probabilities: AHashMap<String, f64>,
    /// Sum of all occurrence counts.
    total_tokens: u64,
}

impl LanguageModel {
    /// Build a model from raw corpus text.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyCorpus`] if the text contains no words.
    pub fn from_text(text: &str) -> Result<Self, ModelError> {
        let mut frequencies = AHashMap::new();
        for word in tokenize(text) {
            *frequencies.entry(word).or_insert(0u64) += 1;
        }
        Self::from_frequency_table(frequencies)
    }

    /// Build a model from explicit (word, count) pairs.
    ///
    /// Counts for repeated words accumulate. Zero counts are ignored so the
    /// vocabulary never contains unreachable entries.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyCorpus`] if no pair has a positive count.
    pub fn from_counts<I, S>(counts: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut frequencies = AHashMap::new();
        for (word, count) in counts {
            if count > 0 {
                *frequencies.entry(word.into()).or_insert(0u64) += count;
            }
        }
        Self::from_frequency_table(frequencies)
    }

    /// Build the model over the embedded default corpus.
    ///
    /// # Errors
    /// Returns an error only if the embedded corpus is empty, which would be
    /// a packaging defect.
    pub fn embedded() -> Result<Self, ModelError> {
        Self::from_text(EMBEDDED_CORPUS)
    }

    fn from_frequency_table(frequencies: AHashMap<String, u64>) -> Result<Self, ModelError> {
        let total_tokens: u64 = frequencies.values().sum();
        if total_tokens == 0 {
            return Err(ModelError::EmptyCorpus);
        }

        let probabilities = frequencies
            .iter()
            .map(|(word, &count)| (word.clone(), count as f64 / total_tokens as f64))
            .collect();

        Ok(Self {
            frequencies,
            probabilities,
            total_tokens,
        })
    }

    /// Whether `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Probability of `word`, or 0.0 if it is not in the vocabulary.
    pub fn probability(&self, word: &str) -> f64 {
        self.probabilities.get(word).copied().unwrap_or(0.0)
    }

    /// Occurrence count of `word`, or 0 if it is not in the vocabulary.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words in the vocabulary.
    pub fn word_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Total number of word tokens seen in the corpus.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("The fox, the DOG.");
        assert_eq!(tokens, vec!["the", "fox", "the", "dog"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        let tokens = tokenize("file_name v2 (draft)");
        assert_eq!(tokens, vec!["file_name", "v2", "draft"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("... !!! ---").is_empty());
    }

    #[test]
    fn test_from_text_counts() {
        let model = LanguageModel::from_text("the cat and the dog").unwrap();
        assert_eq!(model.word_count(), 4);
        assert_eq!(model.total_tokens(), 5);
        assert_eq!(model.frequency("the"), 2);
        assert_eq!(model.frequency("cat"), 1);
        assert_eq!(model.frequency("zebra"), 0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = LanguageModel::from_text("a b b c c c").unwrap();
        let sum: f64 = ["a", "b", "c"].iter().map(|w| model.probability(w)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((model.probability("c") - 0.5).abs() < 1e-12);
        assert_eq!(model.probability("d"), 0.0);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        assert_eq!(
            LanguageModel::from_text("").unwrap_err(),
            ModelError::EmptyCorpus
        );
        assert_eq!(
            LanguageModel::from_text("!!! ???").unwrap_err(),
            ModelError::EmptyCorpus
        );
    }

    #[test]
    fn test_from_counts_ignores_zero_entries() {
        let model = LanguageModel::from_counts([("the", 3u64), ("ghost", 0)]).unwrap();
        assert!(model.contains("the"));
        assert!(!model.contains("ghost"));
        assert_eq!(model.total_tokens(), 3);
    }

    #[test]
    fn test_embedded_corpus_loads() {
        let model = LanguageModel::embedded().unwrap();
        assert!(model.word_count() > 0);
        assert!(model.contains("the"));
    }
}
