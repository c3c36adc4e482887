//! Suggestion ranking: turns a misspelled word into the most probable
//! corrections from the language model's vocabulary.

use crate::corpus::LanguageModel;
use crate::edits;
use ahash::AHashSet;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub term: String,
    pub probability: f64,
}

impl Suggestion {
    fn new(term: String, probability: f64) -> Self {
        Self { term, probability }
    }
}

/// The suggestion engine.
///
/// Owns an immutable [`LanguageModel`] built once at startup; every query
/// only reads from it, so a single `Corrector` can serve any number of
/// lookups without locking.
pub struct Corrector {
    model: LanguageModel,
    allow_transpose: bool,
}

impl Corrector {
    /// Create a corrector with transpositions enabled.
    pub fn new(model: LanguageModel) -> Self {
        Self::with_settings(model, true)
    }

    /// Create a corrector, choosing whether adjacent-swap edits count as
    /// one edit when building the candidate pool.
    pub fn with_settings(model: LanguageModel, allow_transpose: bool) -> Self {
        Self {
            model,
            allow_transpose,
        }
    }

    pub fn new_with_config(model: LanguageModel, config: &crate::config::Config) -> Self {
        Self::with_settings(model, config.allow_transpose)
    }

    /// The model this corrector ranks against.
    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    /// Suggest up to `top_n` corrections for `word`, most probable first.
    ///
    /// The input is trimmed and lowercased. A word already in the
    /// vocabulary is its own sole suggestion. Otherwise candidates one edit
    /// away are matched against the vocabulary, and only if none match does
    /// the search widen to two edits. Candidates are ranked by corpus
    /// probability, descending; equal probabilities are ordered
    /// lexicographically so results are reproducible.
    ///
    /// Degenerate inputs never fail: an empty or whitespace-only word,
    /// `top_n == 0`, or a word with no vocabulary match within two edits
    /// all yield an empty vec.
    pub fn suggest(&self, word: &str, top_n: usize) -> Vec<Suggestion> {
        let word = word.trim().to_lowercase();
        if word.is_empty() || top_n == 0 {
            return Vec::new();
        }

        let candidates = self.candidates(&word);

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .map(|term| {
                let probability = self.model.probability(&term);
                Suggestion::new(term, probability)
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.term.cmp(&b.term))
        });

        suggestions.truncate(top_n);
        suggestions
    }

    /// The candidate pool for a normalized word.
    ///
    /// Exact vocabulary hits short-circuit: no edit search runs for a
    /// correctly spelled word.
    fn candidates(&self, word: &str) -> AHashSet<String> {
        if self.model.contains(word) {
            let mut pool = AHashSet::new();
            pool.insert(word.to_string());
            return pool;
        }

        let one_edit: AHashSet<String> = edits::edits_within_one(word, self.allow_transpose)
            .into_iter()
            .filter(|candidate| self.model.contains(candidate))
            .collect();
        if !one_edit.is_empty() {
            return one_edit;
        }

        self.known_within_two(word)
    }

    /// Vocabulary words within two edits, found without materializing the
    /// full two-edit frontier.
    ///
    /// Walks each one-edit candidate and checks its own one-edit frontier
    /// against the vocabulary as it goes. Transpositions are enabled at both
    /// depths regardless of `allow_transpose`, matching
    /// [`edits::edits_within_two`].
    fn known_within_two(&self, word: &str) -> AHashSet<String> {
        let mut known = AHashSet::new();
        for candidate in edits::edits_within_one(word, true) {
            for second in edits::edits_within_one(&candidate, true) {
                if self.model.contains(&second) {
                    known.insert(second);
                }
            }
        }
        known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_model() -> LanguageModel {
        LanguageModel::from_counts([("the", 100u64), ("that", 10), ("this", 5)]).unwrap()
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let corrector = Corrector::new(small_model());
        let suggestions = corrector.suggest("the", 10);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].term, "the");
        assert!((suggestions[0].probability - 100.0 / 115.0).abs() < 1e-12);
    }

    #[test]
    fn test_one_edit_beats_two_edits() {
        // "th" is one insert away from "the" but two edits from "that" and
        // "this", so only "the" may appear even with room for more.
        let corrector = Corrector::new(small_model());
        let suggestions = corrector.suggest("th", 2);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].term, "the");
        assert!((suggestions[0].probability - 100.0 / 115.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_edit_fallback() {
        let model = LanguageModel::from_counts([("that", 10u64)]).unwrap();
        let corrector = Corrector::new(model);
        let suggestions = corrector.suggest("th", 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].term, "that");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let corrector = Corrector::new(small_model());
        assert!(corrector.suggest("zzzzzzzzzz", 10).is_empty());
    }

    #[test]
    fn test_blank_input_and_zero_top_n() {
        let corrector = Corrector::new(small_model());
        assert!(corrector.suggest("", 10).is_empty());
        assert!(corrector.suggest("   ", 10).is_empty());
        assert!(corrector.suggest("teh", 0).is_empty());
    }

    #[test]
    fn test_input_is_normalized() {
        let corrector = Corrector::new(small_model());
        let suggestions = corrector.suggest("  THE ", 3);
        assert_eq!(suggestions[0].term, "the");
    }

    #[test]
    fn test_ranked_by_probability_then_term() {
        let model =
            LanguageModel::from_counts([("cat", 5u64), ("bat", 5), ("hat", 9)]).unwrap();
        let corrector = Corrector::new(model);
        let suggestions = corrector.suggest("aat", 10);
        let terms: Vec<&str> = suggestions.iter().map(|s| s.term.as_str()).collect();
        // Highest probability first, ties broken lexicographically.
        assert_eq!(terms, vec!["hat", "bat", "cat"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let model =
            LanguageModel::from_counts([("cat", 5u64), ("bat", 5), ("hat", 9)]).unwrap();
        let corrector = Corrector::new(model);
        assert_eq!(corrector.suggest("aat", 2).len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let corrector = Corrector::new(small_model());
        assert_eq!(corrector.suggest("thes", 5), corrector.suggest("thes", 5));
    }

    #[test]
    fn test_transpose_toggle() {
        let with = Corrector::with_settings(
            LanguageModel::from_counts([("act", 3u64)]).unwrap(),
            true,
        );
        let suggestions = with.suggest("cat", 1);
        assert_eq!(suggestions[0].term, "act");

        // With transposition off at depth one, "act" is still reachable as
        // two single edits, so the fallback finds it.
        let without = Corrector::with_settings(
            LanguageModel::from_counts([("act", 3u64)]).unwrap(),
            false,
        );
        let suggestions = without.suggest("cat", 1);
        assert_eq!(suggestions[0].term, "act");
    }

    #[test]
    fn test_punctuated_word_degrades_to_empty() {
        let corrector = Corrector::new(small_model());
        assert!(corrector.suggest("th3!!", 10).is_empty());
    }
}
