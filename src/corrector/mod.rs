pub mod keyboard;
pub mod levenshtein;

use crate::dictionary::Dictionary;
use crate::wordlist;
use std::cmp::Ordering;

/// A scored replacement candidate produced for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Combined Levenshtein + keyboard-proximity score; lower is better.
    pub distance: f64,
    pub word: String,
}

/// Ranks dictionary words as replacements for a possibly misspelled word.
///
/// Borrows the dictionary it scores against; the dictionary must outlive the
/// corrector. All operations are pure in-memory computations.
pub struct Corrector<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Corrector<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Score every dictionary word within two characters of the query's
    /// length and return the ones under the distance cutoff, unsorted.
    ///
    /// The cutoff (`min_len + 1`) only caps the result set size. When every
    /// candidate in the length window misses it, the first word evaluated is
    /// kept anyway, so the result is empty only when the window itself is.
    pub fn suggest_corrections(&self, word: &str) -> Vec<Candidate> {
        let normalized = wordlist::normalize(word);
        let len = normalized.chars().count();
        let min_len = len.saturating_sub(2).max(1);
        let max_len = len + 2;
        let cutoff = (min_len + 1) as f64;

        let mut kept = Vec::new();
        let mut first: Option<Candidate> = None;

        for candidate in self.dictionary.words_of_length_range(min_len, max_len) {
            let distance = levenshtein::distance(&normalized, &candidate) as f64
                + keyboard::distance(&normalized, &candidate);
            if first.is_none() {
                first = Some(Candidate {
                    distance,
                    word: candidate.clone(),
                });
            }
            if distance <= cutoff {
                kept.push(Candidate {
                    distance,
                    word: candidate,
                });
            }
        }

        if kept.is_empty() {
            if let Some(fallback) = first {
                kept.push(fallback);
            }
        }
        kept
    }

    /// The best `top_n` candidate words, ordered by ascending distance with
    /// ties broken by descending dictionary frequency.
    ///
    /// `top_n == 0` yields an empty list; a `top_n` beyond the candidate
    /// count yields every candidate.
    pub fn top_suggestions(&self, corrections: &[Candidate], top_n: usize) -> Vec<String> {
        let mut ranked: Vec<&Candidate> = corrections.iter().collect();
        ranked.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    self.dictionary
                        .get_frequency(&b.word)
                        .cmp(&self.dictionary.get_frequency(&a.word))
                })
        });
        ranked
            .into_iter()
            .take(top_n)
            .map(|candidate| candidate.word.clone())
            .collect()
    }

    /// Convenience wrapper: score the word and return the best `top_n`
    /// replacements in one call.
    pub fn correct(&self, word: &str, top_n: usize) -> Vec<String> {
        let corrections = self.suggest_corrections(word);
        self.top_suggestions(&corrections, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        let mut dict = Dictionary::new("english");
        dict.add_word("cat", 100);
        dict.add_word("cats", 50);
        dict.add_word("hat", 30);
        dict
    }

    #[test]
    fn test_suggest_scores_close_words() {
        let dict = sample_dictionary();
        let corrector = Corrector::new(&dict);

        let corrections = corrector.suggest_corrections("cet");
        assert!(!corrections.is_empty());
        assert!(corrections.iter().any(|c| c.word == "cat"));

        let top = corrector.top_suggestions(&corrections, 2);
        assert_eq!(top[0], "cat");
    }

    #[test]
    fn test_tie_broken_by_frequency() {
        let mut dict = Dictionary::new("english");
        // 'd' and 'g' are both one key away from 'f', so "dat" and "gat"
        // score identically against "fat".
        dict.add_word("dat", 100);
        dict.add_word("gat", 30);
        let corrector = Corrector::new(&dict);

        let top = corrector.correct("fat", 2);
        assert_eq!(top, vec!["dat".to_string(), "gat".to_string()]);
    }

    #[test]
    fn test_empty_dictionary_yields_nothing() {
        let dict = Dictionary::new("english");
        let corrector = Corrector::new(&dict);

        let corrections = corrector.suggest_corrections("anything");
        assert!(corrections.is_empty());
        assert!(corrector.top_suggestions(&corrections, 5).is_empty());
    }

    #[test]
    fn test_fallback_keeps_one_candidate() {
        let mut dict = Dictionary::new("english");
        dict.add_word("zzzz", 1);
        let corrector = Corrector::new(&dict);

        // "aaa" is nowhere near "zzzz", every candidate misses the cutoff,
        // but the result still holds one word.
        let corrections = corrector.suggest_corrections("aaa");
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn test_length_window_prunes_candidates() {
        let mut dict = sample_dictionary();
        dict.add_word("catastrophe", 500);
        let corrector = Corrector::new(&dict);

        let corrections = corrector.suggest_corrections("cat");
        assert!(corrections.iter().all(|c| c.word != "catastrophe"));
    }

    #[test]
    fn test_top_n_limits() {
        let dict = sample_dictionary();
        let corrector = Corrector::new(&dict);
        let corrections = corrector.suggest_corrections("cat");

        assert!(corrector.top_suggestions(&corrections, 0).is_empty());
        assert!(corrector.top_suggestions(&corrections, 1).len() <= 1);
        let all = corrector.top_suggestions(&corrections, 100);
        assert_eq!(all.len(), corrections.len());
    }

    #[test]
    fn test_ranking_is_monotone() {
        let dict = sample_dictionary();
        let corrector = Corrector::new(&dict);
        let corrections = corrector.suggest_corrections("cta");
        let ranked = corrector.top_suggestions(&corrections, 10);

        let by_word = |w: &str| {
            corrections
                .iter()
                .find(|c| c.word == w)
                .map(|c| c.distance)
                .unwrap()
        };
        for pair in ranked.windows(2) {
            let (da, db) = (by_word(&pair[0]), by_word(&pair[1]));
            assert!(da <= db);
            if da == db {
                assert!(dict.get_frequency(&pair[0]) >= dict.get_frequency(&pair[1]));
            }
        }
    }

    #[test]
    fn test_correct_word_suggests_itself_first() {
        let dict = sample_dictionary();
        let corrector = Corrector::new(&dict);

        let top = corrector.correct("cat", 1);
        assert_eq!(top, vec!["cat".to_string()]);
    }

    #[test]
    fn test_input_is_normalized() {
        let dict = sample_dictionary();
        let corrector = Corrector::new(&dict);

        let top = corrector.correct("Cet!", 1);
        assert_eq!(top, vec!["cat".to_string()]);
    }
}
