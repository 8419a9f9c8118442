use crate::trie::Trie;
use crate::wordlist;
use std::ops::{Add, Sub};
use std::path::Path;

/// A word-frequency store backed by a [`Trie`], tagged with a free-form
/// language name (informational only, never enforced).
///
/// Every word is normalized (lowercased, non-alphabetic characters stripped)
/// on the way in, so lookups are case- and punctuation-insensitive. Cloning a
/// dictionary deep-copies its trie.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
    language: String,
}

impl Dictionary {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            trie: Trie::new(),
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Load `word frequency` pairs from a text file into the dictionary.
    ///
    /// Returns false only if the source cannot be opened or read; a file
    /// that parses to zero words is still a successful load. Existing words
    /// are kept, with reloaded frequencies overwriting stored ones.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let pairs = match wordlist::parse_file(path) {
            Ok(pairs) => pairs,
            Err(_) => return false,
        };

        for (word, frequency) in pairs {
            self.trie.insert(&word, frequency);
        }
        true
    }

    /// Normalize and insert a word. Words that normalize to the empty string
    /// (e.g. pure digits or punctuation) are skipped.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        let normalized = wordlist::normalize(word);
        if !normalized.is_empty() {
            self.trie.insert(&normalized, frequency);
        }
    }

    /// Normalize and remove a word, returning true if it was present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.trie.remove(&wordlist::normalize(word))
    }

    /// True iff the normalized word is stored as a complete word.
    pub fn check_word(&self, word: &str) -> bool {
        self.trie.search(&wordlist::normalize(word))
    }

    /// Frequency of the normalized word, or 0 if absent.
    pub fn get_frequency(&self, word: &str) -> u32 {
        self.trie.get_frequency(&wordlist::normalize(word))
    }

    /// Every complete word whose character count falls in
    /// `[min_len, max_len]` inclusive, in lexicographic order.
    pub fn words_of_length_range(&self, min_len: usize, max_len: usize) -> Vec<String> {
        self.trie
            .auto_complete("")
            .into_iter()
            .filter_map(|(word, _)| {
                let len = word.chars().count();
                (len >= min_len && len <= max_len).then_some(word)
            })
            .collect()
    }

    /// Every complete word starting with the prefix, with frequencies.
    pub fn auto_complete(&self, prefix: &str) -> Vec<(String, u32)> {
        self.trie.auto_complete(prefix)
    }

    /// Number of complete words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

/// `&dict + "word"` returns a new dictionary with the word added at
/// frequency 1; the receiver is untouched.
impl Add<&str> for &Dictionary {
    type Output = Dictionary;

    fn add(self, word: &str) -> Dictionary {
        let mut result = self.clone();
        result.add_word(word, 1);
        result
    }
}

/// `&dict - "word"` returns a new dictionary without the word.
impl Sub<&str> for &Dictionary {
    type Output = Dictionary;

    fn sub(self, word: &str) -> Dictionary {
        let mut result = self.clone();
        result.remove_word(word);
        result
    }
}

/// `&dict + &other` returns the union of both dictionaries. For a word in
/// both, the right-hand side's frequency wins.
impl Add<&Dictionary> for &Dictionary {
    type Output = Dictionary;

    fn add(self, other: &Dictionary) -> Dictionary {
        let mut result = self.clone();
        for (word, frequency) in other.auto_complete("") {
            result.add_word(&word, frequency);
        }
        result
    }
}
