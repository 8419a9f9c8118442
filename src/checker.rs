use crate::corrector::Corrector;
use crate::dictionary::Dictionary;
use crate::{CheckResult, Config, WordReport};
use anyhow::Result;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Sentence-level front end over the correction engine: splits input text
/// into word tokens, corrects each one independently, and reassembles the
/// text with replacements applied.
pub struct SpellChecker {
    dictionary: Dictionary,
    ignore_patterns: Vec<Regex>,
    max_suggestions: usize,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let mut dictionary = Dictionary::new(&config.language);

        match &config.dictionary {
            Some(path) => {
                if !dictionary.load_from_file(path) {
                    anyhow::bail!("Failed to load dictionary: {}", path.display());
                }
            }
            None => anyhow::bail!("No dictionary file configured. Pass --dict <FILE>."),
        }

        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self {
            dictionary,
            ignore_patterns,
            max_suggestions: config.max_suggestions,
        })
    }

    /// Build a checker around an already loaded dictionary.
    pub fn from_dictionary(dictionary: Dictionary, max_suggestions: usize) -> Self {
        Self {
            dictionary,
            ignore_patterns: Vec::new(),
            max_suggestions,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Correct every word of the text independently of its neighbors.
    ///
    /// Whitespace and punctuation pass through untouched. Each word token is
    /// either kept (already in the dictionary, ignored, or no suggestion
    /// available) or replaced by its top-ranked suggestion.
    pub fn check_text(&self, text: &str) -> CheckResult {
        let corrector = Corrector::new(&self.dictionary);
        let mut corrected = String::new();
        let mut words = Vec::new();
        let mut changed_count = 0;

        for segment in text.split_word_bounds() {
            if !segment.chars().any(|c| c.is_alphabetic()) || self.should_ignore(segment) {
                corrected.push_str(segment);
                continue;
            }

            if self.dictionary.check_word(segment) {
                corrected.push_str(segment);
                words.push(WordReport {
                    original: segment.to_string(),
                    replacement: None,
                    suggestions: Vec::new(),
                });
                continue;
            }

            let suggestions = corrector.correct(segment, self.max_suggestions);
            let replacement = suggestions
                .first()
                .filter(|top| top.as_str() != segment)
                .cloned();

            match &replacement {
                Some(top) => {
                    corrected.push_str(top);
                    changed_count += 1;
                }
                None => corrected.push_str(segment),
            }

            words.push(WordReport {
                original: segment.to_string(),
                replacement,
                suggestions,
            });
        }

        CheckResult {
            corrected,
            changed_count,
            words,
        }
    }

    fn should_ignore(&self, word: &str) -> bool {
        // Single characters are never worth correcting
        if word.chars().count() <= 1 {
            return true;
        }

        self.ignore_patterns.iter().any(|re| re.is_match(word))
    }
}
