use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Normalize a word the way the dictionary stores it: lowercase, with every
/// non-alphabetic character stripped.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Parse a word-frequency source file.
///
/// The format is whitespace-separated `word frequency` pairs; a line may hold
/// any number of pairs, e.g. `apple 1532 banana 220`.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, u32)>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;
    parse_reader(BufReader::new(file))
}

/// Parse whitespace-separated `word frequency` pairs from any buffered
/// reader.
///
/// Words are normalized before being yielded. A token that is not followed by
/// a valid integer is silently dropped and the follower is retried as the
/// next word; a trailing word with no follower is dropped too.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<(String, u32)>> {
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;

    for line in reader.lines() {
        let line = line.context("Failed to read word list")?;
        for token in line.split_whitespace() {
            match pending.take() {
                None => pending = Some(token.to_string()),
                Some(word) => {
                    if let Ok(frequency) = token.parse::<u32>() {
                        let normalized = normalize(&word);
                        if !normalized.is_empty() {
                            pairs.push((normalized, frequency));
                        }
                    } else {
                        // Not a frequency; the token becomes the next word
                        // candidate and the unpaired one is dropped.
                        pending = Some(token.to_string());
                    }
                }
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello"), "hello");
        assert_eq!(normalize("don't"), "dont");
        assert_eq!(normalize("C3PO!"), "cpo");
        assert_eq!(normalize("1234"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_parse_pairs_across_lines() {
        let input = "apple 1532 banana 220\ncherry 87";
        let pairs = parse_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("apple".to_string(), 1532),
                ("banana".to_string(), 220),
                ("cherry".to_string(), 87),
            ]
        );
    }

    #[test]
    fn test_parse_drops_trailing_word_without_frequency() {
        let pairs = parse_reader(Cursor::new("apple 10 orphan")).unwrap();
        assert_eq!(pairs, vec![("apple".to_string(), 10)]);
    }

    #[test]
    fn test_parse_retries_unpaired_word() {
        // "typo" has no frequency; "banana 7" still parses.
        let pairs = parse_reader(Cursor::new("typo banana 7")).unwrap();
        assert_eq!(pairs, vec![("banana".to_string(), 7)]);
    }

    #[test]
    fn test_parse_normalizes_words() {
        let pairs = parse_reader(Cursor::new("Apple's 5")).unwrap();
        assert_eq!(pairs, vec![("apples".to_string(), 5)]);
    }

    #[test]
    fn test_parse_empty_source() {
        let pairs = parse_reader(Cursor::new("")).unwrap();
        assert!(pairs.is_empty());
    }
}
