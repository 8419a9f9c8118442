use std::collections::BTreeMap;

/// A single node in the prefix tree. A frequency of 0 means the node is only
/// a path prefix used by longer words; any positive value marks a complete
/// word with that frequency.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    frequency: u32,
    children: BTreeMap<char, TrieNode>,
}

/// Prefix tree mapping words to positive frequencies.
///
/// Each node exclusively owns its children, so `Clone` deep-copies the whole
/// tree and dropping the trie drops every node. Children are kept in a
/// `BTreeMap` so traversals are deterministic (lexicographic) across runs.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, overwriting any previously stored frequency.
    ///
    /// The empty word is permitted and sets the frequency on the root node.
    pub fn insert(&mut self, word: &str, frequency: u32) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.frequency == 0 && frequency > 0 {
            self.words += 1;
        } else if node.frequency > 0 && frequency == 0 {
            self.words -= 1;
        }
        node.frequency = frequency;
    }

    /// Remove a word, returning true if it was present as a complete word.
    ///
    /// Nodes left both childless and non-terminal are pruned, propagating
    /// back toward the root as long as ancestors also become prunable.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let removed = Self::remove_rec(&mut self.root, &chars);
        if removed {
            self.words -= 1;
        }
        removed
    }

    fn remove_rec(node: &mut TrieNode, chars: &[char]) -> bool {
        match chars.split_first() {
            None => {
                if node.frequency == 0 {
                    return false;
                }
                node.frequency = 0;
                true
            }
            Some((&ch, rest)) => {
                let child = match node.children.get_mut(&ch) {
                    Some(child) => child,
                    None => return false,
                };
                let removed = Self::remove_rec(child, rest);
                if removed && child.frequency == 0 && child.children.is_empty() {
                    node.children.remove(&ch);
                }
                removed
            }
        }
    }

    /// True iff the word is stored as a complete word. A word that only
    /// exists as a prefix of other stored words returns false.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.frequency > 0)
    }

    /// True iff some stored word starts with the prefix, regardless of
    /// whether the prefix itself is a complete word.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Every complete word reachable from the prefix, with its frequency,
    /// in depth-first lexicographic order. Empty if the prefix is absent.
    pub fn auto_complete(&self, prefix: &str) -> Vec<(String, u32)> {
        let mut words = Vec::new();
        if let Some(node) = self.walk(prefix) {
            let mut current = prefix.to_string();
            Self::collect_words(node, &mut current, &mut words);
        }
        words
    }

    /// Stored frequency of the word, or 0 if absent or only a prefix.
    pub fn get_frequency(&self, word: &str) -> u32 {
        self.walk(word).map_or(0, |node| node.frequency)
    }

    /// Number of complete words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect_words(node: &TrieNode, current: &mut String, words: &mut Vec<(String, u32)>) {
        if node.frequency > 0 {
            words.push((current.clone(), node.frequency));
        }
        for (&ch, child) in &node.children {
            current.push(ch);
            Self::collect_words(child, current, words);
            current.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_search() {
        let mut trie = Trie::new();
        trie.insert("cat", 100);
        trie.insert("cats", 50);

        assert!(trie.search("cat"));
        assert!(trie.search("cats"));
        assert!(!trie.search("ca"));
        assert!(!trie.search("dog"));
        assert_eq!(trie.get_frequency("cat"), 100);
        assert_eq!(trie.get_frequency("cats"), 50);
        assert_eq!(trie.get_frequency("ca"), 0);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_frequency() {
        let mut trie = Trie::new();
        trie.insert("dog", 5);
        trie.insert("dog", 9);
        assert_eq!(trie.get_frequency("dog"), 9);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_starts_with() {
        let mut trie = Trie::new();
        trie.insert("hello", 1);

        assert!(trie.starts_with(""));
        assert!(trie.starts_with("h"));
        assert!(trie.starts_with("hell"));
        assert!(trie.starts_with("hello"));
        assert!(!trie.starts_with("help"));
    }

    #[test]
    fn test_remove_prunes_dead_nodes() {
        let mut trie = Trie::new();
        trie.insert("do", 3);
        trie.insert("dog", 5);

        assert!(trie.remove("dog"));
        assert!(trie.search("do"));
        assert_eq!(trie.get_frequency("do"), 3);
        assert!(!trie.search("dog"));
        // The 'g' node had no children and zero frequency, so the path ends
        // at "do" again.
        assert!(!trie.starts_with("dog"));
        assert!(trie.starts_with("do"));
    }

    #[test]
    fn test_remove_keeps_shared_prefix_nodes() {
        let mut trie = Trie::new();
        trie.insert("car", 1);
        trie.insert("cart", 2);

        assert!(trie.remove("car"));
        assert!(!trie.search("car"));
        assert!(trie.search("cart"));
        assert!(trie.starts_with("car"));
    }

    #[test]
    fn test_remove_missing_word_is_noop() {
        let mut trie = Trie::new();
        trie.insert("cat", 1);

        assert!(!trie.remove("dog"));
        assert!(!trie.remove("ca"));
        assert!(trie.search("cat"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_auto_complete() {
        let mut trie = Trie::new();
        trie.insert("cat", 100);
        trie.insert("cats", 50);
        trie.insert("car", 30);
        trie.insert("dog", 20);

        let completions = trie.auto_complete("ca");
        assert_eq!(
            completions,
            vec![
                ("car".to_string(), 30),
                ("cat".to_string(), 100),
                ("cats".to_string(), 50),
            ]
        );

        assert!(trie.auto_complete("xyz").is_empty());
    }

    #[test]
    fn test_auto_complete_empty_prefix_round_trip() {
        let mut trie = Trie::new();
        let words = ["apple", "banana", "cherry", "date"];
        for (i, word) in words.iter().enumerate() {
            trie.insert(word, (i + 1) as u32);
        }

        let all = trie.auto_complete("");
        assert_eq!(all.len(), words.len());
        for (i, word) in words.iter().enumerate() {
            assert!(all.contains(&(word.to_string(), (i + 1) as u32)));
        }
    }

    #[test]
    fn test_empty_word_inserts_at_root() {
        let mut trie = Trie::new();
        trie.insert("", 7);
        assert!(trie.search(""));
        assert_eq!(trie.get_frequency(""), 7);
        assert!(trie.remove(""));
        assert!(!trie.search(""));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut trie = Trie::new();
        trie.insert("word", 1);

        let mut copy = trie.clone();
        copy.insert("other", 2);
        copy.remove("word");

        assert!(trie.search("word"));
        assert!(!trie.search("other"));
        assert!(copy.search("other"));
        assert!(!copy.search("word"));
    }
}
