pub mod checker;
pub mod cli;
pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod trie;
pub mod wordlist;

pub use checker::SpellChecker;
pub use config::Config;
pub use corrector::{Candidate, Corrector};
pub use dictionary::Dictionary;
pub use trie::Trie;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub corrected: String,
    pub changed_count: usize,
    pub words: Vec<WordReport>,
}

#[derive(Debug, Clone)]
pub struct WordReport {
    pub original: String,
    pub replacement: Option<String>,
    pub suggestions: Vec<String>,
}
