use crate::CheckResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonWord {
    original: String,
    replacement: Option<String>,
    suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    corrected: String,
    changed_count: usize,
    words: Vec<JsonWord>,
}

pub fn print_result(result: &CheckResult, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_result(result, colored_output),
        OutputFormat::Json => print_json_result(result),
    }
}

/// Render the corrected sentence: kept words green, replacements red, with a
/// suggestion list below for every word that was changed.
fn print_text_result(result: &CheckResult, colored_output: bool) {
    if colored_output {
        let mut rendered = String::new();
        let mut idx = 0;
        for segment in result.corrected.split_word_bounds() {
            let report = result.words.get(idx);
            match report {
                Some(word) if segment == word.replacement.as_deref().unwrap_or(&word.original) => {
                    idx += 1;
                    if word.replacement.is_some() {
                        rendered.push_str(&segment.red().bold().to_string());
                    } else {
                        rendered.push_str(&segment.green().to_string());
                    }
                }
                _ => rendered.push_str(segment),
            }
        }
        println!("{}", rendered);
    } else {
        println!("{}", result.corrected);
    }

    for word in &result.words {
        if word.replacement.is_none() {
            continue;
        }

        if colored_output {
            let suggestions = word
                .suggestions
                .iter()
                .map(|s| s.green().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string());
            println!("  {} {} {}", word.original.red().bold(), "→".dimmed(), suggestions);
        } else {
            println!("  {} → {}", word.original, word.suggestions.join(", "));
        }
    }
}

fn print_json_result(result: &CheckResult) {
    let words: Vec<JsonWord> = result
        .words
        .iter()
        .map(|w| JsonWord {
            original: w.original.clone(),
            replacement: w.replacement.clone(),
            suggestions: w.suggestions.clone(),
        })
        .collect();

    let output = JsonOutput {
        corrected: result.corrected.clone(),
        changed_count: result.changed_count,
        words,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize result: {}", e),
    }
}

pub fn print_summary(changed_count: usize, colored: bool) {
    println!();
    if changed_count == 0 {
        if colored {
            println!("{}", "✓ No corrections needed!".green().bold());
        } else {
            println!("✓ No corrections needed!");
        }
    } else {
        let word = if changed_count == 1 {
            "correction"
        } else {
            "corrections"
        };
        if colored {
            println!(
                "{} {} {} applied",
                "✗".red().bold(),
                changed_count.to_string().red().bold(),
                word
            );
        } else {
            println!("✗ {} {} applied", changed_count, word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
