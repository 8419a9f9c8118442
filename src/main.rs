use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellfix::cli::output::{self, OutputFormat};
use spellfix::{checker, Config};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellfix")]
#[command(version, about = "A trie-backed spelling corrector", long_about = None)]
struct Cli {
    /// Text to correct (reads stdin when empty)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Word-frequency file to load the dictionary from
    #[arg(short, long, value_name = "FILE")]
    dict: Option<PathBuf>,

    /// Language tag for the dictionary (informational)
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum suggestions to keep per misspelled word
    #[arg(short, long)]
    top: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if corrections were made
    #[arg(long)]
    no_fail: bool,

    /// Pattern to ignore (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellfix", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load(cli.language, cli.dict, cli.ignore_pattern)?;
    if let Some(top) = cli.top {
        config.max_suggestions = top;
    }

    // Gather input text
    let text = if cli.text.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cli.text.join(" ")
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text to correct. Pass it as arguments or on stdin.");
    }

    // Correct the text
    let checker = checker::SpellChecker::new(&config)?;
    let result = checker.check_text(&text);

    let colored = !cli.no_color;
    output::print_result(&result, colored, &cli.format);
    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(result.changed_count, colored);
    }

    // Exit with appropriate code
    if result.changed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
