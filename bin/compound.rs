use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compound_tokenizer::{Tokenizer, TokenizerConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "compound")]
#[command(about = "German compound word tokenizer", long_about = None)]
struct Args {
    /// Lexicon source file (one word per line)
    #[arg(long, env = "COMPOUND_DICT")]
    dict: PathBuf,

    /// Tokenizer configuration (JSON); defaults apply to missing fields
    #[arg(long, env = "COMPOUND_CONFIG")]
    config: Option<PathBuf>,

    /// Disable the compound split cache
    #[arg(long)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize text given as arguments, or stdin line by line
    Tokenize {
        text: Vec<String>,
    },
    /// Show how a single word is decomposed
    Split {
        word: String,
    },
    /// Inspect or modify the lexicon
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },
}

#[derive(Subcommand)]
enum DictAction {
    /// Add words, rebuilding the index after each one
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Remove words, rebuilding the index after each one
    Remove {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Check whether a word exists (exit code 1 if not)
    Contains { word: String },
    /// Rebuild the compiled index and rewrite the source file
    Rebuild,
    /// Show lexicon statistics
    Stats,
    /// List words, optionally restricted to a prefix
    List {
        #[arg(long, default_value = "")]
        prefix: String,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TokenizerConfig::from_json_file(path)?,
        None => TokenizerConfig::default(),
    };
    if args.no_cache {
        config.cache = false;
    }

    let tokenizer = Tokenizer::new(&args.dict, &config)
        .with_context(|| format!("loading lexicon {:?}", args.dict))?;
    info!(
        "compound v{}: {} words loaded",
        compound_tokenizer::VERSION,
        tokenizer.dictionary_word_count()
    );

    match args.command {
        Command::Tokenize { text } => tokenize(&tokenizer, &text),
        Command::Split { word } => {
            println!("{}", serde_json::to_string(&tokenizer.split(&word))?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Dict { action } => dict(&tokenizer, action),
    }
}

fn tokenize(tokenizer: &Tokenizer, text: &[String]) -> Result<ExitCode> {
    if !text.is_empty() {
        let tokens = tokenizer.tokenize(&text.join(" "));
        println!("{}", serde_json::to_string(&tokens)?);
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let tokens = tokenizer.tokenize(&line);
        writeln!(stdout, "{}", serde_json::to_string(&tokens)?)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn dict(tokenizer: &Tokenizer, action: DictAction) -> Result<ExitCode> {
    match action {
        DictAction::Add { words } => {
            for word in &words {
                if tokenizer.add_word(word)? {
                    println!("Added: {}", word);
                } else {
                    println!("Already present: {}", word);
                }
            }
            println!("Total words: {}", tokenizer.dictionary_word_count());
        }
        DictAction::Remove { words } => {
            for word in &words {
                if tokenizer.remove_word(word)? {
                    println!("Removed: {}", word);
                } else {
                    println!("Not present: {}", word);
                }
            }
            println!("Total words: {}", tokenizer.dictionary_word_count());
        }
        DictAction::Contains { word } => {
            if tokenizer.contains(&word) {
                println!("'{}' exists in dictionary", word);
            } else {
                println!("'{}' NOT in dictionary", word);
                return Ok(ExitCode::FAILURE);
            }
        }
        DictAction::Rebuild => {
            tokenizer.rebuild_dictionary()?;
            println!("Index rebuilt. Total words: {}", tokenizer.dictionary_word_count());
        }
        DictAction::Stats => {
            let lexicon = tokenizer.lexicon();
            println!("Dictionary: {:?}", lexicon.source_path());
            println!("Index: {:?}", lexicon.index_path());
            println!("Word count: {}", lexicon.word_count());
            println!("Cache enabled: {}", tokenizer.cache_enabled());
        }
        DictAction::List { prefix } => {
            let mut stdout = io::stdout().lock();
            for word in tokenizer.lexicon().words_with_prefix(&prefix) {
                writeln!(stdout, "{}", word)?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
