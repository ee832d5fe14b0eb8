use std::path::PathBuf;

use clap::Parser;

/// Parse a sentence and list its noun phrase chunks
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the sentence (default: ask on standard input)
    pub file: Option<PathBuf>,

    /// File containing the grammar (default: the built-in English grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: first rule in the grammar)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Log more, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8
}
