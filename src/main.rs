mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{warn, LevelFilter};

use cli::Cli;
use npchunk::chart;
use npchunk::chunk::{chunk_text, np_chunks};
use npchunk::grammar::Grammar;
use npchunk::parser::FileResult;
use npchunk::preprocess::preprocess;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };

    // RUST_LOG still wins over the flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_grammar(cli: &Cli) -> FileResult<Grammar> {
    let grammar = match &cli.grammar {
        Some(path) => Grammar::from_file(path)?,
        None => Grammar::english()?
    };

    let grammar = match &cli.start {
        Some(start) => grammar.with_start(start.clone()),
        None => grammar
    };
    if grammar.productions_for(&grammar.start_symbol).is_empty() {
        warn!("Start symbol `{}` has no rules, nothing can be parsed", grammar.start_symbol);
    }

    return Ok(grammar);
}

fn read_sentence(cli: &Cli) -> std::io::Result<String> {
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path);
    }

    print!("Sentence: ");
    std::io::stdout().flush()?;

    let mut sentence = String::new();
    std::io::stdin().read_line(&mut sentence)?;
    return Ok(sentence);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let grammar = match load_grammar(&cli) {
        Ok(grammar) => grammar,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };

    let sentence = match read_sentence(&cli) {
        Ok(sentence) => sentence,
        Err(error) => {
            eprintln!("Could not read sentence: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let tokens = preprocess(&sentence);
    for word in tokens.iter().filter(|word| !grammar.is_terminal_symbol(word)) {
        warn!("`{}` is not in the grammar's vocabulary", word);
    }

    let forest = chart::parse(&grammar, &tokens);
    if forest.is_empty() {
        println!("Could not parse sentence.");
        return ExitCode::SUCCESS;
    }

    for tree in &forest {
        println!("{:#}", tree);

        println!("Noun Phrase Chunks");
        for np in np_chunks(tree) {
            println!("{}", chunk_text(np));
        }
    }

    return ExitCode::SUCCESS;
}
