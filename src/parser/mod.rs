/*
    This module reads grammar rule text
*/

mod lexer;

use std::collections::HashMap;
use std::path::PathBuf;

use itertools::Itertools;
use log::{info, warn};

use crate::grammar::*;
use crate::error_handling::*;
use lexer::*;

#[derive(Debug, thiserror::Error)]
pub enum GrammarErrorType {
    // A line which should contain a rule does not
    #[error("Expected `->` after nonterminal")]
    MissingArrow,
    // A rule has multiple arrows
    #[error("Unexpected `->` encountered")]
    UnexpectedArrow,
    // The user starts a rule line with something other than a nonterminal
    #[error("Tried to define something other than a nonterminal")]
    MissingNonterminal,
    // There is an unclosed quote
    #[error("Unmatched quotes")]
    UnmatchedQuote,
    // Nothing follows the arrow
    #[error("Rule has no right-hand side")]
    EmptyRewrite,
    // Two `|` with nothing between them, or one at either end
    #[error("Rule has an empty alternative")]
    EmptyAlternative,
    // There was an issue with reading a file
    #[error("File error: {0}")]
    FileError(std::io::Error),
}

impl ErrorType for GrammarErrorType {}

impl PartialEq for GrammarErrorType {
    fn eq(&self, other: &Self) -> bool {
        if let GrammarErrorType::FileError(a) = self {
            if let GrammarErrorType::FileError(b) = other {
                return a.kind() == b.kind();
            }
        }
        return std::mem::discriminant(self) == std::mem::discriminant(other);
    }
}

pub type GrammarError = Error<GrammarErrorType>;
pub type GrammarErrors = Errors<GrammarErrorType>;

fn io_error(error: std::io::Error, file: PathBuf) -> GrammarError {
    GrammarError {
        location: Location {
            file,
            line: 0
        },
        error: GrammarErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, GrammarErrorType>;
pub type LineResult<T> = std::result::Result<T, GrammarError>;
pub type FileResult<T> = std::result::Result<T, GrammarErrors>;

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Rewrite,
    location: Location
}

fn parse_alternative(tokens: &[Token]) -> Result<Alternative> {
    debug_assert!(!tokens.contains(&Token::Or), "rewrites are split on `|` before their alternatives are parsed");

    if tokens.is_empty() {
        return Err(GrammarErrorType::EmptyAlternative);
    }

    tokens.iter().map(|t| match t {
        Token::Nonterminal(s) => Ok(Symbol::Nonterminal(s.clone())),
        Token::Terminal(s) => Ok(Symbol::Terminal(s.clone())),
        // Only an arrow is left once the rewrite has been split
        Token::Arrow | Token::Or => Err(GrammarErrorType::UnexpectedArrow)
    }).collect()
}

fn parse_rewrite(tokens: &[Token]) -> Result<Rewrite> {
    if tokens.is_empty() {
        return Err(GrammarErrorType::EmptyRewrite);
    }

    tokens.split(|t| *t == Token::Or).map(parse_alternative).collect()
}

fn parse_line(tokens: &[Token], location: Location) -> Result<Rule> {
    debug_assert!(!tokens.is_empty(), "blank lines are skipped before rules are parsed");

    // Try to get the token the rule is for. The match returns a result which
    // is then unwrapped with the ? operator
    let symbol = match tokens.first() {
        Some(Token::Nonterminal(s)) => Ok(s.clone()),
        _ => Err(GrammarErrorType::MissingNonterminal)
    }?;

    if tokens.get(1) != Some(&Token::Arrow) {
        return Err(GrammarErrorType::MissingArrow)
    }

    let rewrite = parse_rewrite(&tokens[2..])?;

    return Ok(Rule {
        symbol,
        rewrite,
        location
    });
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<Rule> {
    lexer::lex_line(line)
        .and_then(|lexed_line| parse_line(&lexed_line, location.clone()))
        .map_err(|error| GrammarError { location: location, error })
}

fn is_rule_line(line: &str) -> bool {
    let line = line.trim_start();
    !line.is_empty() && !line.starts_with(';') && !line.starts_with('#')
}

// Parses every rule line of `text`. Line numbers in errors are 1-based and
// count the skipped lines too
fn parse_text(text: &str, file: &PathBuf) -> FileResult<Vec<Rule>> {
    let parsed_lines = text.lines()
        .enumerate()
        .filter(|(_, line)| is_rule_line(line))
        .map(|(num, line)| parse_lex_line(line, Location {
            file: file.clone(),
            line: num + 1
        }));

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition_result();
    if errors.len() > 0 {
        return Err(errors);
    }

    return Ok(rules);
}

// Merges the rules into a grammar. Rules for the same nonterminal keep the
// order their alternatives were written in
fn grammar_from_rules(rule_list: Vec<Rule>) -> Grammar {
    let start_symbol = match rule_list.first() {
        Some(rule) => rule.symbol.clone(),
        None => String::new()
    };

    let mut rules = HashMap::<String, Rewrite>::new();
    for rule in rule_list {
        rules.entry(rule.symbol).or_default().extend(rule.rewrite);
    }

    let grammar = Grammar::new(start_symbol, rules);

    info!(
        "Loaded grammar with {} nonterminals, {} alternatives, start symbol `{}`",
        grammar.rules.len(),
        grammar.rules.values().map(Vec::len).sum::<usize>(),
        grammar.start_symbol
    );
    for nonterminal in grammar.undefined_nonterminals() {
        warn!("Nonterminal `{}` is used but never defined; it will never match", nonterminal);
    }

    return grammar;
}

pub fn parse_blocks(terminals: &str, nonterminals: &str) -> FileResult<Grammar> {
    let nonterminal_rules = parse_text(nonterminals, &Location::block("nonterminals", 0).file);
    let terminal_rules = parse_text(terminals, &Location::block("terminals", 0).file);

    match (nonterminal_rules, terminal_rules) {
        (Ok(mut rules), Ok(terminal_rules)) => {
            rules.extend(terminal_rules);
            Ok(grammar_from_rules(rules))
        }
        (nonterminal_rules, terminal_rules) => Err(
            nonterminal_rules.err().into_iter()
                .chain(terminal_rules.err())
                .flatten()
                .collect_vec()
        )
    }
}

pub fn parse_file(path: &PathBuf) -> FileResult<Grammar> {
    let text = std::fs::read_to_string(path).map_err(|e| vec![io_error(e, path.clone())])?;
    let rules = parse_text(&text, path)?;

    return Ok(grammar_from_rules(rules));
}
