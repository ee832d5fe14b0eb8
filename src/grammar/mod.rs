/*
    This module is for storing and looking up grammars
*/

mod english;

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use itertools::Itertools;

use crate::parser::{self, FileResult};

pub use english::{NONTERMINALS, TERMINALS};

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

// Only built from checked rule text, so every alternative has a symbol
#[derive(Debug, PartialEq)]
pub struct Grammar {
    pub start_symbol: String,
    pub(crate) rules: HashMap<String, Rewrite>,
    vocabulary: HashSet<String>,
}

impl Grammar {
    pub(crate) fn new(start_symbol: String, rules: HashMap<String, Rewrite>) -> Self {
        let vocabulary = rules.values()
            .flatten()
            .flatten()
            .filter_map(|symbol| match symbol {
                Symbol::Terminal(word) => Some(word.clone()),
                Symbol::Nonterminal(_) => None
            })
            .collect();

        Grammar {
            start_symbol,
            rules,
            vocabulary
        }
    }

    /// Builds a grammar from a block of terminal rules and a block of
    /// nonterminal rules. The first nonterminal rule names the start symbol.
    pub fn from_blocks(terminals: &str, nonterminals: &str) -> FileResult<Grammar> {
        parser::parse_blocks(terminals, nonterminals)
    }

    pub fn from_file(path: &PathBuf) -> FileResult<Grammar> {
        parser::parse_file(path)
    }

    /// The grammar for the Sherlock Holmes style sentences this tool was
    /// written for.
    pub fn english() -> FileResult<Grammar> {
        Self::from_blocks(TERMINALS, NONTERMINALS)
    }

    pub fn with_start(mut self, start_symbol: impl Into<String>) -> Self {
        self.start_symbol = start_symbol.into();
        self
    }

    // Undefined nonterminals have no alternatives
    pub fn productions_for(&self, nonterminal: &str) -> &[Alternative] {
        self.rules
            .get(nonterminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Whether `name` is a word of the grammar's vocabulary
    pub fn is_terminal_symbol(&self, name: &str) -> bool {
        self.vocabulary.contains(name)
    }

    // Nonterminals that appear on a right-hand side without ever being
    // defined, sorted so reports are stable
    pub fn undefined_nonterminals(&self) -> Vec<&str> {
        self.rules.values()
            .flatten()
            .flatten()
            .filter_map(|symbol| match symbol {
                Symbol::Nonterminal(name) => Some(name.as_str()),
                Symbol::Terminal(_) => None
            })
            .filter(|name| !self.rules.contains_key(*name))
            .unique()
            .sorted()
            .collect()
    }
}
