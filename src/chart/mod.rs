/*
    This module finds every parse of a sentence
*/

use std::collections::HashMap;
use std::iter::once;
use std::rc::Rc;

use itertools::Itertools;
use log::{debug, trace};

use crate::grammar::*;
use crate::tree::ParseNode;

// Every tree of one sentence. Empty when the sentence has no derivation
pub type Forest = Vec<ParseNode>;

// Parses of one nonterminal over one span of the sentence
type Cell = Rc<Forest>;

struct Chart<'g, 't> {
    grammar: &'g Grammar,
    tokens: Vec<&'t str>,
    cells: HashMap<(&'g str, usize, usize), Cell>,
}

impl<'g, 't> Chart<'g, 't> {
    fn symbol_parses(&mut self, symbol: &'g Symbol, start: usize, end: usize) -> Cell {
        match symbol {
            Symbol::Terminal(word) => {
                if end == start + 1 && self.tokens[start] == word.as_str() {
                    Rc::new(vec![ParseNode::leaf(word.clone())])
                } else {
                    Cell::default()
                }
            }
            Symbol::Nonterminal(name) => self.nonterminal_parses(name, start, end),
        }
    }

    fn nonterminal_parses(&mut self, nonterminal: &'g str, start: usize, end: usize) -> Cell {
        let key = (nonterminal, start, end);
        if let Some(cell) = self.cells.get(&key) {
            return Rc::clone(cell);
        }
        // Marked before exploring so a unit cycle on this span finds nothing
        self.cells.insert(key, Cell::default());

        let grammar = self.grammar;
        let mut found = Vec::new();

        for alternative in grammar.productions_for(nonterminal) {
            // Every symbol covers at least one token
            if alternative.is_empty() || alternative.len() > end - start {
                continue;
            }

            'cuts: for cuts in (start + 1..end).combinations(alternative.len() - 1) {
                let bounds = once(start).chain(cuts).chain(once(end));

                let mut children = Vec::with_capacity(alternative.len());
                for (symbol, (from, to)) in alternative.iter().zip(bounds.tuple_windows()) {
                    let parses = self.symbol_parses(symbol, from, to);
                    if parses.is_empty() {
                        continue 'cuts;
                    }
                    children.push(parses);
                }

                found.extend(
                    children.iter()
                        .map(|parses| parses.iter())
                        .multi_cartesian_product()
                        .map(|kids| ParseNode::Nonterminal(
                            nonterminal.to_string(),
                            kids.into_iter().cloned().collect()
                        ))
                );
            }
        }

        let cell: Cell = Rc::new(found.into_iter().unique().collect());
        if !cell.is_empty() {
            trace!("{} over [{}, {}): {} parses", nonterminal, start, end, cell.len());
        }
        self.cells.insert(key, Rc::clone(&cell));

        return cell;
    }
}

/// Finds every distinct tree rooted at the grammar's start symbol whose
/// leaves are exactly `tokens`, in the order they were discovered.
///
/// Words the grammar doesn't know are not an error, they just keep any span
/// holding them from matching.
pub fn parse<T: AsRef<str>>(grammar: &Grammar, tokens: &[T]) -> Forest {
    let mut chart = Chart {
        grammar,
        tokens: tokens.iter().map(|token| token.as_ref()).collect(),
        cells: HashMap::new(),
    };

    let cell = chart.nonterminal_parses(&grammar.start_symbol, 0, tokens.len());
    debug!(
        "Parsed {} tokens into {} trees using {} chart cells",
        tokens.len(),
        cell.len(),
        chart.cells.len()
    );

    // With the chart gone the root cell has no other owner
    drop(chart);
    Rc::try_unwrap(cell).unwrap_or_else(|shared| (*shared).clone())
}
