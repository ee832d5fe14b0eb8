use std::iter::Peekable;

use itertools::{Itertools, PeekingNext};

use super::{GrammarErrorType, Result};

#[derive(PartialEq, Debug)]
pub enum Token {
    Arrow,
    Or,
    Nonterminal(String),
    Terminal(String)
}

pub fn lex_terminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    line.next(); // Consume open quote
    let token_text = line.peeking_take_while(|&c| c != '\"').collect();

    // Check if there is a close quote and consume it if there is
    if line.next() != Some('\"') {
        return Err(GrammarErrorType::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

pub fn lex_nonterminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    Ok(Token::Nonterminal(
        line.peeking_take_while(|&c| !c.is_whitespace() && c != '|' && c != '\"').collect()
    ))
}

// `-` only starts an arrow when `>` follows; otherwise it begins a name
fn lex_arrow_or_nonterminal<I: Iterator<Item = char> + Clone>(line: &mut Peekable<I>) -> Result<Token> {
    let mut lookahead = line.clone();
    lookahead.next();
    if lookahead.peek() == Some(&'>') {
        line.next();
        line.next();
        Ok(Token::Arrow)
    } else {
        lex_nonterminal(line)
    }
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(c) = line_chars.peek() {
        if *c == '-' {
            tokens.push(lex_arrow_or_nonterminal(&mut line_chars)?);
        } else if *c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if *c == '\"' {
            tokens.push(lex_terminal(&mut line_chars)?);
        } else if !c.is_whitespace() {
            tokens.push(lex_nonterminal(&mut line_chars)?);
        } else {
            line_chars.next();
        }
    }

    return Ok(tokens);
}
