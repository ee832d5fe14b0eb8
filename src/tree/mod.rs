/*
    This module holds parse trees and the ways to walk them
*/

use std::fmt::Display;

// A node of a parse tree. Leaves are the input tokens, every other node is
// labeled with the nonterminal it was derived from
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum ParseNode {
    Leaf(String),
    Nonterminal(String, Vec<ParseNode>),
}

impl ParseNode {
    pub fn leaf(token: impl Into<String>) -> Self {
        ParseNode::Leaf(token.into())
    }

    pub fn branch(label: impl Into<String>, children: Vec<ParseNode>) -> Self {
        ParseNode::Nonterminal(label.into(), children)
    }

    /// The nonterminal for an inner node, the token itself for a leaf.
    pub fn label(&self) -> &str {
        match self {
            ParseNode::Leaf(token) => token,
            ParseNode::Nonterminal(label, _) => label,
        }
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Leaf(_) => &[],
            ParseNode::Nonterminal(_, children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ParseNode::Leaf(_))
    }

    /// The tokens under this node, left to right. Each call starts a fresh walk.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    pub fn height(&self) -> usize {
        1 + self.children().iter().map(ParseNode::height).max().unwrap_or(0)
    }

    /// Every subtree, this node included, in pre-order.
    pub fn subtrees(&self) -> Subtrees<'_> {
        Subtrees { stack: vec![self] }
    }

    pub fn subtrees_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a ParseNode>
    where
        P: FnMut(&&'a ParseNode) -> bool,
    {
        self.subtrees().filter(predicate)
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        match self {
            ParseNode::Leaf(token) => writeln!(f, "{:indent$}{}", "", token, indent = depth * 2),
            ParseNode::Nonterminal(label, children) => {
                writeln!(f, "{:indent$}{}", "", label, indent = depth * 2)?;
                children.iter().try_for_each(|child| child.fmt_indented(f, depth + 1))
            }
        }
    }
}

// `{}` gives the bracketed form on one line, `{:#}` one node per line
impl Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return self.fmt_indented(f, 0);
        }

        match self {
            ParseNode::Leaf(token) => write!(f, "{}", token),
            ParseNode::Nonterminal(label, children) => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

pub struct Subtrees<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Subtrees<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is visited next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

pub struct Leaves<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                ParseNode::Leaf(token) => return Some(token.as_str()),
                ParseNode::Nonterminal(_, children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    // (S (NP (Det the) (N door)) (VP (V lit)))
    fn door_tree() -> ParseNode {
        ParseNode::branch("S", vec![
            ParseNode::branch("NP", vec![
                ParseNode::branch("Det", vec![ParseNode::leaf("the")]),
                ParseNode::branch("N", vec![ParseNode::leaf("door")])
            ]),
            ParseNode::branch("VP", vec![
                ParseNode::branch("V", vec![ParseNode::leaf("lit")])
            ])
        ])
    }

    #[test]
    fn labels_and_children() {
        let tree = door_tree();

        assert_eq!(tree.label(), "S");
        assert_eq!(tree.children().iter().map(ParseNode::label).collect_vec(), vec!["NP", "VP"]);

        let leaf = ParseNode::leaf("door");
        assert_eq!(leaf.label(), "door");
        assert!(leaf.children().is_empty());
        assert!(leaf.is_leaf());
        assert!(!tree.is_leaf());
    }

    #[test]
    fn leaves_in_order() {
        let tree = door_tree();

        assert_eq!(tree.leaves().collect_vec(), vec!["the", "door", "lit"]);
        // A second walk sees the same tokens
        assert_eq!(tree.leaves().collect_vec(), vec!["the", "door", "lit"]);
        assert_eq!(ParseNode::leaf("home").leaves().collect_vec(), vec!["home"]);
    }

    #[test]
    fn heights() {
        let tree = door_tree();

        assert_eq!(ParseNode::leaf("lit").height(), 1);
        assert_eq!(tree.children()[1].children()[0].height(), 2);
        assert_eq!(tree.children()[0].height(), 3);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn subtrees_in_pre_order() {
        let tree = door_tree();

        assert_eq!(
            tree.subtrees().map(ParseNode::label).collect_vec(),
            vec!["S", "NP", "Det", "the", "N", "door", "VP", "V", "lit"]
        );
        assert_eq!(
            tree.subtrees_matching(|node| node.children().len() == 1)
                .map(ParseNode::label)
                .collect_vec(),
            vec!["Det", "N", "VP", "V"]
        );
        assert_eq!(tree.subtrees_matching(|node| node.label() == "PP").count(), 0);
    }

    #[test]
    fn display_bracketed() {
        assert_eq!(door_tree().to_string(), "(S (NP (Det the) (N door)) (VP (V lit)))");
        assert_eq!(ParseNode::leaf("home").to_string(), "home");
    }

    #[test]
    fn display_indented() {
        let tree = ParseNode::branch("NP", vec![
            ParseNode::branch("N", vec![ParseNode::leaf("holmes")])
        ]);

        assert_eq!(format!("{:#}", tree), "NP\n  N\n    holmes\n");
    }
}
