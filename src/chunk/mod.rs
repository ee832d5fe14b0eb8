/*
    This module picks the noun phrase chunks out of a parse tree
*/

use itertools::Itertools;

use crate::tree::ParseNode;

pub const NOUN_PHRASE: &str = "NP";

/// The noun phrases of `tree` that have no noun phrase directly below them,
/// in pre-order.
pub fn np_chunks(tree: &ParseNode) -> Vec<&ParseNode> {
    chunks_labeled(tree, NOUN_PHRASE)
}

// A phrase nested under another one through some other node still counts on
// its own, only a direct child makes the parent too big to be a chunk
pub fn chunks_labeled<'a>(tree: &'a ParseNode, label: &str) -> Vec<&'a ParseNode> {
    tree.subtrees_matching(|node| is_phrase(node, label))
        .filter(|node| !node.children().iter().any(|child| is_phrase(child, label)))
        .collect()
}

fn is_phrase(node: &ParseNode, label: &str) -> bool {
    matches!(node, ParseNode::Nonterminal(name, _) if name == label)
}

pub fn chunk_text(node: &ParseNode) -> String {
    node.leaves().join(" ")
}
