pub const TERMINALS: &str = r#"
Adj -> "country" | "dreadful" | "enigmatical" | "little" | "moist" | "red"
Adv -> "down" | "here" | "never"
Conj -> "and" | "until"
Det -> "a" | "an" | "his" | "my" | "the"
N -> "armchair" | "companion" | "day" | "door" | "hand" | "he" | "himself"
N -> "holmes" | "home" | "i" | "mess" | "paint" | "palm" | "pipe" | "she"
N -> "smile" | "thursday" | "walk" | "we" | "word"
P -> "at" | "before" | "in" | "of" | "on" | "to"
V -> "arrived" | "came" | "chuckled" | "had" | "lit" | "said" | "sat"
V -> "smiled" | "tell" | "were"
"#;

pub const NONTERMINALS: &str = r#"
S -> NP VP | NP VP Conj NP VP | NP VP Conj VP
NP -> N | Det N | Det Adj N | Det Adj Adj N | Det Adj Adj Adj N | N P N | Adj N | N N | Adj NP | NP P NP
VP -> V |V NP | V Adv | V P NP | Adv VP | VP Adv
"#;
