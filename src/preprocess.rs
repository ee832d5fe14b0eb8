/*
    This module turns raw sentence text into the words the parser sees
*/

use std::iter::once;

// Endings split off a word the way contractions are usually tokenized:
// `didn't` becomes `did` and `n't`, `we'll` becomes `we` and `'ll`
const CLITICS: [&str; 7] = ["n't", "'s", "'ll", "'re", "'ve", "'m", "'d"];

fn split_clitic(word: &str) -> (&str, Option<&str>) {
    match CLITICS.iter().find(|clitic| word.len() > clitic.len() && word.ends_with(*clitic)) {
        Some(clitic) => {
            let (stem, clitic) = word.split_at(word.len() - clitic.len());
            (stem, Some(clitic))
        }
        None => (word, None)
    }
}

// Lowercases the words of `sentence` and keeps only the ones made entirely
// of letters. Punctuation splits words, quotes around a word are stripped and
// contractions are split, so `didn't` keeps `did`
pub fn preprocess(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|word| word.trim_matches('\''))
        .flat_map(|word| {
            let (stem, clitic) = split_clitic(word);
            once(stem).chain(clitic)
        })
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn preprocess_sentences() {
        let lines = vec![
            "Holmes sat.",
            "  Holmes   lit a pipe!\n",
            "We arrived the day before Thursday, 28 minutes late.",
            "\"Here,\" said Holmes; he didn't smile.",
            "",
            "42 ... ?"
        ];
        let answers: Vec<Vec<&str>> = vec![
            vec!["holmes", "sat"],
            vec!["holmes", "lit", "a", "pipe"],
            vec!["we", "arrived", "the", "day", "before", "thursday", "minutes", "late"],
            vec!["here", "said", "holmes", "he", "did", "smile"],
            vec![],
            vec![]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(preprocess(line), answer, "{}", line);
        }
    }

    #[test]
    fn preprocess_contractions() {
        let lines = vec![
            "Holmes's companion can't tell.",
            "We'll say I'm sure they're here; I've lit it, he'd smiled.",
            "'Never,' said she.",
            "DIDN'T"
        ];
        let answers: Vec<Vec<&str>> = vec![
            vec!["holmes", "companion", "ca", "tell"],
            vec!["we", "say", "i", "sure", "they", "here", "i", "lit", "it", "he", "smiled"],
            vec!["never", "said", "she"],
            vec!["did"]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(preprocess(line), answer, "{}", line);
        }
    }

    #[test]
    fn split_known_clitics() {
        assert_eq!(split_clitic("didn't"), ("did", Some("n't")));
        assert_eq!(split_clitic("we'll"), ("we", Some("'ll")));
        assert_eq!(split_clitic("holmes"), ("holmes", None));
        // A bare clitic has no stem to split from
        assert_eq!(split_clitic("'s"), ("'s", None));
    }

    #[test]
    fn preprocess_mixed_words() {
        // Words holding digits are dropped whole
        assert_eq!(preprocess("room 221b Baker street"), vec!["room", "baker", "street"]);
    }
}
