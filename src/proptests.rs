use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn small_alphabet_word() -> impl Strategy<Value = String> {
    // A narrow alphabet makes shared prefixes and near misses common.
    "[abc]{1,6}"
}

fn word_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(small_alphabet_word(), 0..40)
}

/// Walks `text` with repeated `step` calls, starting from the root.
fn walk<'t>(trie: &'t Trie, text: &str) -> Option<Step<'t>> {
    let mut node = None;
    let mut last = None;
    for c in text.chars() {
        let step = trie.step(node, c);
        last = Some(step);
        match step.node {
            Some(next) => node = Some(next),
            None => break,
        }
    }
    last
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn inserted_words_and_their_prefixes_are_found(words in word_set()) {
        let trie = Trie::create(&words).unwrap();
        for w in &words {
            prop_assert!(trie.contains_word(w), "{w}");
            for end in 1..=w.len() {
                prop_assert!(trie.contains_prefix(&w[..end]), "{}", &w[..end]);
            }
        }
    }

    #[test]
    fn queries_agree_with_a_reference_set(words in word_set(), probes in prop::collection::vec(small_alphabet_word(), 0..40)) {
        let trie = Trie::create(&words).unwrap();
        let set: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        for p in &probes {
            let is_prefix = set.iter().any(|w| w.starts_with(p.as_str()));
            prop_assert_eq!(trie.contains_prefix(p), is_prefix, "{}", p);
            prop_assert_eq!(trie.contains_word(p), set.contains(p.as_str()), "{}", p);
        }
        prop_assert_eq!(trie.len(), set.len());
        prop_assert_eq!(trie.words(), set.iter().map(|w| w.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn stepping_matches_whole_string_queries(words in word_set(), probe in small_alphabet_word()) {
        let trie = Trie::create(&words).unwrap();
        match walk(&trie, &probe) {
            Some(Step { node: Some(node), is_potential_prefix, completes_word }) => {
                prop_assert!(is_potential_prefix);
                prop_assert_eq!(node.reconstruct_word(), probe.clone());
                prop_assert_eq!(node.depth(), probe.len());
                prop_assert_eq!(completes_word, trie.contains_word(&probe));
                prop_assert_eq!(node.completes_word(), trie.contains_word(&probe));
                prop_assert_eq!(Some(node), trie.find(&probe));
            }
            Some(Step { node: None, is_potential_prefix, completes_word }) => {
                prop_assert!(!is_potential_prefix);
                prop_assert!(!completes_word);
                prop_assert!(!trie.contains_prefix(&probe));
            }
            None => unreachable!("probe is never empty"),
        }
    }

    #[test]
    fn duplicate_inserts_change_nothing(words in prop::collection::vec(word(), 1..20)) {
        let once = Trie::create(&words).unwrap();
        let twice = Trie::create(words.iter().chain(&words)).unwrap();
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.words(), twice.words());
        for w in &words {
            prop_assert!(twice.contains_word(w));
        }
    }

    #[test]
    fn every_node_spells_its_path(words in word_set()) {
        let trie = Trie::create(&words).unwrap();
        let mut stack = vec![(trie.root(), String::new())];
        let mut seen = 0;
        while let Some((node, path)) = stack.pop() {
            seen += 1;
            prop_assert_eq!(node.reconstruct_word(), path.clone());
            prop_assert_eq!(node.completes_word(), trie.contains_word(&path));
            for (c, child) in node.children() {
                prop_assert_eq!(child.parent(), Some(node));
                prop_assert_eq!(child.symbol(), Some(c));
                let mut next = path.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        prop_assert_eq!(seen, trie.node_count());
    }

    #[test]
    fn strings_with_foreign_symbols_never_match(words in word_set(), probe in "[a-c]{0,3}[A-Z0-9 ][a-c]{0,3}") {
        let trie = Trie::create(&words).unwrap();
        prop_assert!(!trie.contains_prefix(&probe));
        prop_assert!(!trie.contains_word(&probe));
    }

    #[test]
    fn rejected_words_leave_no_trace(words in word_set(), bad in "[a-c]{0,4}[A-Z][a-c]{0,4}") {
        let mut builder = TrieBuilder::new();
        builder.extend(&words).unwrap();
        let nodes = builder.node_count();
        let is_invalid_symbol = matches!(builder.insert(&bad), Err(TrieError::InvalidSymbol { .. }));
        prop_assert!(is_invalid_symbol);
        prop_assert_eq!(builder.node_count(), nodes);
    }
}
