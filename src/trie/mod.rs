/// Build phase: insertion-only trie builder and its errors.
pub mod builder;
/// Node vertex and its dense per-letter child table.
pub(crate) mod children;
/// The fixed lowercase alphabet.
pub mod letter;
/// Index arena owning every node.
pub mod node_arena;
/// Query phase: the sealed, shareable trie.
pub mod sealed;

pub use builder::{TrieBuilder, TrieError};
pub use letter::{Letter, ALPHABET_SIZE};
pub use node_arena::NodeId;
pub use sealed::{ChildIter, NodeRef, Step, Trie};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_then_query() {
        let words = ["test", "tester", "wtest"];
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.insert(word).unwrap();
        }
        let trie = builder.seal();

        let n = trie.root().get('t').unwrap();
        assert!(!n.completes_word());

        let n = n.get('e').unwrap();
        assert!(!n.completes_word());

        let n = n.get('s').unwrap();
        assert!(!n.completes_word());

        let n = n.get('t').unwrap();
        assert!(n.completes_word());

        let n = n.get('e').unwrap();
        assert!(!n.completes_word());

        let n = n.get('r').unwrap();
        assert!(n.completes_word());
        assert_eq!(n.reconstruct_word(), "tester");

        assert_eq!(n.get('t'), None);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        use itertools::Itertools;
        const WORDS: [&str; 6] = ["a", "an", "ant", "and", "bee", "be"];
        let expected = Trie::create(WORDS).unwrap();
        for order in WORDS.iter().permutations(WORDS.len()) {
            let trie = Trie::create(order).unwrap();
            assert_eq!(trie.words(), expected.words());
            assert_eq!(trie.node_count(), expected.node_count());
            for probe in ["a", "an", "ant", "and", "ane", "b", "be", "bee", "bees", "c"] {
                assert_eq!(trie.contains_word(probe), expected.contains_word(probe), "{probe}");
                assert_eq!(trie.contains_prefix(probe), expected.contains_prefix(probe), "{probe}");
            }
        }
    }
}
