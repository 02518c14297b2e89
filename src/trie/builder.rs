use smallvec::SmallVec;
use thiserror::Error;

use super::children::Node;
use super::letter::Letter;
use super::node_arena::{NodeArena, NodeId};
use super::sealed::Trie;

/// Errors that can occur while inserting words into a [`TrieBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The empty string can never be stored; the root does not complete a word.
    #[error("cannot insert an empty word")]
    EmptyWord,

    /// The word contains a character outside `'a'..='z'`.
    ///
    /// Nothing is inserted when this is returned.
    #[error("invalid symbol {symbol:?} at position {position} in {word:?}")]
    InvalidSymbol {
        /// The rejected word.
        word: String,
        /// The first offending character.
        symbol: char,
        /// Character position of `symbol` within `word`.
        position: usize,
    },

    /// The trie already holds the maximum number of nodes a `NodeId` can address.
    #[error("trie node capacity exhausted")]
    Capacity,
}

/// Write half of the trie lifecycle.
///
/// A `TrieBuilder` only accepts insertions. Calling [`seal`](TrieBuilder::seal)
/// consumes it and hands back a read-only [`Trie`], so writing after reads
/// have begun is rejected by the compiler rather than at runtime:
///
/// ```compile_fail
/// use wordtrie::Trie;
///
/// let mut trie = Trie::create(["cat"]).unwrap();
/// assert!(trie.contains_word("cat"));
/// trie.insert("dog"); // no such method: a sealed trie is query-only
/// ```
#[derive(Clone, Debug)]
pub struct TrieBuilder {
    arena: NodeArena,
    words: usize,
}

impl TrieBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        TrieBuilder {
            arena: NodeArena::new(),
            words: 0,
        }
    }

    /// Inserts `word`, creating nodes for any part of its path that is missing.
    ///
    /// Returns `Ok(true)` if the word was new and `Ok(false)` if it was already
    /// present. Inserting a word twice leaves the trie unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyWord`] for `""` and [`TrieError::InvalidSymbol`]
    /// if any character is outside `'a'..='z'`. The word is validated in full
    /// before any node is created, so a rejected word leaves no partial path.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        let letters = letters(word)?;
        let mut current = NodeArena::ROOT;
        for &letter in &letters {
            current = self.child_or_insert(current, letter)?;
        }
        let added = self.arena[current].mark_word();
        if added {
            self.words += 1;
        }
        Ok(added)
    }

    /// Inserts every word in order, stopping at the first error.
    ///
    /// Returns the number of words that were new.
    pub fn extend<I>(&mut self, words: I) -> Result<usize, TrieError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            added += usize::from(self.insert(word.as_ref())?);
        }
        Ok(added)
    }

    /// Returns the number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Ends the build phase and returns the read-only trie.
    pub fn seal(mut self) -> Trie {
        self.arena.shrink_to_fit();
        Trie::from_parts(self.arena, self.words)
    }

    fn child_or_insert(&mut self, parent: NodeId, letter: Letter) -> Result<NodeId, TrieError> {
        if let Some(child) = self.arena[parent].get_child(letter) {
            return Ok(child);
        }
        let child = self.arena.alloc(Node::new(letter, parent))?;
        self.arena[parent].set_child(letter, child);
        Ok(child)
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts `word` into letters, rejecting empty words and foreign characters.
fn letters(word: &str) -> Result<SmallVec<[Letter; 32]>, TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    word.chars()
        .enumerate()
        .map(|(position, symbol)| {
            Letter::new(symbol).ok_or_else(|| TrieError::InvalidSymbol {
                word: word.to_owned(),
                symbol,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_reports_new_words() {
        let mut builder = TrieBuilder::new();
        assert_eq!(builder.insert("cat"), Ok(true));
        assert_eq!(builder.insert("cat"), Ok(false));
        assert_eq!(builder.insert("cats"), Ok(true));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut builder = TrieBuilder::new();
        builder.insert("cat").unwrap();
        assert_eq!(builder.node_count(), "cat".len() + 1);
        builder.insert("car").unwrap();
        assert_eq!(builder.node_count(), 5);
        builder.insert("cart").unwrap();
        assert_eq!(builder.node_count(), 6);
        builder.insert("ca").unwrap();
        assert_eq!(builder.node_count(), 6);
    }

    #[test]
    fn duplicate_insert_allocates_nothing() {
        let mut builder = TrieBuilder::new();
        builder.insert("dog").unwrap();
        let nodes = builder.node_count();
        builder.insert("dog").unwrap();
        assert_eq!(builder.node_count(), nodes);
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut builder = TrieBuilder::new();
        assert_eq!(builder.insert(""), Err(TrieError::EmptyWord));
        assert!(builder.is_empty());
        assert_eq!(builder.node_count(), 1);
    }

    #[test]
    fn invalid_symbol_is_rejected_before_any_node_is_created() {
        let mut builder = TrieBuilder::new();
        let err = builder.insert("caT").unwrap_err();
        assert_eq!(
            err,
            TrieError::InvalidSymbol {
                word: "caT".to_owned(),
                symbol: 'T',
                position: 2,
            }
        );
        assert_eq!(builder.node_count(), 1);
        assert!(builder.is_empty());
    }

    #[test]
    fn invalid_symbol_position_counts_chars() {
        let mut builder = TrieBuilder::new();
        let err = builder.insert("naïve").unwrap_err();
        assert!(matches!(err, TrieError::InvalidSymbol { symbol: 'ï', position: 2, .. }));
    }

    #[test]
    fn error_messages() {
        assert_eq!(TrieError::EmptyWord.to_string(), "cannot insert an empty word");
        let err = TrieError::InvalidSymbol {
            word: "a b".to_owned(),
            symbol: ' ',
            position: 1,
        };
        assert_eq!(err.to_string(), "invalid symbol ' ' at position 1 in \"a b\"");
    }

    #[test]
    fn extend_counts_new_words_and_stops_on_error() {
        let mut builder = TrieBuilder::new();
        assert_eq!(builder.extend(["cat", "car", "cat"]), Ok(2));
        let res = builder.extend(["dog", "Dog", "dot"]);
        assert!(matches!(res, Err(TrieError::InvalidSymbol { symbol: 'D', .. })));
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn extend_accepts_owned_strings() {
        let words: Vec<String> = vec!["alfa".into(), "bravo".into()];
        let mut builder = TrieBuilder::default();
        assert_eq!(builder.extend(&words), Ok(2));
        assert_eq!(builder.extend(words), Ok(0));
    }

    #[test]
    fn seal_keeps_counts() {
        let mut builder = TrieBuilder::new();
        builder.extend(["cat", "car", "cart", "dog"]).unwrap();
        let nodes = builder.node_count();
        let trie = builder.seal();
        assert_eq!(trie.len(), 4);
        assert_eq!(trie.node_count(), nodes);
    }
}
