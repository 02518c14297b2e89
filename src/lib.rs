//! # wordtrie
//!
//! A prefix trie tuned for letter-grid word search, such as solving a
//! [Boggle](https://en.wikipedia.org/wiki/Boggle) board.
//!
//! Each node keeps a dense 26-slot child table indexed by letter, so moving
//! from a node to its child is one array lookup. Nodes live in an index arena
//! and remember their parent, which lets a search recover the word it has
//! spelled from the node handle alone.
//!
//! ## Features
//!
//! - **Two-phase lifecycle**: a [`TrieBuilder`] accepts insertions; sealing it
//!   yields an immutable [`Trie`] that only answers queries
//! - **Incremental traversal**: [`Trie::step`] advances one symbol from the node a
//!   search already holds, so a depth-first grid walk never re-walks from the root
//! - **Thread-safe**: a sealed [`Trie`] is `Send + Sync` and needs no locking
//!
//! ## Quick Start
//!
//! ```
//! use wordtrie::Trie;
//!
//! let trie = Trie::create(["cat", "car", "cart", "dog"]).unwrap();
//!
//! assert!(trie.contains_word("cat"));
//! assert!(!trie.contains_word("ca"));
//! assert!(trie.contains_prefix("ca"));
//! assert!(!trie.contains_prefix(""));
//! ```
//!
//! ## Walking a board
//!
//! A grid search carries the node it has reached and asks the trie about one
//! more letter at a time:
//!
//! ```
//! use wordtrie::Trie;
//!
//! let trie = Trie::create(["cat", "car", "cart", "dog"]).unwrap();
//!
//! let mut node = None;
//! let mut found = Vec::new();
//! for c in "cart".chars() {
//!     let step = trie.step(node, c);
//!     if !step.is_potential_prefix {
//!         break;
//!     }
//!     if step.completes_word {
//!         found.push(step.node.unwrap().reconstruct_word());
//!     }
//!     node = step.node;
//! }
//! assert_eq!(found, ["car", "cart"]);
//! ```
//!
//! ## Building in stages
//!
//! ```
//! use wordtrie::{TrieBuilder, TrieError};
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert("cat")?;
//! builder.insert("cats")?;
//! assert!(matches!(builder.insert("Cat"), Err(TrieError::InvalidSymbol { .. })));
//!
//! let trie = builder.seal();
//! assert_eq!(trie.words(), ["cat", "cats"]);
//! # Ok::<(), TrieError>(())
//! ```

#![warn(missing_docs)]

/// Prefix trie: builder, sealed trie, nodes and alphabet.
pub mod trie;
/// Line-oriented word list loading.
pub mod wordlist;

pub use trie::{NodeId, NodeRef, Step, Trie, TrieBuilder, TrieError};
pub use wordlist::{build_trie_from_file, load_words, LoadError, LoadSummary, WordListOptions};

#[cfg(test)]
mod proptests;
