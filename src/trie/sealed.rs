use std::fmt;

use super::builder::{TrieBuilder, TrieError};
use super::children::ChildSlots;
use super::letter::Letter;
use super::node_arena::{NodeArena, NodeId};

/// A sealed, read-only prefix trie over the letters `'a'..='z'`.
///
/// A `Trie` is produced by [`TrieBuilder::seal`] or [`Trie::create`] and never
/// changes afterwards. Every query takes `&self`, so one trie can be shared by
/// any number of threads (it is `Send + Sync`) without locking.
///
/// Besides whole-string queries, [`step`](Trie::step) advances a search by one
/// symbol from a node the caller already holds. A grid search can then carry a
/// [`NodeRef`] along its path instead of re-walking from the root at each cell.
///
/// # Examples
///
/// ```
/// use wordtrie::Trie;
///
/// let trie = Trie::create(["cat", "car", "cart", "dog"]).unwrap();
/// assert!(trie.contains_word("cat"));
/// assert!(!trie.contains_word("ca"));
/// assert!(trie.contains_prefix("ca"));
/// assert!(!trie.contains_prefix("x"));
/// ```
#[derive(Clone)]
pub struct Trie {
    arena: NodeArena,
    words: usize,
}

impl Trie {
    pub(crate) fn from_parts(arena: NodeArena, words: usize) -> Self {
        Trie { arena, words }
    }

    /// Builds a trie holding `words` and seals it.
    ///
    /// Insertion order does not affect the result.
    ///
    /// # Errors
    ///
    /// Fails on the first word [`TrieBuilder::insert`] rejects.
    pub fn create<I>(words: I) -> Result<Trie, TrieError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(words)?;
        Ok(builder.seal())
    }

    /// Returns the sentinel root node.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            trie: self,
            id: NodeArena::ROOT,
        }
    }

    /// Returns the node for `id`, or `None` if this trie has no such node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.arena.get(id).map(|_| NodeRef { trie: self, id })
    }

    /// Returns the node reached by spelling `text` from the root.
    ///
    /// Empty text, or text leaving the alphabet, yields `None`.
    pub fn find(&self, text: &str) -> Option<NodeRef<'_>> {
        if text.is_empty() {
            return None;
        }
        text.chars().try_fold(self.root(), |node, c| node.get(c))
    }

    /// True if `text` is a stored word or the start of one.
    ///
    /// The empty string never matches.
    pub fn contains_prefix(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// True if `text` is exactly a stored word.
    pub fn contains_word(&self, text: &str) -> bool {
        self.find(text).is_some_and(|node| node.completes_word())
    }

    /// Advances one symbol from `from`, or from the root when `from` is `None`.
    ///
    /// A symbol with no matching child, including one outside the alphabet,
    /// is not an error: the returned [`Step`] has no node and both flags false.
    ///
    /// ```
    /// use wordtrie::Trie;
    ///
    /// let trie = Trie::create(["cat", "car", "cart", "dog"]).unwrap();
    /// let c = trie.step(None, 'c');
    /// let a = trie.step(c.node, 'a');
    /// let t = trie.step(a.node, 't');
    /// assert!(t.is_potential_prefix && t.completes_word);
    /// assert_eq!(t.node.unwrap().reconstruct_word(), "cat");
    /// ```
    pub fn step<'t>(&'t self, from: Option<NodeRef<'t>>, symbol: char) -> Step<'t> {
        let from = from.unwrap_or_else(|| self.root());
        debug_assert!(
            std::ptr::eq(from.trie, self),
            "step called with a node from another trie"
        );
        from.step(symbol)
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if node.completes_word() {
                words.push(node.reconstruct_word());
            }
            // Pushed in reverse so the smallest letter is visited first.
            let children: Vec<_> = node.children().map(|(_, child)| child).collect();
            stack.extend(children.into_iter().rev());
        }
        words
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.words)
            .field("node_count", &self.node_count())
            .finish()
    }
}

/// Result of advancing one symbol with [`Trie::step`] or [`NodeRef::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<'t> {
    /// The node reached, or `None` if no stored word continues this way.
    pub node: Option<NodeRef<'t>>,
    /// True if the path so far is a word or the start of one.
    pub is_potential_prefix: bool,
    /// True if the path so far is exactly a stored word.
    pub completes_word: bool,
}

impl<'t> Step<'t> {
    fn to(node: Option<NodeRef<'t>>) -> Self {
        Step {
            node,
            is_potential_prefix: node.is_some(),
            completes_word: node.is_some_and(|n| n.completes_word()),
        }
    }
}

/// Borrowed handle to one node of a [`Trie`].
///
/// `NodeRef` is `Copy` and as cheap to pass around as a reference. Two handles
/// are equal when they name the same node of the same trie.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    trie: &'t Trie,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// The id of this node, stable for the lifetime of the trie.
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The symbol on the edge into this node; `None` for the root.
    #[inline]
    pub fn symbol(self) -> Option<char> {
        self.trie.arena[self.id].symbol().map(Letter::as_char)
    }

    /// True for the sentinel root.
    #[inline]
    pub fn is_root(self) -> bool {
        self.id.is_root()
    }

    /// True if the path to this node spells a stored word.
    #[inline]
    pub fn completes_word(self) -> bool {
        self.trie.arena[self.id].completes_word()
    }

    /// The node one level up; `None` for the root.
    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.trie.arena[self.id].parent().map(|id| self.with_id(id))
    }

    /// Returns the child reached by `symbol`, if any.
    #[inline]
    pub fn get(self, symbol: char) -> Option<NodeRef<'t>> {
        let letter = Letter::new(symbol)?;
        self.trie.arena[self.id]
            .get_child(letter)
            .map(|id| self.with_id(id))
    }

    /// Advances one symbol from this node.
    #[inline]
    pub fn step(self, symbol: char) -> Step<'t> {
        Step::to(self.get(symbol))
    }

    /// True if any longer word passes through this node.
    #[inline]
    pub fn has_children(self) -> bool {
        self.trie.arena[self.id].has_children()
    }

    /// Iterates over the children in ascending symbol order.
    pub fn children(self) -> ChildIter<'t> {
        ChildIter {
            node: self,
            slots: self.trie.arena[self.id].children(),
        }
    }

    /// Number of symbols between the root and this node.
    pub fn depth(self) -> usize {
        self.trie.arena.depth(self.id)
    }

    /// Spells the path from the root to this node. The root gives `""`.
    pub fn reconstruct_word(self) -> String {
        self.trie.arena.reconstruct_word(self.id)
    }

    fn with_id(self, id: NodeId) -> NodeRef<'t> {
        NodeRef { trie: self.trie, id }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.index())
            .field("symbol", &self.symbol())
            .field("completes_word", &self.completes_word())
            .finish()
    }
}

/// An iterator over the children of a [`NodeRef`].
#[derive(Clone)]
pub struct ChildIter<'t> {
    node: NodeRef<'t>,
    slots: ChildSlots<'t>,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = (char, NodeRef<'t>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (letter, id) = self.slots.next()?;
        Some((letter.as_char(), self.node.with_id(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}
