use super::letter::{Letter, ALPHABET_SIZE};
use super::node_arena::NodeId;

/// Slot value meaning "no child". The root (id 0) is never anyone's child, so
/// zero is free to act as the empty marker.
const EMPTY: u32 = 0;

/// Dense child table: one slot per letter of the alphabet.
///
/// This trades memory for speed. Most slots of most nodes stay empty, but a
/// child lookup is a single array index instead of a map probe or a scan.
/// Only [`Node::get_child`], [`Node::set_child`] and [`ChildSlots`] look inside,
/// so a sparse representation could replace it without touching the trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ChildTable([u32; ALPHABET_SIZE]);

impl ChildTable {
    fn new() -> Self {
        ChildTable([EMPTY; ALPHABET_SIZE])
    }
}

/// A single trie vertex.
///
/// Nodes live in a [`NodeArena`](super::node_arena::NodeArena) and refer to
/// their parent and children by [`NodeId`]. The parent link only serves
/// [`reconstruct_word`](super::sealed::NodeRef::reconstruct_word).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    symbol: Option<Letter>,
    parent: Option<NodeId>,
    /// Allocated on the first `set_child`; leaves never pay for a table.
    children: Option<Box<ChildTable>>,
    completes_word: bool,
}

impl Node {
    /// Creates the sentinel root: no symbol, no parent, never a word.
    pub(crate) fn root() -> Self {
        Node {
            symbol: None,
            parent: None,
            children: None,
            completes_word: false,
        }
    }

    /// Creates a leaf for `symbol` hanging below `parent`.
    pub(crate) fn new(symbol: Letter, parent: NodeId) -> Self {
        Node {
            symbol: Some(symbol),
            parent: Some(parent),
            children: None,
            completes_word: false,
        }
    }

    #[inline]
    pub(crate) fn symbol(&self) -> Option<Letter> {
        self.symbol
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// True if the path from the root to this node spells an inserted word.
    #[inline]
    pub(crate) fn completes_word(&self) -> bool {
        self.completes_word
    }

    /// Flags this node as the end of a word. Returns `false` if it already was.
    pub(crate) fn mark_word(&mut self) -> bool {
        debug_assert!(self.symbol.is_some(), "the root never completes a word");
        !std::mem::replace(&mut self.completes_word, true)
    }

    /// Stores `child` in the slot for `letter`, allocating the table if needed.
    ///
    /// The trie calls this at most once per letter per node.
    pub(crate) fn set_child(&mut self, letter: Letter, child: NodeId) {
        debug_assert!(!child.is_root(), "the root cannot be a child");
        let table = self.children.get_or_insert_with(|| Box::new(ChildTable::new()));
        debug_assert_eq!(table.0[letter.index()], EMPTY, "slot for {letter} already taken");
        table.0[letter.index()] = child.get();
    }

    /// Returns the child for `letter`, if any.
    #[inline]
    pub(crate) fn get_child(&self, letter: Letter) -> Option<NodeId> {
        let slot = self.children.as_ref()?.0[letter.index()];
        (slot != EMPTY).then(|| NodeId::new(slot))
    }

    /// True once at least one child has been set.
    #[inline]
    pub(crate) fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Occupied slots in ascending letter order.
    pub(crate) fn children(&self) -> ChildSlots<'_> {
        ChildSlots {
            table: self.children.as_deref(),
            index: 0,
        }
    }
}

/// Iterator over the occupied slots of a node's child table.
#[derive(Clone)]
pub(crate) struct ChildSlots<'a> {
    table: Option<&'a ChildTable>,
    index: usize,
}

impl Iterator for ChildSlots<'_> {
    type Item = (Letter, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table?;
        while self.index < ALPHABET_SIZE {
            let index = self.index;
            self.index += 1;
            let slot = table.0[index];
            if slot != EMPTY {
                let letter = Letter::from_index(index)?;
                return Some((letter, NodeId::new(slot)));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.table {
            Some(_) => (0, Some(ALPHABET_SIZE - self.index)),
            None => (0, Some(0)),
        }
    }
}
