//! Index-addressed arena for trie nodes.
//!
//! Every node lives in one `Vec` and is named by its position. Parent and child
//! links are indices rather than references, so the arena is the single owner
//! of the whole structure and can be moved or shared freely once built.

use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::builder::TrieError;
use super::children::Node;

/// Stable handle to a node inside one trie.
///
/// Ids are only meaningful for the trie that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub(crate) const fn get(self) -> u32 {
        self.0
    }

    /// Position of the node in its trie's arena. The root is always 0.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the sentinel root.
    #[inline]
    pub fn is_root(self) -> bool {
        self == NodeArena::ROOT
    }
}

/// Owner of every node of a trie.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// The root is allocated with the arena and always sits at index 0.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Creates an arena holding only the root.
    pub(crate) fn new() -> Self {
        NodeArena {
            nodes: vec![Node::root()],
        }
    }

    /// Appends `node` and returns its id.
    pub(crate) fn alloc(&mut self, node: Node) -> Result<NodeId, TrieError> {
        let id = u32::try_from(self.nodes.len()).map_err(|_| TrieError::Capacity)?;
        self.nodes.push(node);
        Ok(NodeId(id))
    }

    /// Returns the node for `id` if it belongs to this arena.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes, root included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops spare capacity once no more nodes will be added.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Number of symbols on the path from the root to `id`.
    pub(crate) fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Spells the path from the root to `id` by following parent links.
    pub(crate) fn reconstruct_word(&self, id: NodeId) -> String {
        let mut reversed: SmallVec<[char; 32]> = self
            .ancestors(id)
            .filter_map(|node| node.symbol())
            .map(|letter| letter.as_char())
            .collect();
        reversed.reverse();
        reversed.into_iter().collect()
    }

    /// Walks from `id` up to, but excluding, the root.
    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        let mut current = Some(id);
        std::iter::from_fn(move || {
            let node = self.get(current?)?;
            current = node.parent();
            node.symbol().map(|_| node)
        })
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
