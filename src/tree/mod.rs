//! Arena-backed binary tree
//!
//! Nodes live in one contiguous `Vec`, addressed by [`NodeId`].
//! Construction is checked: every node has at most one parent and no
//! attachment may close a cycle, so any tree built here satisfies the
//! traversal engine's precondition.

mod builder;
mod node;

pub use builder::{parse_level_order, sample};
pub use node::{Links, Node, NodeId, Side};

use crate::traversal;
use crate::TreeError;

/// Binary tree stored in an arena
///
/// Nodes that are not reachable from the root are kept in the arena but
/// ignored by every traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create a tree holding a single root node
    pub fn with_root(value: T) -> (Self, NodeId) {
        let mut tree = Self::new();
        let root = tree.add_node(value);
        tree.root = Some(root);
        (tree, root)
    }

    /// Add a detached node and return its id
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(value));
        id
    }

    /// Make `id` the root
    ///
    /// The node must not be attached under another node.
    pub fn set_root(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.get(id)?;
        if let Some(parent) = node.parent {
            return Err(TreeError::AlreadyAttached { child: id, parent });
        }
        self.root = Some(id);
        Ok(())
    }

    /// Attach `child` as the left child of `parent`
    pub fn attach_left(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(parent, Side::Left, child)
    }

    /// Attach `child` as the right child of `parent`
    pub fn attach_right(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(parent, Side::Right, child)
    }

    /// Create a node holding `value` as the left child of `parent`
    pub fn insert_left(&mut self, parent: NodeId, value: T) -> Result<NodeId, TreeError> {
        self.insert(parent, Side::Left, value)
    }

    /// Create a node holding `value` as the right child of `parent`
    pub fn insert_right(&mut self, parent: NodeId, value: T) -> Result<NodeId, TreeError> {
        self.insert(parent, Side::Right, value)
    }

    fn insert(&mut self, parent: NodeId, side: Side, value: T) -> Result<NodeId, TreeError> {
        // Validate before allocating so a failed insert leaves no stray node
        if let Some(existing) = self.get(parent)?.child(side) {
            return Err(TreeError::SlotOccupied {
                parent,
                side,
                existing,
            });
        }
        // A fresh leaf cannot be anyone's ancestor, so no cycle walk
        let child = self.add_node(value);
        self.link(parent, side, child);
        Ok(child)
    }

    /// Link `child` into `parent`'s `side` slot
    pub fn attach(&mut self, parent: NodeId, side: Side, child: NodeId) -> Result<(), TreeError> {
        if let Some(existing) = self.get(parent)?.child(side) {
            return Err(TreeError::SlotOccupied {
                parent,
                side,
                existing,
            });
        }
        if let Some(current) = self.get(child)?.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }

        // Walk up from the parent; meeting the child means it is an ancestor
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(TreeError::WouldCycle { parent, child });
            }
            cursor = self.nodes[id.0].parent;
        }

        if self.root == Some(child) {
            return Err(TreeError::RootAsChild(child));
        }

        self.link(parent, side, child);
        Ok(())
    }

    /// Set the child slot and parent back-link without any checks
    fn link(&mut self, parent: NodeId, side: Side, child: NodeId) {
        *self.nodes[parent.0].child_mut(side) = Some(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn get(&self, id: NodeId) -> Result<&Node<T>, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    /// Node by id
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Root node id, `None` for an empty tree
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Value stored at `id`
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Left child of `id`
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::left)
    }

    /// Right child of `id`
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::right)
    }

    /// Number of nodes in the arena, detached ones included
    ///
    /// Not tied to [`is_empty`](Self::is_empty): a tree holding only
    /// detached nodes has a nonzero `len` and is still empty. Use
    /// [`reachable`](Self::reachable) for the traversed node count.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there is no root, so a traversal emits nothing
    ///
    /// Detached nodes may still sit in the arena and count towards
    /// [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes reachable from the root
    pub fn reachable(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Height in nodes: 0 for empty, 1 for a lone root
    pub fn height(&self) -> usize {
        let mut max = 0;
        self.walk(|_, depth| max = max.max(depth));
        max
    }

    /// Snapshot of every node's child links, indexed by arena slot
    pub fn links(&self) -> Vec<Links> {
        self.nodes.iter().map(Node::links).collect()
    }

    /// Visit reachable nodes with their 1-based depth, preorder
    fn walk(&self, mut visit: impl FnMut(NodeId, usize)) {
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            visit(id, depth);
            let node = &self.nodes[id.0];
            pending.extend(node.right.map(|c| (c, depth + 1)));
            pending.extend(node.left.map(|c| (c, depth + 1)));
        }
    }

    pub(crate) fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }
}

impl<T: Clone> Tree<T> {
    /// Collect values in in-order sequence via Morris traversal
    pub fn in_order(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        traversal::morris_in_order(self, &mut out);
        out
    }
}
