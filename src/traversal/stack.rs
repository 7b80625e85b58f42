//! Stack-based reference traversal
//!
//! Classic in-order walk with an explicit stack of pending ancestors.
//! Uses O(height) heap memory, so it is only meant for cross-checking
//! the threaded engine. Deep trees cost memory, never call stack.

use super::Sink;
use crate::tree::{NodeId, Tree};

/// Emit reachable values of `tree` in in-order sequence using an explicit stack
pub fn stack_in_order<T, S>(tree: &Tree<T>, sink: &mut S)
where
    S: Sink<T> + ?Sized,
{
    let nodes = tree.nodes();
    let mut pending: Vec<NodeId> = Vec::new();
    let mut current = tree.root();

    loop {
        while let Some(id) = current {
            pending.push(id);
            current = nodes[id.0].left;
        }
        let Some(id) = pending.pop() else { break };
        sink.accept(&nodes[id.0].value);
        current = nodes[id.0].right;
    }
}
