//! Morris threading
//!
//! Key idea: the return path a recursion stack would hold is parked in
//! the tree itself. Before descending left from `current`, the rightmost
//! node of the left subtree (the in-order predecessor) gets its empty
//! right slot pointed back at `current`. Following that thread later
//! means the left subtree is done; the thread is cleared on the spot.
//!
//! Extra space: one cursor, one predecessor index, a few counters.
//! Time: O(n), every right edge inside a left subtree is walked twice.

use tracing::{debug, trace};

use super::Sink;
use crate::space::{ThreadTracker, TraversalStats};
use crate::tree::Tree;

/// Emit every reachable value of `tree` into `sink`, in in-order sequence
///
/// Right links are rewritten while the call runs and restored before it
/// returns. The exclusive borrow keeps anyone else from observing the
/// threaded state.
///
/// The tree must be acyclic. Trees built through [`Tree`]'s public API
/// always are.
pub fn morris_in_order<T, S>(tree: &mut Tree<T>, sink: &mut S) -> TraversalStats
where
    S: Sink<T> + ?Sized,
{
    let mut tracker = ThreadTracker::new();
    let mut current = tree.root();
    let nodes = tree.nodes_mut();

    while let Some(id) = current {
        let Some(left) = nodes[id.0].left else {
            sink.accept(&nodes[id.0].value);
            tracker.visit();
            current = nodes[id.0].right;
            continue;
        };

        // Rightmost node of the left subtree, or the node already threaded to `id`
        let mut predecessor = left;
        while let Some(next) = nodes[predecessor.0].right {
            if next == id {
                break;
            }
            predecessor = next;
            tracker.predecessor_step();
        }

        if nodes[predecessor.0].right.is_none() {
            nodes[predecessor.0].right = Some(id);
            tracker.install_thread();
            trace!(node = %id, predecessor = %predecessor, "thread installed");
            current = Some(left);
        } else {
            nodes[predecessor.0].right = None;
            tracker.remove_thread();
            trace!(node = %id, predecessor = %predecessor, "thread removed");
            sink.accept(&nodes[id.0].value);
            tracker.visit();
            current = nodes[id.0].right;
        }
    }

    let stats = tracker.stats();
    debug!(
        visits = stats.visits,
        threads = stats.threads_installed,
        predecessor_steps = stats.predecessor_steps,
        peak_live_threads = stats.peak_live_threads,
        "morris traversal finished"
    );
    stats
}
