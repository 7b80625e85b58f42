//! # Morris In-order Traversal
//!
//! Visits the nodes of a binary tree in in-order sequence using O(1)
//! extra space: no recursion, no explicit stack.
//!
//! ## Core Algorithm
//!
//! 1. **No left child**: emit the node, move right
//! 2. **Left child, no thread yet**: point the predecessor's empty right
//!    slot back at the node, move left
//! 3. **Left child, thread found**: clear the thread, emit the node, move right
//!
//! The tree is borrowed mutably for the whole call and comes back
//! structurally identical.
//!
//! ## Usage Example
//!
//! ```
//! use morris::{Traversal, TraversalConfig};
//!
//! let mut tree = morris::tree::sample();
//! let mut values = Vec::new();
//! let report = Traversal::new(TraversalConfig::checked()).run(&mut tree, &mut values)?;
//!
//! assert_eq!(values, vec![4, 2, 5, 1, 3]);
//! assert!(report.stats.threads_balanced());
//! # Ok::<(), morris::TraversalError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod space; // Thread and work accounting
pub mod traversal; // Morris engine, reference traversal, sinks
pub mod tree; // Arena-backed binary tree

// Re-exports for convenience
pub use space::{ThreadTracker, TraversalProfile, TraversalStats};
pub use traversal::{morris_in_order, stack_in_order, Sink};
pub use tree::{NodeId, Side, Tree};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Id does not belong to this tree's arena
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// Target child slot already holds a node
    #[error("{side} slot of {parent} already holds {existing}")]
    SlotOccupied {
        /// Parent being attached to
        parent: NodeId,
        /// Requested slot
        side: Side,
        /// Current occupant
        existing: NodeId,
    },

    /// Node already has a parent
    #[error("Node {child} is already attached under {parent}")]
    AlreadyAttached {
        /// Node being attached
        child: NodeId,
        /// Its current parent
        parent: NodeId,
    },

    /// The root cannot be attached under another node
    #[error("Root {0} cannot become a child")]
    RootAsChild(NodeId),

    /// Attachment would close a cycle
    #[error("Attaching {child} under {parent} would create a cycle")]
    WouldCycle {
        /// Parent being attached to
        parent: NodeId,
        /// Ancestor of (or equal to) the parent
        child: NodeId,
    },

    /// Level-order token could not be parsed
    #[error("Invalid token '{token}' at position {position}")]
    InvalidToken {
        /// Token index
        position: usize,
        /// Offending text
        token: String,
    },

    /// Level-order value with no free slot left to hold it
    #[error("Entry at position {position} has no parent slot")]
    OrphanEntry {
        /// Entry index
        position: usize,
    },
}

/// Errors detected by a verified traversal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// Child links differ from their state before the traversal
    #[error("Links of node {node} were not restored")]
    StructureNotRestored {
        /// First node whose links changed
        node: NodeId,
    },

    /// Threads left behind in the tree
    #[error("Dangling threads: installed {installed}, removed {removed}")]
    DanglingThreads {
        /// Threads installed
        installed: usize,
        /// Threads removed
        removed: usize,
    },

    /// Morris output diverged from the stack-based reference
    #[error("Output diverges from reference traversal at position {position}")]
    ReferenceMismatch {
        /// First differing index
        position: usize,
    },
}

/// Configuration for an orchestrated traversal
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// Snapshot links before the traversal and compare afterwards
    ///
    /// Costs O(n) extra memory; meant for tests and debugging.
    pub verify_restoration: bool,

    /// Attach a [`TraversalProfile`] to the report
    pub profile: bool,
}

impl TraversalConfig {
    /// Verification and profiling both enabled
    pub fn checked() -> Self {
        Self {
            verify_restoration: true,
            profile: true,
        }
    }
}

/// Result of an orchestrated traversal
#[derive(Debug, Clone)]
pub struct TraversalReport {
    /// Counters from the engine
    pub stats: TraversalStats,

    /// Profile (if enabled)
    pub profile: Option<TraversalProfile>,
}

/// Traversal orchestrator
///
/// Wraps [`morris_in_order`] with optional checks.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    config: TraversalConfig,
}

impl Traversal {
    /// Create new orchestrator
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// Traverse `tree`, feeding `sink`
    pub fn run<T, S>(&self, tree: &mut Tree<T>, sink: &mut S) -> Result<TraversalReport, TraversalError>
    where
        S: Sink<T> + ?Sized,
    {
        let before = self.config.verify_restoration.then(|| tree.links());

        let stats = morris_in_order(tree, sink);

        if !stats.threads_balanced() {
            warn!(
                installed = stats.threads_installed,
                removed = stats.threads_removed,
                "traversal left threads behind"
            );
            return Err(TraversalError::DanglingThreads {
                installed: stats.threads_installed,
                removed: stats.threads_removed,
            });
        }

        if let Some(before) = before {
            let after = tree.links();
            if let Some(index) = (0..before.len()).find(|&i| before.get(i) != after.get(i)) {
                let node = NodeId(index);
                warn!(%node, "links not restored");
                return Err(TraversalError::StructureNotRestored { node });
            }
            debug!(nodes = before.len(), "links restored");
        }

        let profile = self.config.profile.then(|| TraversalProfile {
            stats,
            reachable_nodes: tree.reachable(),
            height: tree.height(),
        });

        Ok(TraversalReport { stats, profile })
    }

    /// Traverse and compare against [`stack_in_order`]
    ///
    /// Returns the Morris output on agreement.
    pub fn check<T>(&self, tree: &mut Tree<T>) -> Result<(Vec<T>, TraversalReport), TraversalError>
    where
        T: Clone + PartialEq,
    {
        let mut expected = Vec::new();
        stack_in_order(tree, &mut expected);

        let mut actual = Vec::with_capacity(expected.len());
        let report = self.run(tree, &mut actual)?;

        let diverged = expected
            .iter()
            .zip(&actual)
            .position(|(e, a)| e != a)
            .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())));
        if let Some(position) = diverged {
            warn!(position, "morris output diverges from reference");
            return Err(TraversalError::ReferenceMismatch { position });
        }
        debug!(values = actual.len(), "morris output matches reference");

        Ok((actual, report))
    }
}
