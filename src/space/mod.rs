//! Space and work accounting
//!
//! Verifies the two claims Morris threading makes: extra space stays
//! constant (threads live inside the tree) and predecessor searches add
//! only linear work.

mod tracker;

pub use tracker::ThreadTracker;

/// Counters describing one finished traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TraversalStats {
    /// Values emitted
    pub visits: usize,

    /// Threads installed
    pub threads_installed: usize,

    /// Threads removed
    pub threads_removed: usize,

    /// Right links followed while locating predecessors
    pub predecessor_steps: usize,

    /// Most threads present at the same time
    pub peak_live_threads: usize,
}

impl TraversalStats {
    /// Every installed thread was removed again
    pub fn threads_balanced(&self) -> bool {
        self.threads_installed == self.threads_removed
    }

    /// Predecessor walks stayed within 2·n steps for `nodes` nodes
    ///
    /// Each right edge inside a left subtree is walked once to install a
    /// thread and once to find it again.
    pub fn within_linear_bound(&self, nodes: usize) -> bool {
        self.predecessor_steps <= 2 * nodes
    }
}

/// Detailed traversal profile (if enabled)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TraversalProfile {
    /// Counters
    pub stats: TraversalStats,

    /// Nodes reachable from the root
    pub reachable_nodes: usize,

    /// Tree height in nodes
    pub height: usize,
}

impl TraversalProfile {
    /// Check counters against the tree shape
    ///
    /// Peak live threads can never exceed the height: threads only sit on
    /// the left spine leading to the cursor.
    pub fn consistent(&self) -> bool {
        self.stats.visits == self.reachable_nodes
            && self.stats.threads_balanced()
            && self.stats.within_linear_bound(self.reachable_nodes)
            && self.stats.peak_live_threads <= self.height
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Nodes: {} (height {})\nThreads:\n  Installed: {}\n  Removed: {}\n  Peak live: {}\nPredecessor steps: {}",
            self.reachable_nodes,
            self.height,
            self.stats.threads_installed,
            self.stats.threads_removed,
            self.stats.peak_live_threads,
            self.stats.predecessor_steps
        )
    }
}
