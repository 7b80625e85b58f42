//! Thread accounting for one traversal

use super::TraversalStats;

/// Tracks threading activity during a traversal
///
/// Everything here is a fixed set of counters, so carrying a tracker
/// keeps the traversal's extra space constant.
#[derive(Debug, Default)]
pub struct ThreadTracker {
    /// Values emitted
    visits: usize,

    /// Threads written into empty right slots
    installed: usize,

    /// Threads cleared again
    removed: usize,

    /// Right links followed while searching for predecessors
    predecessor_steps: usize,

    /// Threads currently present in the tree
    live: usize,

    /// Maximum seen
    peak_live: usize,
}

impl ThreadTracker {
    /// Create new tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an emitted value
    #[inline]
    pub fn visit(&mut self) {
        self.visits += 1;
    }

    /// Record one right link followed during a predecessor search
    #[inline]
    pub fn predecessor_step(&mut self) {
        self.predecessor_steps += 1;
    }

    /// Record a thread being installed
    #[inline]
    pub fn install_thread(&mut self) {
        self.installed += 1;
        self.live += 1;
        self.peak_live = self.peak_live.max(self.live);
    }

    /// Record a thread being removed
    #[inline]
    pub fn remove_thread(&mut self) {
        self.removed += 1;
        self.live = self.live.saturating_sub(1);
    }

    /// Snapshot the counters
    pub fn stats(&self) -> TraversalStats {
        TraversalStats {
            visits: self.visits,
            threads_installed: self.installed,
            threads_removed: self.removed,
            predecessor_steps: self.predecessor_steps,
            peak_live_threads: self.peak_live,
        }
    }
}
