//! Search statistics.
//!
//! Each worker keeps its own counters; they are merged after the workers
//! join, so counting never contends.

use std::time::{Duration, Instant};

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use cubesearch_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_node();
/// stats.record_pruned();
/// stats.record_check();
/// stats.record_solution();
///
/// let mut total = SearchStats::default();
/// total.merge(&stats);
/// assert_eq!(total.nodes, 1);
/// assert_eq!(total.pruned, 1);
/// assert_eq!(total.solutions, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Branches extended by one move.
    pub nodes: u64,
    /// Candidates skipped by commuting or shrink pruning.
    pub pruned: u64,
    /// State checks performed.
    pub checks: u64,
    /// Solutions recorded.
    pub solutions: u64,
    /// Root branches finished.
    pub roots_completed: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.elapsed = Some(self.elapsed());
    }

    /// Time since [`start`](Self::start), or the frozen duration after
    /// [`finish`](Self::finish).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_node(&mut self) {
        self.nodes += 1;
    }

    pub fn record_pruned(&mut self) {
        self.pruned += 1;
    }

    pub fn record_check(&mut self) {
        self.checks += 1;
    }

    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    pub fn record_root(&mut self) {
        self.roots_completed += 1;
    }

    /// Adds another worker's counters.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.pruned += other.pruned;
        self.checks += other.checks;
        self.solutions += other.solutions;
        self.roots_completed += other.roots_completed;
    }

    /// Nodes per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}
