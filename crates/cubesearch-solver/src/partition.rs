//! Worker thread resolution for root-branch striping.

use std::fmt;

use cubesearch_config::ThreadCountConfig;

/// Thread count configuration for the branch search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadCount {
    /// Run every root on the calling thread.
    Sequential,
    /// Use every available CPU core.
    #[default]
    Auto,
    /// Use a specific number of threads, clamped to the available cores.
    Specific(usize),
}

impl ThreadCount {
    /// Resolves to an actual worker count for `root_count` roots.
    ///
    /// Never more workers than roots, never fewer than one.
    pub fn resolve(&self, root_count: usize) -> usize {
        let cores = available_cores();
        let workers = match self {
            ThreadCount::Sequential => 1,
            ThreadCount::Auto => cores,
            ThreadCount::Specific(n) => (*n).min(cores),
        };
        workers.min(root_count).max(1)
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, ThreadCount::Sequential)
    }
}

/// Number of cores the process may use.
pub fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}

/// Negative runs sequentially, zero uses all cores, positive asks for that many.
impl From<i32> for ThreadCount {
    fn from(n: i32) -> Self {
        match n {
            n if n < 0 => ThreadCount::Sequential,
            0 => ThreadCount::Auto,
            n => ThreadCount::Specific(n as usize),
        }
    }
}

impl From<ThreadCountConfig> for ThreadCount {
    fn from(config: ThreadCountConfig) -> Self {
        match config {
            ThreadCountConfig::Sequential => ThreadCount::Sequential,
            ThreadCountConfig::Auto => ThreadCount::Auto,
            ThreadCountConfig::Count(n) => ThreadCount::Specific(n),
        }
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Sequential => write!(f, "Sequential"),
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Specific(n) => write!(f, "{}", n),
        }
    }
}
