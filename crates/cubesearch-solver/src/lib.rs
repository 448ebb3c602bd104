//! CubeSearch Solver Engine
//!
//! This crate provides the search engine:
//! - Multi-level branch search with commuting and shrink pruning
//! - Root fusion and scoped worker threads
//! - Ranking of solutions by first-two-layers progress
//! - Search statistics
//! - Configuration wiring (builder module)

pub mod builder;
pub mod evaluate;
pub mod partition;
pub mod search;
pub mod stats;

pub use builder::SearchBuilder;
pub use evaluate::{best_solution, score_solution, score_state, Policy, Weights, LENGTH_CAP};
pub use partition::{available_cores, ThreadCount};
pub use search::{DeepSearch, LevelAction, MoveSet, SearchLevel, MAX_TRACKED_MASKS};
pub use stats::SearchStats;
