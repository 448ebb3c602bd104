//! CubeSearch - Parallel Rubik's Cube Algorithm Search
//!
//! Describe a search in a config file, or in code, and call `run_search`.
//!
//! # Example
//!
//! ```rust
//! use cubesearch::prelude::*;
//!
//! let config = SearchConfig::new()
//!     .with_scramble("R U")
//!     .with_group("all")
//!     .with_threads(ThreadCountConfig::Sequential)
//!     .with_level(LevelConfig::extend("single"))
//!     .with_level(LevelConfig::extend("single").with_check());
//!
//! let outcome = run_search(&config).unwrap();
//! assert_eq!(outcome.solutions, vec![Algorithm::parse("U' R'").unwrap()]);
//! ```

// Move algebra and cube model
pub use cubesearch_core::{
    Algorithm, AlgorithmError, Amount, Category, Corner, Cube, CubeSearchError, Edge, Face,
    Layer, Metric, Move, Piece, PieceGroup, PuzzleState, Result, SolveMask,
};

// Configuration
pub use cubesearch_config::{
    ConfigError, EvaluationConfig, LevelConfig, MoveSetConfig, PolicyConfig, ScrambleConfig,
    SearchConfig, ThreadCountConfig,
};

// Search engine
pub use cubesearch_solver::{
    DeepSearch, LevelAction, MoveSet, Policy, SearchBuilder, SearchLevel, SearchStats,
    ThreadCount,
};

#[cfg(feature = "console")]
pub use cubesearch_console as console;

mod search;
pub use search::{run_search, SearchOutcome};

pub mod prelude {
    pub use super::{run_search, SearchOutcome};
    pub use super::{Algorithm, Cube, Face, Move, PieceGroup, PuzzleState};
    pub use super::{LevelConfig, SearchConfig, ThreadCountConfig};
    pub use super::{DeepSearch, MoveSet, Policy, SearchLevel, ThreadCount};
}
