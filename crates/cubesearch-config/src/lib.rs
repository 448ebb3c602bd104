//! Configuration system for CubeSearch.
//!
//! Load search configuration from TOML or YAML to choose the scramble,
//! the piece groups to solve, the search levels and the evaluation policy
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use cubesearch_config::{LevelAction, SearchConfig, ThreadCountConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     scramble = "R U R' U'"
//!     groups = ["cross_d"]
//!     threads = "sequential"
//!
//!     [[levels]]
//!     moves = "single"
//!
//!     [[levels]]
//!     action = "repeat_inverse"
//!     check = true
//! "#).unwrap();
//!
//! assert_eq!(config.depth(), 2);
//! assert_eq!(config.threads, ThreadCountConfig::Sequential);
//! assert_eq!(config.levels[1].action, LevelAction::RepeatInverse);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use cubesearch_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Scramble to search from: notation or a seeded random scramble.
    #[serde(default)]
    pub scramble: ScrambleConfig,

    /// Piece group names, e.g. `cross_d` or `pair_dfr_fr`.
    #[serde(default)]
    pub groups: Vec<String>,

    /// Track each group separately instead of pooling them.
    #[serde(default)]
    pub multiple_search: bool,

    /// Fuse the first two levels into two-move roots.
    #[serde(default = "default_optimize_threads")]
    pub optimize_threads: bool,

    /// Worker threads for the search.
    #[serde(default)]
    pub threads: ThreadCountConfig,

    /// Search levels, one per move of depth.
    #[serde(default)]
    pub levels: Vec<LevelConfig>,

    /// Optional ranking of the solutions found.
    #[serde(default)]
    pub evaluation: Option<EvaluationConfig>,
}

fn default_optimize_threads() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            scramble: ScrambleConfig::default(),
            groups: Vec::new(),
            multiple_search: false,
            optimize_threads: default_optimize_threads(),
            threads: ThreadCountConfig::default(),
            levels: Vec::new(),
            evaluation: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the scramble notation.
    pub fn with_scramble(mut self, scramble: impl Into<String>) -> Self {
        self.scramble = ScrambleConfig::Text(scramble.into());
        self
    }

    /// Uses a seeded random scramble of the given length.
    pub fn with_random_scramble(mut self, length: usize, seed: u64) -> Self {
        self.scramble = ScrambleConfig::Random(RandomScrambleConfig {
            length,
            seed: Some(seed),
        });
        self
    }

    /// Adds a piece group by name.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Adds a search level.
    pub fn with_level(mut self, level: LevelConfig) -> Self {
        self.levels.push(level);
        self
    }

    pub fn with_threads(mut self, threads: ThreadCountConfig) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_multiple_search(mut self, multiple_search: bool) -> Self {
        self.multiple_search = multiple_search;
        self
    }

    pub fn with_optimize_threads(mut self, optimize_threads: bool) -> Self {
        self.optimize_threads = optimize_threads;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationConfig) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    /// Configured search depth.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Checks the structural rules the search relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when there is nothing to search for,
    /// nowhere to search, or a level cannot produce candidates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::Invalid("no piece groups configured".into()));
        }
        if self.levels.is_empty() {
            return Err(ConfigError::Invalid("no search levels configured".into()));
        }
        for (index, level) in self.levels.iter().enumerate() {
            match level.action {
                LevelAction::Extend if level.moves.is_none() => {
                    return Err(ConfigError::Invalid(format!(
                        "level {} extends the branch but has no moves",
                        index
                    )));
                }
                LevelAction::RepeatInverse if index < 2 => {
                    return Err(ConfigError::Invalid(format!(
                        "level {} repeats an inverse but needs two levels before it",
                        index
                    )));
                }
                _ => {}
            }
        }
        if !self.levels.iter().any(|level| level.check) {
            return Err(ConfigError::Invalid("no level checks for solutions".into()));
        }
        if let ScrambleConfig::Random(random) = &self.scramble {
            if random.length == 0 {
                return Err(ConfigError::Invalid("random scramble of length 0".into()));
            }
        }
        Ok(())
    }
}

/// Scramble source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScrambleConfig {
    /// Scramble in move notation.
    Text(String),

    /// Random scramble drawn from the single-layer turns.
    Random(RandomScrambleConfig),
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig::Text(String::new())
    }
}

/// Random scramble configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RandomScrambleConfig {
    /// Number of moves after merging.
    pub length: usize,

    /// Random seed for reproducible scrambles.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Worker thread configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCountConfig {
    /// Run every root branch on the calling thread.
    Sequential,

    /// Use every available core.
    #[default]
    Auto,

    /// Specific number of threads, clamped to the available cores.
    Count(usize),
}

/// What a level does with the branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelAction {
    /// Try every move of the level's move set.
    #[default]
    Extend,

    /// Append the inverse of the move added two levels back.
    RepeatInverse,
}

/// A level's candidate moves: a named set or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MoveSetConfig {
    /// A named set such as `single`, `urf` or `ud_preserving`.
    Named(String),

    /// Explicit moves in notation, e.g. `["R", "U'", "M2"]`.
    List(Vec<String>),
}

/// One search level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LevelConfig {
    #[serde(default)]
    pub action: LevelAction,

    /// Candidate moves, required for extending levels.
    #[serde(default)]
    pub moves: Option<MoveSetConfig>,

    /// Check the branch against the piece groups at this level.
    #[serde(default)]
    pub check: bool,
}

impl LevelConfig {
    /// Creates an extending level over a named move set.
    pub fn extend(moves: impl Into<String>) -> Self {
        LevelConfig {
            action: LevelAction::Extend,
            moves: Some(MoveSetConfig::Named(moves.into())),
            check: false,
        }
    }

    /// Creates an extending level over an explicit move list.
    pub fn extend_list<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LevelConfig {
            action: LevelAction::Extend,
            moves: Some(MoveSetConfig::List(
                moves.into_iter().map(Into::into).collect(),
            )),
            check: false,
        }
    }

    /// Creates a level that undoes the move made two levels back.
    pub fn repeat_inverse() -> Self {
        LevelConfig {
            action: LevelAction::RepeatInverse,
            moves: None,
            check: false,
        }
    }

    /// Enables solution checks at this level.
    pub fn with_check(mut self) -> Self {
        self.check = true;
        self
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EvaluationConfig {
    /// Face the cross is built on, e.g. `d`.
    #[serde(default = "default_start_face")]
    pub start_face: String,

    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_start_face() -> String {
    "d".to_string()
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            start_face: default_start_face(),
            policy: PolicyConfig::default(),
        }
    }
}

/// Scoring policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Favour progress on the first two layers.
    #[default]
    Best,

    /// Favour short solutions.
    Short,
}
