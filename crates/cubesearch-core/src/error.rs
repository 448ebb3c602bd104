//! Error types for CubeSearch

use thiserror::Error;

use crate::moves::Move;

/// Errors raised while building or editing an [`Algorithm`](crate::Algorithm).
///
/// Every operation that returns one of these leaves the algorithm unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// Opening and closing group markers do not balance.
    #[error("Unbalanced grouping in '{0}'")]
    UnbalancedGrouping(String),

    /// Cleaning the text left nothing to tokenize.
    #[error("No moves found in '{0}'")]
    NoMoves(String),

    /// A structural edit addressed a position past the end.
    #[error("Position {position} out of range for algorithm of length {len}")]
    OutOfRange { position: usize, len: usize },

    /// A conjugation was requested with something other than a whole-cube rotation.
    #[error("'{0}' is not a whole-cube rotation")]
    NotARotation(Move),

    /// A single move token could not be read.
    #[error("Unknown move '{0}'")]
    UnknownMove(String),
}

/// Main error type for CubeSearch operations
#[derive(Debug, Error)]
pub enum CubeSearchError {
    /// Error in algorithm text or structure
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    /// A search level cannot be executed as configured
    #[error("Invalid search level: {0}")]
    InvalidLevel(String),

    /// A piece group name was not recognized
    #[error("Unknown piece group: {0}")]
    UnknownPieceGroup(String),

    /// A move set name was not recognized
    #[error("Unknown move set: {0}")]
    UnknownMoveSet(String),

    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for CubeSearch operations
pub type Result<T> = std::result::Result<T, CubeSearchError>;
