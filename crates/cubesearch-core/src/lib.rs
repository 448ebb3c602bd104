//! CubeSearch Core - Move algebra and puzzle state for cube algorithm search
//!
//! This crate provides the fundamental abstractions for CubeSearch:
//! - The closed move alphabet and per-move attributes
//! - Algorithms with parsing, shrinking, grouping and geometric transforms
//! - The puzzle-state trait and a 3x3x3 cubie model
//! - Piece groups and solve masks

pub mod algorithm;
pub mod cube;
pub mod error;
pub mod moves;

pub use algorithm::{Algorithm, Metric};
pub use cube::{Corner, Cube, Edge, Face, Piece, PieceGroup, PuzzleState, SolveMask};
pub use error::{AlgorithmError, CubeSearchError, Result};
pub use moves::{Amount, Category, Join, Layer, Move, MOVE_COUNT};
